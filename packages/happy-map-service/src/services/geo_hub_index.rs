use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::libraries::major_cities::MAJOR_CITIES;
use crate::models::{GeoHub, GeoHubError, HubMatch};

/// Confidence when a headline names the hub directly
const PRIMARY_CONFIDENCE: f64 = 1.0;

/// Confidence when a headline uses one of the hub's aliases
const ALIAS_CONFIDENCE: f64 = 0.7;

/// Well-known alternative names for cities in the major city table
const CITY_ALIASES: &[(&str, &[&str])] = &[
    ("New York", &["NYC", "Manhattan", "Brooklyn"]),
    ("Mumbai", &["Bombay"]),
    ("Ho Chi Minh City", &["Saigon"]),
    ("Sao Paulo", &["São Paulo"]),
    ("Bogota", &["Bogotá"]),
    ("Beijing", &["Peking"]),
    ("Zurich", &["Zürich"]),
    ("San Francisco", &["Bay Area"]),
    ("Mexico City", &["CDMX"]),
    ("Kuala Lumpur", &["KL"]),
];

/// Maps free-text headlines to candidate geographic hubs
pub trait GeoHubIndex {
    /// Candidate hubs for a headline, highest confidence first
    fn infer_hubs_from_title(&self, title: &str) -> Vec<HubMatch>;
}

impl<F> GeoHubIndex for F
where
    F: Fn(&str) -> Vec<HubMatch>,
{
    fn infer_hubs_from_title(&self, title: &str) -> Vec<HubMatch> {
        self(title)
    }
}

struct HubPattern {
    hub: GeoHub,
    primary: String,
    pattern: Regex,
}

impl HubPattern {
    fn compile(hub: GeoHub) -> Result<Self, GeoHubError> {
        let primary = hub
            .keywords
            .first()
            .map(|k| k.to_lowercase())
            .ok_or_else(|| GeoHubError::NoKeywords(hub.id.clone()))?;

        // Longest first so multi-word keywords win over their prefixes
        let mut keywords: Vec<&str> = hub.keywords.iter().map(String::as_str).collect();
        keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .map_err(|source| GeoHubError::InvalidPattern {
                hub: hub.id.clone(),
                source,
            })?;

        Ok(Self {
            hub,
            primary,
            pattern,
        })
    }

    /// Best (confidence, position, keyword) for this hub within `title`
    fn best_match(&self, title: &str) -> Option<(f64, usize, String)> {
        self.pattern
            .find_iter(title)
            .map(|m| {
                let confidence = if m.as_str().to_lowercase() == self.primary {
                    PRIMARY_CONFIDENCE
                } else {
                    ALIAS_CONFIDENCE
                };
                (confidence, m.start(), m.as_str().to_string())
            })
            .max_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.1.cmp(&a.1))
            })
    }
}

/// Keyword-based headline geocoder.
///
/// Each hub's first keyword is its primary name; any further keywords are
/// aliases and score lower.
pub struct KeywordHubIndex {
    entries: Vec<HubPattern>,
}

impl KeywordHubIndex {
    pub fn new(hubs: Vec<GeoHub>) -> Result<Self, GeoHubError> {
        let entries = hubs
            .into_iter()
            .map(HubPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Build an index over the major city table with common aliases
    pub fn major_cities() -> Result<Self, GeoHubError> {
        let hubs = MAJOR_CITIES
            .iter()
            .map(|city| {
                let mut keywords = vec![city.name.to_string()];
                let aliases = CITY_ALIASES
                    .iter()
                    .find(|(name, _)| *name == city.name)
                    .map(|(_, aliases)| *aliases)
                    .unwrap_or_default();
                keywords.extend(aliases.iter().map(|a| a.to_string()));
                GeoHub::new(hub_id(city.name), city.name, city.lat, city.lon, keywords)
            })
            .collect();

        let index = Self::new(hubs)?;
        debug!("Built geo hub index with {} hubs", index.len());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hubs(&self) -> impl Iterator<Item = &GeoHub> {
        self.entries.iter().map(|e| &e.hub)
    }
}

impl GeoHubIndex for KeywordHubIndex {
    fn infer_hubs_from_title(&self, title: &str) -> Vec<HubMatch> {
        let mut found: Vec<(usize, HubMatch)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                entry
                    .best_match(title)
                    .map(|(confidence, position, matched_keyword)| {
                        (
                            position,
                            HubMatch {
                                hub: entry.hub.clone(),
                                confidence,
                                matched_keyword,
                            },
                        )
                    })
            })
            .collect();

        found.sort_by(|(pos_a, a), (pos_b, b)| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| pos_a.cmp(pos_b))
                .then_with(|| a.hub.name.cmp(&b.hub.name))
        });

        found.into_iter().map(|(_, m)| m).collect()
    }
}

fn hub_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
