use serde::{Deserialize, Serialize};

/// A real-world place that news headlines can be attributed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoHub {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub keywords: Vec<String>,
}

impl GeoHub {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lon,
            keywords,
        }
    }
}

/// A candidate hub for a headline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubMatch {
    pub hub: GeoHub,
    pub confidence: f64,    // 0-1
    pub matched_keyword: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeoHubError {
    #[error("Hub {0} has no keywords.")]
    NoKeywords(String),

    #[error("Invalid keyword pattern for hub {hub}: {source}")]
    InvalidPattern {
        hub: String,
        #[source]
        source: regex::Error,
    },
}
