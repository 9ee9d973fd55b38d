//! Kindness map data: synthetic baseline points plus real events from curated news.
//!
//! Baseline points are drawn from [`MAJOR_CITIES`] weighted by population, so every
//! call returns a slightly different map. Real events come from news items the
//! caller has already fetched; nothing here performs I/O.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::libraries::major_cities::{City, MAJOR_CITIES};
use crate::models::{KindnessPoint, KindnessType, NewsItem};
use crate::services::geo_hub_index::GeoHubIndex;

/// Lower bound on baseline points (unless the city table is smaller)
pub const MIN_BASELINE_POINTS: usize = 50;

/// Upper bound on baseline points
pub const MAX_BASELINE_POINTS: usize = 80;

/// Maximum jitter applied to each coordinate, in degrees
pub const JITTER_DEGREES: f64 = 0.15;

/// Baseline timestamps fall within this window before now (1 hour)
pub const MAX_BASELINE_AGE_MS: i64 = 3_600_000;

/// Fixed prominence of points derived from news
pub const REAL_EVENT_INTENSITY: f64 = 0.8;

pub const POSITIVE_PHRASES: &[&str] = &[
    "Community helping neighbors",
    "Volunteers at work",
    "Donations flowing",
    "Random acts of kindness",
    "People making a difference",
];

pub const FALLBACK_PHRASE: &str = "Acts of kindness nearby";

/// Probability that a city makes it into the baseline set
pub fn inclusion_weight(city: &City) -> f64 {
    (city.population / 30.0).min(1.0)
}

fn baseline_intensity(city: &City) -> f64 {
    (city.population / 20.0).min(1.0)
}

/// Generate baseline kindness points from the major city table.
///
/// Returns between 50 and 80 points. Each call differs in which cities are
/// included, their jitter, phrase and timestamp.
pub fn generate_baseline_kindness() -> Vec<KindnessPoint> {
    generate_baseline_kindness_with(&mut rand::thread_rng(), Utc::now().timestamp_millis())
}

/// Same as [`generate_baseline_kindness`] with an explicit random source and clock
pub fn generate_baseline_kindness_with<R: Rng>(rng: &mut R, now_ms: i64) -> Vec<KindnessPoint> {
    let cities = select_baseline_cities(rng, MAJOR_CITIES);

    cities
        .into_iter()
        .map(|city| baseline_point(rng, city, now_ms))
        .collect()
}

/// Pick the cities for a baseline run.
///
/// Each city is included by an independent draw against its weight, then the
/// set is trimmed to [`MAX_BASELINE_POINTS`] or topped up to
/// [`MIN_BASELINE_POINTS`] with uniformly random picks.
pub fn select_baseline_cities<'a, R: Rng>(rng: &mut R, cities: &'a [City]) -> Vec<&'a City> {
    let mut included = Vec::with_capacity(cities.len());
    let mut remaining = Vec::new();

    for city in cities {
        if rng.gen::<f64>() < inclusion_weight(city) {
            included.push(city);
        } else {
            remaining.push(city);
        }
    }

    while included.len() > MAX_BASELINE_POINTS {
        let idx = rng.gen_range(0..included.len());
        included.remove(idx);
    }

    while included.len() < MIN_BASELINE_POINTS && !remaining.is_empty() {
        let idx = rng.gen_range(0..remaining.len());
        included.push(remaining.remove(idx));
    }

    included
}

fn baseline_point<R: Rng>(rng: &mut R, city: &City, now_ms: i64) -> KindnessPoint {
    let lat = city.lat + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES);
    let lon = city.lon + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES);
    let description = POSITIVE_PHRASES
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_PHRASE);
    let age_ms = rng.gen_range(0..MAX_BASELINE_AGE_MS);

    KindnessPoint::new(
        lat,
        lon,
        city.name,
        description,
        baseline_intensity(city),
        KindnessType::Baseline,
        now_ms - age_ms,
    )
}

/// Extract real kindness events from curated news items.
///
/// Only humanity/kindness stories are considered, and only the first
/// (highest-confidence) hub inferred from the title is used. Stories with no
/// hub are dropped.
pub fn extract_kindness_events<G>(items: &[NewsItem], geo: &G) -> Vec<KindnessPoint>
where
    G: GeoHubIndex + ?Sized,
{
    extract_kindness_events_at(items, geo, Utc::now().timestamp_millis())
}

pub fn extract_kindness_events_at<G>(items: &[NewsItem], geo: &G, now_ms: i64) -> Vec<KindnessPoint>
where
    G: GeoHubIndex + ?Sized,
{
    items
        .iter()
        .filter(|item| item.is_kindness_story())
        .filter_map(|item| {
            let Some(first) = geo.infer_hubs_from_title(&item.title).into_iter().next() else {
                debug!("No geo hub for kindness story: {}", item.title);
                return None;
            };

            Some(KindnessPoint::new(
                first.hub.lat,
                first.hub.lon,
                item.title.as_str(),
                item.title.as_str(),
                REAL_EVENT_INTENSITY,
                KindnessType::Real,
                now_ms,
            ))
        })
        .collect()
}

/// Build the full kindness map: real events first so they render on top,
/// followed by the baseline.
pub fn fetch_kindness_data<G>(items: Option<&[NewsItem]>, geo: &G) -> Vec<KindnessPoint>
where
    G: GeoHubIndex + ?Sized,
{
    fetch_kindness_data_with(
        items,
        geo,
        &mut rand::thread_rng(),
        Utc::now().timestamp_millis(),
    )
}

pub fn fetch_kindness_data_with<G, R>(
    items: Option<&[NewsItem]>,
    geo: &G,
    rng: &mut R,
    now_ms: i64,
) -> Vec<KindnessPoint>
where
    G: GeoHubIndex + ?Sized,
    R: Rng,
{
    let baseline = generate_baseline_kindness_with(rng, now_ms);
    let mut points = items
        .map(|items| extract_kindness_events_at(items, geo, now_ms))
        .unwrap_or_default();

    debug!(
        "Generated kindness data: {} real, {} baseline",
        points.len(),
        baseline.len()
    );

    points.extend(baseline);
    points
}
