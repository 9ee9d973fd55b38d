use serde::{Deserialize, Serialize};

/// Category tag carried by curated humanity/kindness news stories
pub const KINDNESS_CATEGORY: &str = "humanity-kindness";

/// Where a kindness point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindnessType {
    /// Synthetic background activity around a major city
    Baseline,
    /// Derived from a curated news item
    Real,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindnessPoint {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub description: String,
    pub intensity: f64,    // 0-1, higher renders more prominently
    #[serde(rename = "type")]
    pub kind: KindnessType,
    pub timestamp: i64,    // Unix timestamp in milliseconds
}

impl KindnessPoint {
    /// Create a point, clamping intensity into [0, 1]
    pub fn new(
        lat: f64,
        lon: f64,
        name: impl Into<String>,
        description: impl Into<String>,
        intensity: f64,
        kind: KindnessType,
        timestamp: i64,
    ) -> Self {
        Self {
            lat,
            lon,
            name: name.into(),
            description: description.into(),
            intensity: clamp_intensity(intensity),
            kind,
            timestamp,
        }
    }

    pub fn is_real(&self) -> bool {
        self.kind == KindnessType::Real
    }
}

/// A curated news item as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happy_category: Option<String>,
}

impl NewsItem {
    pub fn new(title: impl Into<String>, happy_category: Option<&str>) -> Self {
        Self {
            title: title.into(),
            happy_category: happy_category.map(str::to_string),
        }
    }

    /// Check if the item is tagged as a humanity/kindness story
    pub fn is_kindness_story(&self) -> bool {
        self.happy_category.as_deref() == Some(KINDNESS_CATEGORY)
    }
}

fn clamp_intensity(intensity: f64) -> f64 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_is_clamped() {
        let high = KindnessPoint::new(0.0, 0.0, "a", "a", 1.9, KindnessType::Baseline, 0);
        let low = KindnessPoint::new(0.0, 0.0, "a", "a", -0.2, KindnessType::Baseline, 0);
        let nan = KindnessPoint::new(0.0, 0.0, "a", "a", f64::NAN, KindnessType::Baseline, 0);

        assert_eq!(high.intensity, 1.0);
        assert_eq!(low.intensity, 0.0);
        assert_eq!(nan.intensity, 0.0);
    }

    #[test]
    fn test_point_serializes_type_tag() {
        let point = KindnessPoint::new(10.0, 20.0, "Title", "Title", 0.8, KindnessType::Real, 42);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["type"], "real");
        assert_eq!(json["lat"], 10.0);
        assert_eq!(json["timestamp"], 42);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_news_item_uses_camel_case_category() {
        let item: NewsItem = serde_json::from_str(
            r#"{"title":"Neighbors rebuild school","happyCategory":"humanity-kindness"}"#,
        )
        .unwrap();
        assert!(item.is_kindness_story());

        let untagged: NewsItem = serde_json::from_str(r#"{"title":"Markets rally"}"#).unwrap();
        assert_eq!(untagged.happy_category, None);
        assert!(!untagged.is_kindness_story());
    }

    #[test]
    fn test_other_category_is_not_kindness() {
        let item = NewsItem::new("Rare turtle hatches", Some("nature-wildlife"));
        assert!(!item.is_kindness_story());
    }
}
