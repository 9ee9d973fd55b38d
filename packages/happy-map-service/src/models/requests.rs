use serde::{Deserialize, Serialize};
use super::kindness::NewsItem;

/// Body of `POST /api/kindness`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindnessRequest {
    // Already-fetched curated news; absent means baseline only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_items: Option<Vec<NewsItem>>,
}

impl KindnessRequest {
    pub fn news(&self) -> Option<&[NewsItem]> {
        self.news_items.as_deref()
    }
}
