pub mod geo_hub;
pub mod kindness;
pub mod requests;

// Re-export commonly used types
pub use geo_hub::{GeoHub, GeoHubError, HubMatch};
pub use kindness::{KindnessPoint, KindnessType, NewsItem, KINDNESS_CATEGORY};
pub use requests::KindnessRequest;
