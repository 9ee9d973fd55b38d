//! Edge bot filter for API routes.
//!
//! `/favico/*` is only in the route matcher so social preview bots can fetch
//! favicon and OG card assets; those requests always pass. Social preview bots
//! are also allowed on the story preview endpoints.

use std::sync::LazyLock;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use regex::Regex;

/// Exact body of every rejection
pub const FORBIDDEN_BODY: &str = r#"{"error":"Forbidden"}"#;

/// Public favicon/OG asset prefix, never challenged
pub const PUBLIC_ASSET_PREFIX: &str = "/favico/";

/// Endpoints social preview bots may fetch to build link cards
pub const SOCIAL_PREVIEW_PATHS: &[&str] = &["/api/story", "/api/og-story"];

/// Shorter user agents are treated as scripts
pub const MIN_USER_AGENT_LEN: usize = 10;

static BOT_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)bot|crawl|spider|slurp|archiver|wget|curl/|python-requests|scrapy|httpclient|go-http|java/|libwww|perl|ruby|php/|ahrefsbot|semrushbot|mj12bot|dotbot|baiduspider|yandexbot|sogou|bytespider|petalbot|gptbot|claudebot|ccbot",
    )
    .unwrap()
});

static SOCIAL_PREVIEW_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)twitterbot|facebookexternalhit|linkedinbot|slackbot|telegrambot|whatsapp|discordbot|redditbot",
    )
    .unwrap()
});

/// Why a request was let through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    PublicAsset,
    SocialPreview,
    Browser,
}

/// Why a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    KnownBot,
    MissingOrShortUserAgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Pass(PassReason),
    Block(BlockReason),
}

impl FilterDecision {
    pub fn is_pass(&self) -> bool {
        matches!(self, FilterDecision::Pass(_))
    }

    pub fn is_block(&self) -> bool {
        matches!(self, FilterDecision::Block(_))
    }
}

/// Check if a user agent belongs to a link-unfurling crawler
pub fn is_social_preview_bot(user_agent: &str) -> bool {
    SOCIAL_PREVIEW_UA.is_match(user_agent)
}

/// Check if a user agent carries a crawler, scraper or HTTP library signature
pub fn is_generic_bot(user_agent: &str) -> bool {
    BOT_UA.is_match(user_agent)
}

/// Decide whether a request may reach the API.
///
/// A missing user agent is treated like an empty one.
pub fn evaluate(path: &str, user_agent: Option<&str>) -> FilterDecision {
    let ua = user_agent.unwrap_or("");

    if path.starts_with(PUBLIC_ASSET_PREFIX) {
        return FilterDecision::Pass(PassReason::PublicAsset);
    }

    if is_social_preview_bot(ua) && SOCIAL_PREVIEW_PATHS.contains(&path) {
        return FilterDecision::Pass(PassReason::SocialPreview);
    }

    if is_generic_bot(ua) {
        return FilterDecision::Block(BlockReason::KnownBot);
    }

    if ua.chars().count() < MIN_USER_AGENT_LEN {
        return FilterDecision::Block(BlockReason::MissingOrShortUserAgent);
    }

    FilterDecision::Pass(PassReason::Browser)
}

/// The fixed 403 JSON response returned for every blocked request
pub fn forbidden_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, "application/json")],
        FORBIDDEN_BODY,
    )
        .into_response()
}

/// Path scope the filter runs on (`/api/:path*` and `/favico/:path*`)
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    prefixes: Vec<String>,
}

impl RouteMatcher {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    /// A prefix matches itself and anything below it
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| match path.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        })
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new(["/api", "/favico"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROWSER_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
    const GOOGLEBOT_UA: &str = "Mozilla/5.0 (compatible; Googlebot/2.1)";

    #[test]
    fn test_favicon_assets_always_pass() {
        for ua in [None, Some(""), Some("curl/8.0"), Some(GOOGLEBOT_UA), Some(BROWSER_UA)] {
            assert_eq!(
                evaluate("/favico/og-image.png", ua),
                FilterDecision::Pass(PassReason::PublicAsset)
            );
        }
    }

    #[test]
    fn test_bare_favicon_prefix_is_not_exempt() {
        assert!(evaluate("/favico", Some("")).is_block());
    }

    #[test]
    fn test_social_preview_allowed_on_story_paths() {
        let ua = "Twitterbot/1.0";
        assert_eq!(
            evaluate("/api/story", Some(ua)),
            FilterDecision::Pass(PassReason::SocialPreview)
        );
        assert_eq!(
            evaluate("/api/og-story", Some(ua)),
            FilterDecision::Pass(PassReason::SocialPreview)
        );
    }

    #[test]
    fn test_social_preview_falls_through_elsewhere() {
        assert_eq!(
            evaluate("/api/kindness", Some("Twitterbot/1.0")),
            FilterDecision::Block(BlockReason::KnownBot)
        );
        assert_eq!(
            evaluate("/api/story/extra", Some("Slackbot-LinkExpanding 1.0")),
            FilterDecision::Block(BlockReason::KnownBot)
        );
        // No bot signature and long enough, so it is treated like a browser
        assert_eq!(
            evaluate("/api/kindness", Some("facebookexternalhit/1.1")),
            FilterDecision::Pass(PassReason::Browser)
        );
    }

    #[test]
    fn test_known_bots_blocked() {
        for ua in [
            GOOGLEBOT_UA,
            "curl/8.4.0",
            "python-requests/2.31.0",
            "Go-http-client/1.1",
            "Scrapy/2.11 (+https://scrapy.org)",
            "Mozilla/5.0 (compatible; AhrefsBot/7.0)",
            "GPTBot/1.0",
            "Wget/1.21.4",
        ] {
            assert_eq!(
                evaluate("/api/kindness", Some(ua)),
                FilterDecision::Block(BlockReason::KnownBot),
                "{} should be blocked",
                ua
            );
        }
    }

    #[test]
    fn test_short_or_missing_user_agent_blocked() {
        for ua in [None, Some(""), Some("abcde"), Some("123456789")] {
            assert_eq!(
                evaluate("/api/kindness", ua),
                FilterDecision::Block(BlockReason::MissingOrShortUserAgent)
            );
        }
    }

    #[test]
    fn test_ten_character_user_agent_passes() {
        assert!(evaluate("/api/kindness", Some("Mozilla/50")).is_pass());
    }

    #[test]
    fn test_browser_passes() {
        assert_eq!(
            evaluate("/api/kindness", Some(BROWSER_UA)),
            FilterDecision::Pass(PassReason::Browser)
        );
    }

    #[test]
    fn test_route_matcher_scope() {
        let matcher = RouteMatcher::default();

        assert!(matcher.matches("/api"));
        assert!(matcher.matches("/api/kindness"));
        assert!(matcher.matches("/api/story"));
        assert!(matcher.matches("/favico/favicon.ico"));

        assert!(!matcher.matches("/"));
        assert!(!matcher.matches("/health"));
        assert!(!matcher.matches("/apis"));
        assert!(!matcher.matches("/favicon.ico"));
    }

    #[test]
    fn test_custom_route_matcher() {
        let matcher = RouteMatcher::new(["/internal/"]);
        assert!(matcher.matches("/internal/x"));
        assert!(!matcher.matches("/api/x"));
    }

    #[tokio::test]
    async fn test_forbidden_response_shape() {
        let response = forbidden_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], FORBIDDEN_BODY.as_bytes());
    }
}
