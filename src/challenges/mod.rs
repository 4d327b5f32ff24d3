// Aggregates the anti-bot challenge layers and the environment they are built against.

pub mod arkose;
pub mod device;

use serde::{Deserialize, Serialize};
use url::Url;

/// Snapshot of the ambient browsing environment a challenge document is
/// built for.
///
/// The official client reads these off `window` and `navigator` at render
/// time. Here they are explicit inputs so the builder stays pure and
/// testable without a WebView; the values pass through to the verifier as
/// fingerprint fields, they are never synthesized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeEnvironment {
    /// Page the challenge document redirects back to on completion.
    pub origin: Url,
    /// Navigator language list, most preferred first.
    pub languages: Vec<String>,
    /// Layout viewport size in CSS points.
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl ChallengeEnvironment {
    /// Environment with the default language list and the viewport of the
    /// spoofed handset.
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            languages: vec!["en-US".into(), "en".into()],
            viewport_width: 430,
            viewport_height: 932,
        }
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_matches_the_spoofed_handset() {
        let environment =
            ChallengeEnvironment::new(Url::parse("https://app.local/").unwrap());
        assert_eq!(environment.viewport_width, 430);
        assert_eq!(environment.viewport_height, 932);
        assert_eq!(environment.languages, vec!["en-US", "en"]);
    }
}
