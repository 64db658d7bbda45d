//! Site resolution types

use serde::{Deserialize, Serialize};

/// Site a page belongs to, as resolved by the host framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Human-readable site name.
    pub name: String,
    /// Absolute root URL of the site (e.g. `"https://example.com"`).
    pub root_url: String,
    /// Absolute base URL media paths are resolved against. Usually the
    /// root URL, but may point at a CDN.
    pub media_base_url: String,
}

impl Site {
    /// Creates a site whose media is served from its root URL.
    #[must_use]
    pub fn new(name: impl Into<String>, root_url: impl Into<String>) -> Self {
        let root_url = root_url.into();
        Self {
            name: name.into(),
            media_base_url: root_url.clone(),
            root_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_media_base_to_root() {
        let site = Site::new("Example", "https://example.com");
        assert_eq!(site.media_base_url, "https://example.com");
    }

    #[test]
    fn serde_roundtrip() {
        let site = Site {
            name: "Example".to_string(),
            root_url: "https://example.com".to_string(),
            media_base_url: "https://cdn.example.com".to_string(),
        };
        let json_res = serde_json::to_string(&site);
        assert!(
            json_res.is_ok(),
            "serde_json::to_string failed: {json_res:?}"
        );
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"mediaBaseUrl\""));

        let back_res: serde_json::Result<Site> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "serde_json::from_str failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, site);
    }
}
