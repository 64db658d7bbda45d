//! Assembled page meta bundle

use serde::{Deserialize, Serialize};

use pagemeta_schema::{OpenGraphType, TwitterCardType};

/// Named SEO properties of a page plus the effective site settings,
/// ready for template-rendering collaborators.
///
/// The enabled flags gate what a renderer should emit; the resolved
/// values are always carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Resolved search engine / Open Graph title.
    pub pagetitle: String,
    /// Resolved search engine / Open Graph description.
    pub description: String,
    /// Absolute URL of the preferred preview image, blank when none.
    pub image_url: String,
    /// Canonical URL preferred for meta tags and search engines.
    pub canonical_url: String,
    /// URL of the AMP version of the page.
    pub amp_url: String,
    /// Open Graph object type.
    pub og_type: OpenGraphType,
    /// Twitter card style.
    pub twitter_card: TwitterCardType,
    /// Site name.
    pub sitename: String,
    /// Page author name, blank when unknown.
    pub author: String,
    /// Whether Open Graph markup should be rendered.
    pub og_enabled: bool,
    /// Whether Twitter card markup should be rendered.
    pub twitter_enabled: bool,
    /// Normalized Twitter site handle (`"@handle"`), or blank.
    pub twitter_site: String,
    /// Whether organization structured data should be rendered.
    pub struct_enabled: bool,
    /// Whether the AMP alternate link should be rendered.
    pub amp_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let meta = PageMeta {
            pagetitle: "About Us - Example Site".to_string(),
            description: "All about the company.".to_string(),
            image_url: "https://example.com/media/team.jpg".to_string(),
            canonical_url: "https://example.com/about-us/".to_string(),
            amp_url: "https://example.com/about-us/?amp".to_string(),
            og_type: OpenGraphType::Website,
            twitter_card: TwitterCardType::Summary,
            sitename: "Example Site".to_string(),
            author: "Jamie Doe".to_string(),
            og_enabled: true,
            twitter_enabled: true,
            twitter_site: "@example".to_string(),
            struct_enabled: true,
            amp_enabled: false,
        };
        let json_res = serde_json::to_string(&meta);
        assert!(
            json_res.is_ok(),
            "serde_json::to_string failed: {json_res:?}"
        );
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"ogType\":\"website\""));
        assert!(json.contains("\"twitterCard\":\"summary\""));

        let back_res: serde_json::Result<PageMeta> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "serde_json::from_str failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, meta);
    }
}
