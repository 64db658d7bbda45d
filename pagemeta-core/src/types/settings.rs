//! Site-wide SEO settings

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Toggle set for search engine optimization features and meta tags.
///
/// One instance per site; the default set applies until an
/// administrator first saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
    /// Show an optimized preview when linking to this site on social
    /// media. See <https://ogp.me/>
    #[serde(default = "default_true")]
    pub og_meta: bool,
    /// Show content as a card when linking to this site on Twitter.
    #[serde(default = "default_true")]
    pub twitter_meta: bool,
    /// The @username of the website owner's Twitter handle.
    #[serde(default)]
    pub twitter_site: String,
    /// Optimize information about the organization for search
    /// engines. See <https://schema.org/>
    #[serde(default = "default_true")]
    pub struct_meta: bool,
    /// Generate an alternate AMP version of article pages that is
    /// preferred by search engines. See <https://amp.dev/>
    #[serde(default = "default_true")]
    pub amp_pages: bool,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            og_meta: true,
            twitter_meta: true,
            twitter_site: String::new(),
            struct_meta: true,
            amp_pages: true,
        }
    }
}

impl SeoSettings {
    /// The Twitter site handle, prepended with `"@"`.
    ///
    /// `"@handle"` and `"handle"` both normalize to `"@handle"`; a
    /// blank handle stays blank.
    #[must_use]
    pub fn at_twitter_site(&self) -> String {
        let handle = self.twitter_site.trim().trim_start_matches('@');
        if handle.is_empty() {
            String::new()
        } else {
            format!("@{handle}")
        }
    }
}
