//! Page meta bundle assembly

use crate::traits::SeoPage;
use crate::types::{PageMeta, SeoSettings};

/// Page meta bundle service (stateless)
pub struct MetaService;

impl MetaService {
    /// Assembles the full named-property bundle for `page` under the
    /// site's effective `settings` — the single call a template
    /// renderer needs.
    ///
    /// The enabled flags only gate what a renderer should emit; the
    /// resolved values are always carried.
    #[must_use]
    pub fn page_meta(page: &dyn SeoPage, settings: &SeoSettings) -> PageMeta {
        PageMeta {
            pagetitle: page.seo_pagetitle(),
            description: page.seo_description(),
            image_url: page.seo_image_url(),
            canonical_url: page.seo_canonical_url(),
            amp_url: page.seo_amp_url(),
            og_type: page.seo_og_type(),
            twitter_card: page.seo_twitter_card(),
            sitename: page.seo_sitename(),
            author: page.seo_author(),
            og_enabled: settings.og_meta,
            twitter_enabled: settings.twitter_meta,
            twitter_site: settings.at_twitter_site(),
            struct_enabled: settings.struct_meta,
            amp_enabled: settings.amp_pages,
        }
    }
}
