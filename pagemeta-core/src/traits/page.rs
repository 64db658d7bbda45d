//! Page record abstraction and derived SEO properties

use pagemeta_schema::{OpenGraphType, TwitterCardType};

use crate::traits::image::{renditions, SeoImage};
use crate::types::{OrganizationSeo, Site};
use crate::utils::{resolve, urls};

/// SEO-related attributes of a page-like host record.
///
/// Host page types implement the required accessors over their stored
/// fields; the provided methods derive every exposed SEO property from
/// them. Candidate source lists (`pagetitle_sources` and friends) are
/// explicit ordered accessor lists evaluated in sequence — the first
/// present, non-blank value wins.
pub trait SeoPage {
    // ===== Required host accessors =====

    /// Base page title from the host content tree.
    fn title(&self) -> String;

    /// Full/absolute URL of the page.
    fn full_url(&self) -> String;

    /// Site the page belongs to, as resolved by the host framework.
    fn site(&self) -> Site;

    // ===== Stored SEO fields =====

    /// Stored SEO title override, blank when unset.
    fn seo_title(&self) -> String {
        String::new()
    }

    /// Stored search description, blank when unset.
    fn search_description(&self) -> String {
        String::new()
    }

    /// Stored preview image, shown when linking to this page on
    /// social media.
    fn og_image(&self) -> Option<&dyn SeoImage> {
        None
    }

    /// Organization structured-data fields of this page.
    fn organization(&self) -> OrganizationSeo {
        OrganizationSeo::default()
    }

    /// Organization logo image.
    fn organization_logo(&self) -> Option<&dyn SeoImage> {
        None
    }

    /// Photo of the organization's facility. Cropped to 1:1, 4:3 and
    /// 16:9 aspect ratios when assembled into structured data.
    fn organization_image(&self) -> Option<&dyn SeoImage> {
        None
    }

    // ===== Candidate source lists =====

    /// Text candidates, in order of preference, for the SEO title.
    ///
    /// Override to prefer other stored fields.
    fn pagetitle_sources(&self) -> Vec<String> {
        vec![self.seo_title()]
    }

    /// Text candidates, in order of preference, for the SEO
    /// description.
    ///
    /// Override to prefer other stored fields.
    fn description_sources(&self) -> Vec<String> {
        vec![self.search_description()]
    }

    /// Image candidates, in order of preference, for the preferred
    /// Open Graph / SEO image.
    ///
    /// Override to prefer other stored images.
    fn image_sources(&self) -> Vec<Option<&dyn SeoImage>> {
        vec![self.og_image()]
    }

    // ===== Derived properties =====

    /// Gets the site name.
    ///
    /// Override in your page type as necessary.
    fn seo_sitename(&self) -> String {
        self.site().name
    }

    /// Gets the full/absolute/canonical URL preferred for meta tags
    /// and search engines.
    ///
    /// Override in your page type as necessary.
    fn seo_canonical_url(&self) -> String {
        self.full_url()
    }

    /// Gets the full/absolute/canonical URL for the AMP version of
    /// this page.
    fn seo_amp_url(&self) -> String {
        urls::amp_url(&self.seo_canonical_url())
    }

    /// Gets the name of the author of this page.
    ///
    /// Override in your page type as necessary.
    fn seo_author(&self) -> String {
        String::new()
    }

    /// Gets the correct Open Graph type for this page.
    ///
    /// Override in your page type as necessary.
    fn seo_og_type(&self) -> OpenGraphType {
        OpenGraphType::Website
    }

    /// Gets the correct style of Twitter card for this page.
    ///
    /// Override in your page type as necessary.
    fn seo_twitter_card(&self) -> TwitterCardType {
        TwitterCardType::Summary
    }

    /// Gets the correct search engine and Open Graph title of this
    /// page: the first non-blank entry of
    /// [`pagetitle_sources`](Self::pagetitle_sources), falling back to
    /// `"{title} - {sitename}"`.
    fn seo_pagetitle(&self) -> String {
        resolve::first_non_blank(self.pagetitle_sources())
            .unwrap_or_else(|| format!("{} - {}", self.title(), self.seo_sitename()))
    }

    /// Gets the correct search engine and Open Graph description of
    /// this page: the first non-blank entry of
    /// [`description_sources`](Self::description_sources), falling
    /// back to the empty string.
    fn seo_description(&self) -> String {
        resolve::first_non_blank(self.description_sources()).unwrap_or_default()
    }

    /// Gets the absolute URL for the primary Open Graph image of this
    /// page: the first present entry of
    /// [`image_sources`](Self::image_sources), resolved through its
    /// `"original"` rendition against the site's media base URL.
    ///
    /// No image, or a rendition failure, degrades to the empty string.
    fn seo_image_url(&self) -> String {
        let Some(image) = self.image_sources().into_iter().flatten().next() else {
            return String::new();
        };
        match image.rendition_url(renditions::ORIGINAL) {
            Ok(path) => urls::absolutize(&self.site().media_base_url, &path),
            Err(e) => {
                log::warn!("Preview image rendition failed: {e}");
                String::new()
            }
        }
    }
}
