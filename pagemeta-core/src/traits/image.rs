//! Image-asset abstraction

use crate::error::CoreResult;

/// Rendition spec strings understood by host image backends.
pub mod renditions {
    /// The unmodified upload.
    pub const ORIGINAL: &str = "original";
    /// Square (1:1) crop used for organization photos.
    pub const SQUARE: &str = "fill-10000x10000";
    /// 4:3 crop used for organization photos.
    pub const FOUR_BY_THREE: &str = "fill-4000x3000";
    /// 16:9 crop used for organization photos.
    pub const SIXTEEN_BY_NINE: &str = "fill-16000x9000";
}

/// Host image asset that can produce rendition URLs.
///
/// Rendition generation itself is owned by the host framework; this
/// trait only yields the URL of an already addressable rendition. The
/// returned URL may be site-relative; callers resolve it against the
/// site's media base URL.
pub trait SeoImage {
    /// Returns the URL of the rendition identified by `spec`
    /// (e.g. [`renditions::ORIGINAL`]).
    fn rendition_url(&self, spec: &str) -> CoreResult<String>;
}
