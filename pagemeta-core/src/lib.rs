//! Pagemeta Core Library
//!
//! Provides SEO metadata derivation for CMS pages, including:
//! - Open Graph / Twitter card property resolution (fallback chains)
//! - schema.org Organization structured data assembly (JSON-LD)
//! - Per-site SEO settings
//!
//! This library is platform-independent, abstracting the host CMS
//! through traits: pages implement [`SeoPage`], image assets implement
//! [`SeoImage`], and settings storage implements
//! [`SettingsRepository`]. Everything else — persistence, admin UI,
//! rendition generation, template rendering — stays with the host.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{MetaService, SettingsService, StructuredDataService};
pub use traits::{renditions, SeoImage, SeoPage, SettingsRepository};
pub use types::{OrganizationSeo, PageMeta, PostalAddress, SeoSettings, Site};
