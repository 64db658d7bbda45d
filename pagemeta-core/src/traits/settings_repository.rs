//! Settings persistence abstract trait

use crate::error::CoreResult;
use crate::types::SeoSettings;

/// Per-site SEO settings repository.
///
/// Host implementations back this with whatever the framework's
/// settings storage is (database row, key-value store, config file).
/// Sites are keyed by the host-supplied site name.
pub trait SettingsRepository: Send + Sync {
    /// Gets the stored settings for a site, if any.
    ///
    /// # Arguments
    /// * `site_name` - Host site identifier
    fn find_by_site(&self, site_name: &str) -> CoreResult<Option<SeoSettings>>;

    /// Saves the settings for a site (insert or update).
    ///
    /// # Arguments
    /// * `site_name` - Host site identifier
    /// * `settings` - Settings data
    fn save(&self, site_name: &str, settings: &SeoSettings) -> CoreResult<()>;
}
