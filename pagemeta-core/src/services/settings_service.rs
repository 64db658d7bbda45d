//! Per-site SEO settings management service

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::SettingsRepository;
use crate::types::SeoSettings;

/// Per-site SEO settings service
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    /// Creates a settings service instance
    #[must_use]
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Gets the settings for a site, or the default set if none are
    /// stored yet.
    ///
    /// Never writes; the per-site singleton is materialized by the
    /// first [`update`](Self::update).
    pub fn get_or_default(&self, site_name: &str) -> CoreResult<SeoSettings> {
        Ok(self
            .repository
            .find_by_site(site_name)?
            .unwrap_or_default())
    }

    /// Validates and persists the settings for a site.
    ///
    /// Returns the stored settings on success.
    pub fn update(&self, site_name: &str, settings: SeoSettings) -> CoreResult<SeoSettings> {
        Self::validate(&settings)?;
        self.repository.save(site_name, &settings)?;
        Ok(settings)
    }

    /// Validates administrator-supplied settings.
    ///
    /// The Twitter handle may be stored with or without the leading
    /// `"@"`; the stripped handle must be at most 15 characters of
    /// `[A-Za-z0-9_]`. A blank handle is allowed.
    fn validate(settings: &SeoSettings) -> CoreResult<()> {
        let handle = settings.twitter_site.trim().trim_start_matches('@');
        if handle.len() > 15 {
            return Err(CoreError::ValidationError(
                "Twitter handle cannot exceed 15 characters".to_string(),
            ));
        }
        if !handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(CoreError::ValidationError(format!(
                "Invalid Twitter handle: '{handle}'. Only letters, digits, and underscores are allowed"
            )));
        }
        Ok(())
    }
}
