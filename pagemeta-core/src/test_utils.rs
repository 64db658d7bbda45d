//! Test helper module
//!
//! Provides mock implementations and convenient test factories.

use std::collections::HashMap;
use std::sync::RwLock;

use pagemeta_schema::OrganizationType;

use crate::error::{CoreError, CoreResult};
use crate::traits::{SeoImage, SeoPage, SettingsRepository};
use crate::types::{OrganizationSeo, SeoSettings, Site};

// ===== MockSettingsRepository =====

pub struct MockSettingsRepository {
    settings: RwLock<HashMap<String, SeoSettings>>,
    /// If Some, save returns this error (for testing failure paths)
    save_error: RwLock<Option<String>>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
            save_error: RwLock::new(None),
        }
    }

    pub fn set_save_error(&self, err: Option<String>) {
        if let Ok(mut slot) = self.save_error.write() {
            *slot = err;
        }
    }

    pub fn stored_count(&self) -> usize {
        self.settings.read().map(|store| store.len()).unwrap_or(0)
    }
}

impl SettingsRepository for MockSettingsRepository {
    fn find_by_site(&self, site_name: &str) -> CoreResult<Option<SeoSettings>> {
        let store = self
            .settings
            .read()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(store.get(site_name).cloned())
    }

    fn save(&self, site_name: &str, settings: &SeoSettings) -> CoreResult<()> {
        if let Ok(slot) = self.save_error.read() {
            if let Some(ref msg) = *slot {
                return Err(CoreError::StorageError(msg.clone()));
            }
        }
        let mut store = self
            .settings
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        store.insert(site_name.to_string(), settings.clone());
        Ok(())
    }
}

// ===== Image stubs =====

/// Image stub yielding deterministic rendition URLs.
pub struct TestImage {
    slug: String,
}

impl TestImage {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
        }
    }
}

impl SeoImage for TestImage {
    fn rendition_url(&self, spec: &str) -> CoreResult<String> {
        Ok(format!("/media/images/{}.{spec}.jpg", self.slug))
    }
}

/// Image stub whose renditions always fail.
pub struct BrokenImage;

impl SeoImage for BrokenImage {
    fn rendition_url(&self, spec: &str) -> CoreResult<String> {
        Err(CoreError::ImageError(format!("no rendition '{spec}'")))
    }
}

// ===== TestPage =====

/// Configurable `SeoPage` implementation backed by plain fields.
pub struct TestPage {
    pub title: String,
    pub url: String,
    pub site: Site,
    pub seo_title: String,
    pub search_description: String,
    pub og_image: Option<TestImage>,
    pub organization: OrganizationSeo,
    pub logo: Option<TestImage>,
    pub photo: Option<TestImage>,
    pub author: String,
}

impl TestPage {
    /// Creates a page under [`test_site()`] whose URL slug is derived
    /// from the title.
    pub fn new(title: &str) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            title: title.to_string(),
            url: format!("https://example.com/{slug}/"),
            site: test_site(),
            seo_title: String::new(),
            search_description: String::new(),
            og_image: None,
            organization: OrganizationSeo::default(),
            logo: None,
            photo: None,
            author: String::new(),
        }
    }
}

impl SeoPage for TestPage {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn full_url(&self) -> String {
        self.url.clone()
    }

    fn site(&self) -> Site {
        self.site.clone()
    }

    fn seo_title(&self) -> String {
        self.seo_title.clone()
    }

    fn search_description(&self) -> String {
        self.search_description.clone()
    }

    fn og_image(&self) -> Option<&dyn SeoImage> {
        self.og_image.as_ref().map(|image| image as &dyn SeoImage)
    }

    fn organization(&self) -> OrganizationSeo {
        self.organization.clone()
    }

    fn organization_logo(&self) -> Option<&dyn SeoImage> {
        self.logo.as_ref().map(|image| image as &dyn SeoImage)
    }

    fn organization_image(&self) -> Option<&dyn SeoImage> {
        self.photo.as_ref().map(|image| image as &dyn SeoImage)
    }

    fn seo_author(&self) -> String {
        self.author.clone()
    }
}

// ===== Factories =====

/// Creates the site every `TestPage` belongs to.
pub fn test_site() -> Site {
    Site::new("Example Site", "https://example.com")
}

/// Creates a populated organization block (restaurant with phone and
/// coordinates, no hours/actions).
pub fn test_organization() -> OrganizationSeo {
    OrganizationSeo {
        org_type: Some(OrganizationType::Restaurant),
        name: "Example Diner".to_string(),
        telephone: "+1-216-555-8000".to_string(),
        geo_lat: Some(41.499_32),
        geo_lng: Some(-81.694_36),
        ..OrganizationSeo::default()
    }
}
