//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::RwLock;

use pagemeta_core::{
    CoreError, CoreResult, OrganizationSeo, SeoImage, SeoPage, SeoSettings, SettingsRepository,
    Site,
};

/// Asserts that a `Result` is `Ok` and unwraps it (fails the test
/// otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Asserts that an `Option` is `Some` and unwraps it (fails the test
/// otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Host-framework image stand-in with deterministic rendition URLs.
pub struct LocalImage {
    slug: String,
}

impl LocalImage {
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
        }
    }
}

impl SeoImage for LocalImage {
    fn rendition_url(&self, spec: &str) -> CoreResult<String> {
        Ok(format!("/media/images/{}.{spec}.jpg", self.slug))
    }
}

/// Host-framework page stand-in backed by plain fields.
pub struct LocalPage {
    pub title: String,
    pub url: String,
    pub site: Site,
    pub seo_title: String,
    pub search_description: String,
    pub og_image: Option<LocalImage>,
    pub organization: OrganizationSeo,
    pub logo: Option<LocalImage>,
    pub photo: Option<LocalImage>,
    pub author: String,
}

impl LocalPage {
    pub fn new(title: &str) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            title: title.to_string(),
            url: format!("https://example.com/{slug}/"),
            site: Site::new("Example Site", "https://example.com"),
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

impl SeoPage for LocalPage {
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

/// In-memory settings store.
pub struct MemorySettingsRepository {
    settings: RwLock<HashMap<String, SeoSettings>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
        }
    }
}

impl SettingsRepository for MemorySettingsRepository {
    fn find_by_site(&self, site_name: &str) -> CoreResult<Option<SeoSettings>> {
        let store = self
            .settings
            .read()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        Ok(store.get(site_name).cloned())
    }

    fn save(&self, site_name: &str, settings: &SeoSettings) -> CoreResult<()> {
        let mut store = self
            .settings
            .write()
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        store.insert(site_name.to_string(), settings.clone());
        Ok(())
    }
}
