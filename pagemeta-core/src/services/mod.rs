//! Business logic service layer

mod meta_service;
mod settings_service;
mod structured_data_service;

pub use meta_service::MetaService;
pub use settings_service::SettingsService;
pub use structured_data_service::StructuredDataService;
