//! Type definition module

mod meta;
mod organization;
mod settings;
mod site;

pub use meta::PageMeta;
pub use organization::{OrganizationSeo, PostalAddress};
pub use settings::SeoSettings;
pub use site::Site;

// Re-export the schema library's public types
pub use pagemeta_schema::{
    ActionType, OpenGraphType, OpenHours, OrganizationType, ReservationType,
    StructuredDataAction, TwitterCardType, VocabularyError, Weekday,
};
