//! # pagemeta-schema
//!
//! Closed schema.org vocabularies and structured-data value blocks for
//! SEO page metadata.
//!
//! ## Vocabularies
//!
//! | Vocabulary | Used for |
//! |------------|----------|
//! | [`OrganizationType`] | Organization structured data (`@type`) |
//! | [`ActionType`] | `potentialAction` blocks |
//! | [`ReservationType`] | Action result types |
//! | [`Weekday`] | Open-hours entries |
//! | [`OpenGraphType`] | `og:type` meta tags |
//! | [`TwitterCardType`] | `twitter:card` meta tags |
//!
//! Every vocabulary is a closed tagged-variant set serialized under
//! its schema.org (or protocol) spelling, with `FromStr` returning a
//! structured [`VocabularyError`] for strings outside the set.
//!
//! ## Value blocks
//!
//! [`OpenHours`] and [`StructuredDataAction`] are the repeating value
//! blocks stored with a page's organization markup. Both render into
//! the JSON-LD value tree:
//!
//! ```rust
//! use pagemeta_schema::{ActionType, StructuredDataAction};
//!
//! let action = StructuredDataAction::new(
//!     ActionType::ReserveAction,
//!     "https://example.com/book",
//! );
//! let value = action.to_schema_value();
//! assert_eq!(value["@type"], "ReserveAction");
//! assert_eq!(value["target"]["@type"], "EntryPoint");
//! ```
//!
//! Free-form JSON fragments (the `extra_json` escape hatch) merge via
//! [`utils::extra_json::merge_into`]: keys merge last and win on
//! collision, malformed fragments are logged at `warn` and skipped.

mod blocks;
mod error;
mod types;

pub mod utils;

// Re-export error type
pub use error::VocabularyError;

// Re-export value blocks
pub use blocks::{OpenHours, StructuredDataAction};

// Re-export vocabularies and wire constants
pub use types::{
    ACTION_PLATFORMS, ActionType, OpenGraphType, OrganizationType, ReservationType,
    SCHEMA_CONTEXT, TwitterCardType, Weekday,
};
