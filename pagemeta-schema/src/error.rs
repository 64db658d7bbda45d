use serde::Serialize;

/// Parse error for the closed schema.org vocabularies.
///
/// Returned by the `FromStr` implementations when a stored string does
/// not belong to the fixed vocabulary. Always represents bad stored or
/// user-supplied input, never an internal failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "value")]
pub enum VocabularyError {
    /// Not a known schema.org organization type.
    UnknownOrganizationType(String),
    /// Not a known schema.org action type.
    UnknownActionType(String),
    /// Not a known schema.org reservation type.
    UnknownReservationType(String),
    /// Not a full English weekday name.
    UnknownWeekday(String),
    /// Not a known Open Graph object type.
    UnknownOpenGraphType(String),
    /// Not a known Twitter card style.
    UnknownTwitterCardType(String),
}

impl std::fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOrganizationType(s) => write!(f, "Unknown organization type: {s}"),
            Self::UnknownActionType(s) => write!(f, "Unknown action type: {s}"),
            Self::UnknownReservationType(s) => write!(f, "Unknown reservation type: {s}"),
            Self::UnknownWeekday(s) => write!(f, "Unknown weekday: {s}"),
            Self::UnknownOpenGraphType(s) => write!(f, "Unknown Open Graph type: {s}"),
            Self::UnknownTwitterCardType(s) => write!(f, "Unknown Twitter card type: {s}"),
        }
    }
}

impl std::error::Error for VocabularyError {}
