//! Fallback-chain attribute resolution

/// Returns the first candidate that is present and non-blank.
///
/// Candidates are evaluated in order. Empty and whitespace-only values
/// are skipped the same way absent attributes are, so a stored-but-
/// blank override never shadows a later candidate. Returns `None` when
/// every candidate is blank, letting each caller apply its documented
/// default.
#[must_use]
pub fn first_non_blank<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .find(|value| !value.trim().is_empty())
}
