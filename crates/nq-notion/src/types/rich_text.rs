//! Rich text runs and small shared value objects.

use serde::Deserialize;

/// One styled run of text.
///
/// Only the resolved `plain_text` is kept; annotations and link targets are
/// ignored by every consumer in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RichText {
    /// Text with mentions and equations resolved.
    pub plain_text: String,
    /// Link target, if the run is a link.
    pub href: Option<String>,
}

impl RichText {
    /// Create an unlinked run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            href: None,
        }
    }
}

/// Concatenate the plain text of all runs, with no separator.
#[must_use]
pub fn plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| run.plain_text.as_str()).collect()
}

/// Workspace user reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Display name (absent when the integration lacks user read access).
    pub name: Option<String>,
}

impl User {
    /// Display name, or the ID when unnamed.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Date or date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateValue {
    /// Start date or datetime (ISO 8601).
    pub start: String,
    /// End of the range, if any.
    pub end: Option<String>,
    /// IANA time zone, if set.
    pub time_zone: Option<String>,
}
