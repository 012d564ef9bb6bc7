//! Notion page types.

use indexmap::IndexMap;
use serde::Deserialize;

use super::property::Property;

/// Notion page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Public web URL.
    #[serde(default)]
    pub url: String,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_time: String,
    /// Last edit timestamp (ISO 8601).
    #[serde(default)]
    pub last_edited_time: String,
    /// Whether the page is archived.
    #[serde(default)]
    pub archived: bool,
    /// Properties in the order the API returned them.
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status echoed by the API.
    pub status: u16,
    /// Machine-readable code (e.g. `object_not_found`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
