//! Error types for Notion integration.

/// Error from Notion API operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// API returned a structured error (not found, unauthorized, validation, ...).
    #[error("Notion API error {status} ({code}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Notion error code, e.g. `object_not_found`.
        code: String,
        /// Error message from the API.
        message: String,
    },

    /// HTTP response error with a body that is not a Notion error object.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
