//! Notion REST API client.
//!
//! Provides a sync HTTP client for the Notion public API with bearer token
//! authentication.

mod blocks;
mod pages;

use std::time::Duration;

use nq_config::NotionConfig;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::api::NotionApi;
use crate::error::NotionError;
use crate::types::{ApiErrorBody, BlockList, NewBlock, Page};

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
    version: String,
}

impl NotionClient {
    /// Create client.
    ///
    /// # Arguments
    /// * `base_url` - API base URL, e.g. `https://api.notion.com/v1`
    /// * `api_key` - Integration token
    /// * `version` - `Notion-Version` header value
    /// * `timeout` - Global per-request timeout
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, version: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Bearer {api_key}"),
            version: version.to_owned(),
        }
    }

    /// Create client from config values.
    #[must_use]
    pub fn from_config(config: &NotionConfig, api_key: &str) -> Self {
        Self::new(
            &config.base_url,
            api_key,
            &config.version,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Build an endpoint URL from a path relative to the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Decode a JSON response, turning 4xx/5xx into [`NotionError`].
    fn read_response<T: DeserializeOwned>(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<T, NotionError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(error_from_body(status, error_body));
        }

        Ok(body_reader.read_json()?)
    }
}

/// Map an error response body to the most specific error variant.
fn error_from_body(status: u16, body: String) -> NotionError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(api) => NotionError::Api {
            status,
            code: api.code,
            message: api.message,
        },
        Err(_) => NotionError::HttpResponse { status, body },
    }
}

impl NotionApi for NotionClient {
    fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.get_page(page_id)
    }

    fn list_block_children(
        &self,
        block_id: &str,
        page_size: Option<u32>,
    ) -> Result<BlockList, NotionError> {
        self.get_block_children(block_id, page_size)
    }

    fn append_block_children(
        &self,
        block_id: &str,
        children: &[NewBlock],
        after: Option<&str>,
    ) -> Result<BlockList, NotionError> {
        self.patch_block_children(block_id, children, after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> NotionClient {
        NotionClient::new(base_url, "secret", "2022-06-28", Duration::from_secs(1))
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client("https://api.notion.com/v1/");
        assert_eq!(
            client.endpoint("/pages/abc"),
            "https://api.notion.com/v1/pages/abc"
        );
    }

    #[test]
    fn test_from_config_uses_bearer_token() {
        let config = NotionConfig::default();
        let client = NotionClient::from_config(&config, "secret_xyz");
        assert_eq!(client.auth_header, "Bearer secret_xyz");
        assert_eq!(client.version, "2022-06-28");
        assert_eq!(client.base_url, "https://api.notion.com/v1");
    }

    #[test]
    fn test_error_from_body_notion_error_object() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find block."}"#;
        let err = error_from_body(404, body.to_owned());
        assert!(
            matches!(&err, NotionError::Api { status: 404, code, .. } if code == "object_not_found"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_error_from_body_plain_text() {
        let err = error_from_body(502, "Bad Gateway".to_owned());
        assert!(matches!(err, NotionError::HttpResponse { status: 502, .. }));
    }
}
