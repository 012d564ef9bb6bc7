//! Page operations for Notion API.

use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::Page;

impl NotionClient {
    /// Retrieve page metadata and properties.
    pub(crate) fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = self.endpoint(&format!("pages/{page_id}"));

        info!("Getting page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Notion-Version", &self.version)
            .header("Accept", "application/json")
            .call()?;

        let page: Page = Self::read_response(response)?;
        info!(
            "Page {} has {} properties",
            page.id,
            page.properties.len()
        );
        Ok(page)
    }
}
