//! Block children operations for Notion API.

use serde_json::{Value, json};
use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{BlockList, NewBlock};

impl NotionClient {
    /// List the immediate children of a block or page (first page of results).
    pub(crate) fn get_block_children(
        &self,
        block_id: &str,
        page_size: Option<u32>,
    ) -> Result<BlockList, NotionError> {
        let mut url = self.endpoint(&format!("blocks/{block_id}/children"));
        if let Some(size) = page_size {
            url.push_str(&format!("?page_size={size}"));
        }

        info!("Listing children of block {}", block_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Notion-Version", &self.version)
            .header("Accept", "application/json")
            .call()?;

        let list: BlockList = Self::read_response(response)?;
        info!(
            "Found {} child blocks under {} (has_more: {})",
            list.results.len(),
            block_id,
            list.has_more
        );
        Ok(list)
    }

    /// Append children to a block, optionally after a given sibling.
    pub(crate) fn patch_block_children(
        &self,
        block_id: &str,
        children: &[NewBlock],
        after: Option<&str>,
    ) -> Result<BlockList, NotionError> {
        let url = self.endpoint(&format!("blocks/{block_id}/children"));
        let payload = append_payload(children, after);

        match after {
            Some(sibling) => info!(
                "Appending {} block(s) to {} after {}",
                children.len(),
                block_id,
                sibling
            ),
            None => info!("Appending {} block(s) to {}", children.len(), block_id),
        }

        let payload_bytes = serde_json::to_vec(&payload)?;

        let response = self
            .agent
            .patch(&url)
            .header("Authorization", &self.auth_header)
            .header("Notion-Version", &self.version)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        Self::read_response(response)
    }
}

/// Request body for the append-children call.
fn append_payload(children: &[NewBlock], after: Option<&str>) -> Value {
    let mut payload = json!({
        "children": children.iter().map(NewBlock::to_json).collect::<Vec<_>>(),
    });
    if let Some(sibling) = after {
        payload["after"] = json!(sibling);
    }
    payload
}
