//! The remote operations nq depends on.
//!
//! [`NotionClient`](crate::NotionClient) implements this over HTTP;
//! `MockNotion` implements it in memory for tests.

use crate::error::NotionError;
use crate::types::{BlockList, NewBlock, Page};

/// Page retrieval and block-children list/append.
pub trait NotionApi {
    /// Retrieve a page's metadata and properties.
    fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError>;

    /// List the immediate children of a block or page.
    ///
    /// Only the first page of results is returned; `page_size` caps it.
    fn list_block_children(
        &self,
        block_id: &str,
        page_size: Option<u32>,
    ) -> Result<BlockList, NotionError>;

    /// Append children to a block. With `after`, the new blocks are inserted
    /// directly after that sibling instead of at the end.
    fn append_block_children(
        &self,
        block_id: &str,
        children: &[NewBlock],
        after: Option<&str>,
    ) -> Result<BlockList, NotionError>;
}
