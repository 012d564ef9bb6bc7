//! Mock Notion implementation for testing.
//!
//! Provides [`MockNotion`] for unit testing without network access.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::api::NotionApi;
use crate::error::NotionError;
use crate::types::{Block, BlockKind, BlockList, NewBlock, Page, TextBlock};

/// Operation that can be configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    RetrievePage,
    ListChildren,
    AppendChildren,
}

/// One recorded append request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendCall {
    /// Parent block or page ID.
    pub block_id: String,
    /// Texts of the appended blocks, in order.
    pub texts: Vec<String>,
    /// Sibling the blocks were inserted after.
    pub after: Option<String>,
}

/// Mock Notion workspace for testing.
///
/// Stores pages and block children in memory. Appended paragraphs become
/// real children, so a later list call sees them.
///
/// # Example
///
/// ```ignore
/// let notion = MockNotion::new()
///     .with_paragraphs("march", &["2025-03-01", "Went hiking"])
///     .with_failure(MockOperation::RetrievePage, "root");
///
/// assert!(notion.retrieve_page("root").is_err());
/// assert_eq!(notion.list_block_children("march", None)?.results.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MockNotion {
    pages: RwLock<HashMap<String, Page>>,
    children: RwLock<HashMap<String, Vec<Block>>>,
    failures: RwLock<HashSet<(MockOperation, String)>>,
    failing_texts: RwLock<HashSet<String>>,
    list_calls: RwLock<Vec<(String, Option<u32>)>>,
    appends: RwLock<Vec<AppendCall>>,
    next_id: RwLock<usize>,
}

impl MockNotion {
    /// Create an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, retrievable by its ID.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().insert(page.id.clone(), page);
        self
    }

    /// Set the children of a block or page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_blocks(self, parent_id: impl Into<String>, blocks: Vec<Block>) -> Self {
        self.children.write().unwrap().insert(parent_id.into(), blocks);
        self
    }

    /// Set the children of a page to single-run paragraphs.
    #[must_use]
    pub fn with_paragraphs(self, parent_id: impl Into<String>, texts: &[&str]) -> Self {
        let parent_id = parent_id.into();
        let blocks = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Block::new(
                    format!("{parent_id}-{i}"),
                    BlockKind::Paragraph(TextBlock::plain(*text)),
                )
            })
            .collect();
        self.with_blocks(parent_id, blocks)
    }

    /// Make `operation` fail for the given page or block ID.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, operation: MockOperation, id: impl Into<String>) -> Self {
        self.failures.write().unwrap().insert((operation, id.into()));
        self
    }

    /// Make any append containing a block with this text fail.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_append_text(self, text: impl Into<String>) -> Self {
        self.failing_texts.write().unwrap().insert(text.into());
        self
    }

    /// Recorded append calls, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn appends(&self) -> Vec<AppendCall> {
        self.appends.read().unwrap().clone()
    }

    /// Recorded list calls as `(block_id, page_size)`, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn list_calls(&self) -> Vec<(String, Option<u32>)> {
        self.list_calls.read().unwrap().clone()
    }

    /// Current children of a block or page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn blocks(&self, parent_id: &str) -> Vec<Block> {
        self.children
            .read()
            .unwrap()
            .get(parent_id)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self, operation: MockOperation, id: &str) -> Result<(), NotionError> {
        if self
            .failures
            .read()
            .unwrap()
            .contains(&(operation, id.to_owned()))
        {
            return Err(unavailable(id));
        }
        Ok(())
    }

    fn allocate_id(&self) -> String {
        let mut next = self.next_id.write().unwrap();
        *next += 1;
        let id = *next;
        format!("mock-block-{id}")
    }
}

fn unavailable(id: &str) -> NotionError {
    NotionError::Api {
        status: 503,
        code: "service_unavailable".to_owned(),
        message: format!("Mock failure for {id}"),
    }
}

impl NotionApi for MockNotion {
    fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.check(MockOperation::RetrievePage, page_id)?;
        self.pages
            .read()
            .unwrap()
            .get(page_id)
            .cloned()
            .ok_or_else(|| NotionError::Api {
                status: 404,
                code: "object_not_found".to_owned(),
                message: format!("Could not find page with ID: {page_id}."),
            })
    }

    fn list_block_children(
        &self,
        block_id: &str,
        page_size: Option<u32>,
    ) -> Result<BlockList, NotionError> {
        self.list_calls
            .write()
            .unwrap()
            .push((block_id.to_owned(), page_size));
        self.check(MockOperation::ListChildren, block_id)?;

        let mut results = self.blocks(block_id);
        let total = results.len();
        if let Some(size) = page_size {
            results.truncate(size as usize);
        }
        Ok(BlockList {
            has_more: results.len() < total,
            results,
            next_cursor: None,
        })
    }

    fn append_block_children(
        &self,
        block_id: &str,
        children: &[NewBlock],
        after: Option<&str>,
    ) -> Result<BlockList, NotionError> {
        self.appends.write().unwrap().push(AppendCall {
            block_id: block_id.to_owned(),
            texts: children.iter().map(|c| c.text().to_owned()).collect(),
            after: after.map(str::to_owned),
        });
        self.check(MockOperation::AppendChildren, block_id)?;
        {
            let failing = self.failing_texts.read().unwrap();
            if children.iter().any(|c| failing.contains(c.text())) {
                return Err(unavailable(block_id));
            }
        }

        let created: Vec<Block> = children
            .iter()
            .map(|child| {
                Block::new(
                    self.allocate_id(),
                    BlockKind::Paragraph(TextBlock::plain(child.text())),
                )
            })
            .collect();

        let mut all = self.children.write().unwrap();
        let siblings = all.entry(block_id.to_owned()).or_default();
        let position = after
            .and_then(|id| siblings.iter().position(|b| b.id == id))
            .map_or(siblings.len(), |i| i + 1);
        siblings.splice(position..position, created.iter().cloned());

        Ok(BlockList {
            results: created,
            next_cursor: None,
            has_more: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn texts(blocks: &[Block]) -> Vec<String> {
        blocks
            .iter()
            .filter_map(|b| b.first_paragraph_text().map(str::to_owned))
            .collect()
    }

    #[test]
    fn test_append_after_sibling_inserts_in_place() {
        let notion = MockNotion::new().with_paragraphs("p", &["title", "old"]);
        notion
            .append_block_children("p", &[NewBlock::paragraph("new")], Some("p-0"))
            .unwrap();

        assert_eq!(texts(&notion.blocks("p")), vec!["title", "new", "old"]);
    }

    #[test]
    fn test_append_without_sibling_goes_last() {
        let notion = MockNotion::new().with_paragraphs("p", &["a"]);
        let created = notion
            .append_block_children("p", &[NewBlock::paragraph("b")], None)
            .unwrap();

        assert_eq!(created.results.len(), 1);
        assert_eq!(texts(&notion.blocks("p")), vec!["a", "b"]);
    }

    #[test]
    fn test_list_page_size_truncates() {
        let notion = MockNotion::new().with_paragraphs("p", &["a", "b", "c"]);
        let list = notion.list_block_children("p", Some(1)).unwrap();

        assert_eq!(list.results.len(), 1);
        assert!(list.has_more);
        assert_eq!(notion.list_calls(), vec![("p".to_owned(), Some(1))]);
    }

    #[test]
    fn test_configured_failure() {
        let notion = MockNotion::new().with_failure(MockOperation::ListChildren, "p");
        let err = notion.list_block_children("p", None).unwrap_err();
        assert!(matches!(err, NotionError::Api { status: 503, .. }));
    }

    #[test]
    fn test_unknown_page_not_found() {
        let notion = MockNotion::new();
        let err = notion.retrieve_page("missing").unwrap_err();
        assert!(matches!(err, NotionError::Api { status: 404, .. }));
    }
}
