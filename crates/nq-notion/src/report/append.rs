//! Existence-checked appending of labeled entries.

use tracing::{error, info};

use crate::api::NotionApi;
use crate::error::NotionError;
use crate::types::{Block, BlockList, NewBlock};

/// Options for appending blocks.
#[derive(Debug, Clone, Copy)]
pub struct AppendOptions {
    /// Insert after the parent's first child instead of at the end.
    ///
    /// The API only supports "insert after sibling", so new blocks land
    /// below the first child, not at the very top.
    pub add_at_top: bool,
}

impl Default for AppendOptions {
    fn default() -> Self {
        Self { add_at_top: true }
    }
}

/// What [`append_if_absent`] did.
#[derive(Debug)]
pub enum AppendOutcome {
    /// A paragraph starting with the label already exists; nothing was sent.
    AlreadyExists,
    /// Both appends were attempted. `None` marks a failed call.
    Created {
        /// Result of appending the content block.
        content: Option<BlockList>,
        /// Result of appending the label block.
        label: Option<BlockList>,
    },
}

/// Whether any paragraph's first text run equals `label` exactly.
#[must_use]
pub fn label_exists(blocks: &[Block], label: &str) -> bool {
    blocks
        .iter()
        .any(|block| block.first_paragraph_text() == Some(label))
}

/// Append `content` then `label` to `parent_id` unless `label` already exists.
///
/// The content block goes first so that, with `add_at_top`, the label ends
/// up above it. The two calls are not transactional: if the second fails
/// the content block stays without its label.
pub fn append_if_absent(
    api: &dyn NotionApi,
    parent_id: &str,
    label: &str,
    content: &str,
    existing: &[Block],
    options: AppendOptions,
) -> AppendOutcome {
    if label_exists(existing, label) {
        info!("{} block already exists in {}", label, parent_id);
        return AppendOutcome::AlreadyExists;
    }

    info!("Creating {} block in {}", label, parent_id);
    let content = create_block(api, parent_id, content, options.add_at_top);
    let label = create_block(api, parent_id, label, options.add_at_top);

    AppendOutcome::Created { content, label }
}

/// Append a single paragraph. Failures are logged and yield `None`.
pub fn create_block(
    api: &dyn NotionApi,
    parent_id: &str,
    text: &str,
    add_at_top: bool,
) -> Option<BlockList> {
    match try_create_block(api, parent_id, text, add_at_top) {
        Ok(list) => {
            info!("New block created with content: \"{}\"", text);
            Some(list)
        }
        Err(err) => {
            error!("Error creating new block in {}: {}", parent_id, err);
            None
        }
    }
}

fn try_create_block(
    api: &dyn NotionApi,
    parent_id: &str,
    text: &str,
    add_at_top: bool,
) -> Result<BlockList, NotionError> {
    let children = [NewBlock::paragraph(text)];

    let after = if add_at_top {
        api.list_block_children(parent_id, Some(1))?
            .results
            .into_iter()
            .next()
            .map(|first| first.id)
    } else {
        None
    };

    api.append_block_children(parent_id, &children, after.as_deref())
}
