//! Block fetching and the last-non-empty-block scan.

use tracing::error;

use crate::api::NotionApi;
use crate::types::{Block, BlockKind};

/// Fetch the immediate children of `parent_id`.
///
/// Blocks that report nested children get an empty placeholder; nested
/// content is never fetched. Any failure is logged and yields an empty list,
/// so callers cannot tell "no children" from "fetch failed".
pub fn fetch_blocks(api: &dyn NotionApi, parent_id: &str) -> Vec<Block> {
    match api.list_block_children(parent_id, None) {
        Ok(list) => list
            .results
            .into_iter()
            .map(|mut block| {
                if block.has_children {
                    block.children = Some(Vec::new());
                }
                block
            })
            .collect(),
        Err(err) => {
            error!("Error retrieving items for block {}: {}", parent_id, err);
            Vec::new()
        }
    }
}

/// Find the last block that is not an empty paragraph.
///
/// Scans from the end, skipping paragraphs whose first text run is missing
/// or whitespace-only. The first non-paragraph block or non-empty paragraph
/// wins. Returns its index and the block.
#[must_use]
pub fn last_non_empty_block(blocks: &[Block]) -> Option<(usize, &Block)> {
    blocks
        .iter()
        .enumerate()
        .rev()
        .find(|(_, block)| !is_empty_paragraph(block))
}

fn is_empty_paragraph(block: &Block) -> bool {
    match &block.kind {
        BlockKind::Paragraph(p) => p
            .rich_text
            .first()
            .is_none_or(|run| run.plain_text.trim().is_empty()),
        _ => false,
    }
}
