//! Block rendering.

use crate::types::{Block, BlockKind, plain_text};

/// Line printed after a block that has nested children.
pub const HAS_CHILDREN_LINE: &str = "(Has child blocks)";

/// Render a block as the lines to print.
///
/// Nested children are only announced, never rendered.
#[must_use]
pub fn render_block(block: &Block) -> Vec<String> {
    let mut lines = describe(&block.kind);
    if block.has_children {
        lines.push(HAS_CHILDREN_LINE.to_owned());
    }
    lines
}

fn describe(kind: &BlockKind) -> Vec<String> {
    let line = match kind {
        BlockKind::Paragraph(p) => {
            let text = p.text();
            if text.is_empty() {
                "Content: (Empty paragraph)".to_owned()
            } else {
                format!("Content: {text}")
            }
        }
        BlockKind::Heading1(h) => format!("Heading 1: {}", h.text()),
        BlockKind::Heading2(h) => format!("Heading 2: {}", h.text()),
        BlockKind::Heading3(h) => format!("Heading 3: {}", h.text()),
        BlockKind::BulletedListItem(item) | BlockKind::NumberedListItem(item) => {
            format!("• {}", item.text())
        }
        BlockKind::ToDo(todo) => {
            let mark = if todo.checked { '✓' } else { '☐' };
            format!("{mark} {}", plain_text(&todo.rich_text))
        }
        BlockKind::Toggle(t) => format!("Toggle: {}", t.text()),
        BlockKind::ChildPage(page) => format!("Child page: {}", page.title),
        BlockKind::ChildDatabase(db) => format!("Child database: {}", db.title),
        BlockKind::Image(image) => format!("Image: {}", image.url()),
        BlockKind::Code(code) => {
            return vec![
                format!("Code({}):", code.language),
                plain_text(&code.rich_text),
            ];
        }
        BlockKind::Quote(q) => format!("Quote: {}", q.text()),
        BlockKind::Callout(callout) => {
            let emoji = callout
                .icon
                .as_ref()
                .and_then(|icon| icon.emoji.as_deref())
                .unwrap_or_default();
            format!("{emoji} Callout: {}", plain_text(&callout.rich_text))
        }
        BlockKind::Bookmark(bookmark) => format!("Bookmark: {}", bookmark.url),
        BlockKind::Table(table) => format!(
            "Table: {} columns x {}",
            table.table_width,
            if table.has_column_header {
                "with header"
            } else {
                "without header"
            }
        ),
        BlockKind::Divider => "Divider ---".to_owned(),
        BlockKind::Unsupported(tag) => format!("Unsupported block type: {tag}"),
    };
    vec![line]
}
