//! Notion block types.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::rich_text::{RichText, plain_text};
use super::take_payload;

/// Content block belonging to a page or another block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    /// Block ID.
    pub id: String,
    /// Whether the block has nested children on the server.
    pub has_children: bool,
    /// Type-specific content.
    pub kind: BlockKind,
    /// Nested blocks. `None` until a fetcher sets a placeholder; nested
    /// content is never loaded.
    pub children: Option<Vec<Block>>,
}

impl Block {
    /// Create a block without children.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            has_children: false,
            kind,
            children: None,
        }
    }

    /// Mark the block as having nested children.
    #[must_use]
    pub fn with_children_flag(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// Raw type tag as sent by the API.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// Plain text of the first rich-text run of a paragraph.
    ///
    /// `None` for non-paragraph blocks and for paragraphs without runs.
    #[must_use]
    pub fn first_paragraph_text(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Paragraph(text) => text.rich_text.first().map(|r| r.plain_text.as_str()),
            _ => None,
        }
    }
}

/// Type-specific block content.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Toggle(TextBlock),
    ChildPage(TitleBlock),
    ChildDatabase(TitleBlock),
    Image(ImageBlock),
    Code(CodeBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Bookmark(BookmarkBlock),
    Table(TableBlock),
    Divider,
    /// Any type tag this crate does not model.
    Unsupported(String),
}

impl BlockKind {
    /// Raw type tag as sent by the API.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Heading1(_) => "heading_1",
            Self::Heading2(_) => "heading_2",
            Self::Heading3(_) => "heading_3",
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::NumberedListItem(_) => "numbered_list_item",
            Self::ToDo(_) => "to_do",
            Self::Toggle(_) => "toggle",
            Self::ChildPage(_) => "child_page",
            Self::ChildDatabase(_) => "child_database",
            Self::Image(_) => "image",
            Self::Code(_) => "code",
            Self::Quote(_) => "quote",
            Self::Callout(_) => "callout",
            Self::Bookmark(_) => "bookmark",
            Self::Table(_) => "table",
            Self::Divider => "divider",
            Self::Unsupported(tag) => tag,
        }
    }
}

/// Payload of text-only blocks (paragraph, headings, list items, toggle, quote).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    pub rich_text: Vec<RichText>,
}

impl TextBlock {
    /// Single unlinked run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichText::plain(text)],
        }
    }

    /// Concatenated text of all runs.
    #[must_use]
    pub fn text(&self) -> String {
        plain_text(&self.rich_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToDoBlock {
    pub rich_text: Vec<RichText>,
    pub checked: bool,
}

/// Payload of `child_page` and `child_database`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TitleBlock {
    pub title: String,
}

/// Image payload. Exactly one of `external` or `file` is populated,
/// selected by `source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    /// Source variant: `external` or `file`.
    #[serde(rename = "type")]
    pub source: String,
    pub external: Option<FileUrl>,
    pub file: Option<FileUrl>,
    pub caption: Vec<RichText>,
}

impl ImageBlock {
    /// URL of whichever source variant is declared.
    #[must_use]
    pub fn url(&self) -> &str {
        let source = if self.source == "external" {
            self.external.as_ref()
        } else {
            self.file.as_ref()
        };
        source.map_or("", |f| f.url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileUrl {
    pub url: String,
    /// Expiry of hosted file URLs.
    pub expiry_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    pub rich_text: Vec<RichText>,
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalloutBlock {
    pub rich_text: Vec<RichText>,
    pub icon: Option<Icon>,
}

/// Page or callout icon. Only emoji icons carry text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Icon {
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookmarkBlock {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableBlock {
    pub table_width: u32,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

/// Block as received: common fields plus the remaining keys, one of which
/// is named after `type` and holds the payload.
#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    has_children: bool,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let RawBlock {
            id,
            kind,
            has_children,
            mut payload,
        } = raw;
        let p = &mut payload;

        let kind = match kind.as_str() {
            "paragraph" => BlockKind::Paragraph(take_payload(p, "paragraph")),
            "heading_1" => BlockKind::Heading1(take_payload(p, "heading_1")),
            "heading_2" => BlockKind::Heading2(take_payload(p, "heading_2")),
            "heading_3" => BlockKind::Heading3(take_payload(p, "heading_3")),
            "bulleted_list_item" => {
                BlockKind::BulletedListItem(take_payload(p, "bulleted_list_item"))
            }
            "numbered_list_item" => {
                BlockKind::NumberedListItem(take_payload(p, "numbered_list_item"))
            }
            "to_do" => BlockKind::ToDo(take_payload(p, "to_do")),
            "toggle" => BlockKind::Toggle(take_payload(p, "toggle")),
            "child_page" => BlockKind::ChildPage(take_payload(p, "child_page")),
            "child_database" => BlockKind::ChildDatabase(take_payload(p, "child_database")),
            "image" => BlockKind::Image(take_payload(p, "image")),
            "code" => BlockKind::Code(take_payload(p, "code")),
            "quote" => BlockKind::Quote(take_payload(p, "quote")),
            "callout" => BlockKind::Callout(take_payload(p, "callout")),
            "bookmark" => BlockKind::Bookmark(take_payload(p, "bookmark")),
            "table" => BlockKind::Table(take_payload(p, "table")),
            "divider" => BlockKind::Divider,
            _ => BlockKind::Unsupported(kind),
        };

        Self {
            id,
            has_children,
            kind,
            children: None,
        }
    }
}

/// Response of the list-children call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlockList {
    pub results: Vec<Block>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}
