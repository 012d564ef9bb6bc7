//! Blocks built locally for append requests.

use serde_json::{Value, json};

/// Write-only block sent with an append request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewBlock {
    /// Paragraph holding a single unstyled text run.
    Paragraph(String),
}

impl NewBlock {
    /// Paragraph with the given text.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    /// Text content of the block.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Paragraph(text) => text,
        }
    }

    /// Request representation.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Paragraph(text) => json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{"type": "text", "text": {"content": text}}]
                }
            }),
        }
    }
}
