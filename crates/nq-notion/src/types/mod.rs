//! Notion API wire types.
//!
//! Blocks and properties are closed enums with an `Unsupported` arm that
//! keeps the raw type tag. Decoding is lenient: a variant payload that is
//! missing, `null` or malformed becomes its default value instead of failing
//! the whole response.

mod block;
mod new_block;
mod page;
mod property;
mod rich_text;

pub use block::{
    BookmarkBlock, Block, BlockKind, BlockList, CalloutBlock, CodeBlock, FileUrl, Icon,
    ImageBlock, TableBlock, TextBlock, TitleBlock, ToDoBlock,
};
pub use new_block::NewBlock;
pub use page::{ApiErrorBody, Page};
pub use property::{FileRef, Formula, PageRef, Property, PropertyValue, SelectOption};
pub use rich_text::{DateValue, RichText, User, plain_text};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Remove `key` from a tagged object's payload and decode it.
///
/// Missing or `null` payloads yield `T::default()`; malformed payloads are
/// logged and also yield the default.
pub(crate) fn take_payload<T>(payload: &mut Map<String, Value>, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match payload.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("Malformed {} payload: {}", key, err);
            T::default()
        }),
    }
}
