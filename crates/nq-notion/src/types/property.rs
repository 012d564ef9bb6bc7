//! Notion page property types.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::rich_text::{DateValue, RichText, User};
use super::take_payload;

/// Typed, named value attached to a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawProperty")]
pub struct Property {
    /// Property ID (stable across renames).
    pub id: String,
    /// Type-specific value.
    pub value: PropertyValue,
}

impl Property {
    /// Create a property with an empty ID.
    #[must_use]
    pub fn new(value: PropertyValue) -> Self {
        Self {
            id: String::new(),
            value,
        }
    }
}

/// Type-specific property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Date(Option<DateValue>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    Formula(Formula),
    Relation(Vec<PageRef>),
    People(Vec<User>),
    Files(Vec<FileRef>),
    CreatedTime(String),
    CreatedBy(User),
    LastEditedTime(String),
    LastEditedBy(User),
    /// Any type tag this crate does not model.
    Unsupported(String),
}

impl PropertyValue {
    /// Raw type tag as sent by the API.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Title(_) => "title",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::Select(_) => "select",
            Self::MultiSelect(_) => "multi_select",
            Self::Date(_) => "date",
            Self::Checkbox(_) => "checkbox",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::PhoneNumber(_) => "phone_number",
            Self::Formula(_) => "formula",
            Self::Relation(_) => "relation",
            Self::People(_) => "people",
            Self::Files(_) => "files",
            Self::CreatedTime(_) => "created_time",
            Self::CreatedBy(_) => "created_by",
            Self::LastEditedTime(_) => "last_edited_time",
            Self::LastEditedBy(_) => "last_edited_by",
            Self::Unsupported(tag) => tag,
        }
    }
}

/// Select or multi-select option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

/// Related page reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageRef {
    pub id: String,
}

/// File attached to a `files` property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileRef {
    pub name: String,
}

/// Computed formula result, tagged by its declared result type.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    String(Option<String>),
    Number(Option<f64>),
    Boolean(Option<bool>),
    Date(Option<DateValue>),
    /// Result type this crate does not model.
    Other(String),
}

impl Default for Formula {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

#[derive(Deserialize)]
struct RawFormula {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let RawFormula { kind, mut payload } = RawFormula::deserialize(deserializer)?;
        let p = &mut payload;
        Ok(match kind.as_str() {
            "string" => Self::String(take_payload(p, "string")),
            "number" => Self::Number(take_payload(p, "number")),
            "boolean" => Self::Boolean(take_payload(p, "boolean")),
            "date" => Self::Date(take_payload(p, "date")),
            _ => Self::Other(kind),
        })
    }
}

/// Property as received: common fields plus the payload keyed by `type`.
#[derive(Deserialize)]
struct RawProperty {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        let RawProperty {
            id,
            kind,
            mut payload,
        } = raw;
        let p = &mut payload;

        let value = match kind.as_str() {
            "title" => PropertyValue::Title(take_payload(p, "title")),
            "rich_text" => PropertyValue::RichText(take_payload(p, "rich_text")),
            "number" => PropertyValue::Number(take_payload(p, "number")),
            "select" => PropertyValue::Select(take_payload(p, "select")),
            "multi_select" => PropertyValue::MultiSelect(take_payload(p, "multi_select")),
            "date" => PropertyValue::Date(take_payload(p, "date")),
            "checkbox" => PropertyValue::Checkbox(take_payload(p, "checkbox")),
            "url" => PropertyValue::Url(take_payload(p, "url")),
            "email" => PropertyValue::Email(take_payload(p, "email")),
            "phone_number" => PropertyValue::PhoneNumber(take_payload(p, "phone_number")),
            "formula" => PropertyValue::Formula(take_payload(p, "formula")),
            "relation" => PropertyValue::Relation(take_payload(p, "relation")),
            "people" => PropertyValue::People(take_payload(p, "people")),
            "files" => PropertyValue::Files(take_payload(p, "files")),
            "created_time" => PropertyValue::CreatedTime(take_payload(p, "created_time")),
            "created_by" => PropertyValue::CreatedBy(take_payload(p, "created_by")),
            "last_edited_time" => {
                PropertyValue::LastEditedTime(take_payload(p, "last_edited_time"))
            }
            "last_edited_by" => PropertyValue::LastEditedBy(take_payload(p, "last_edited_by")),
            _ => PropertyValue::Unsupported(kind),
        };

        Self { id, value }
    }
}
