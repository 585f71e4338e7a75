//! Frontend Models
//!
//! Data structures for the editable field rows.

use serde::{Deserialize, Serialize};

/// Kind of value a field row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Date,
    Integer,
    Decimal,
    Image,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Date,
        FieldType::Integer,
        FieldType::Decimal,
        FieldType::Image,
    ];

    /// Value used in the `<select>` option
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Integer => "integer",
            FieldType::Decimal => "decimal",
            FieldType::Image => "image",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Date => "Date",
            FieldType::Integer => "Number (Integer)",
            FieldType::Decimal => "Number (Decimal)",
            FieldType::Image => "Image",
        }
    }

    /// Parse a `<select>` value; the empty placeholder maps to `None`
    pub fn from_value(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Stable handle of a row for the lifetime of the page.
///
/// Not an ordering key: display order lives in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u32);

/// One editable field row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// 1-based display position, rewritten on every structural change
    pub serial: u32,
    pub name: String,
    pub field_type: Option<FieldType>,
}

impl Row {
    /// Fresh row with placeholder serial `0` and empty inputs
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            serial: 0,
            name: String::new(),
            field_type: None,
        }
    }
}
