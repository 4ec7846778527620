//! Shape classification for content values.

use serde_json::{Map, Value};

/// The five shapes the extractor distinguishes while walking a document.
#[derive(Debug, Clone, Copy)]
pub enum ContentNode<'a> {
    Null,
    String(&'a str),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    /// Numbers and booleans; they never carry references.
    Other,
}

impl<'a> From<&'a Value> for ContentNode<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Mapping(map),
            Value::Bool(_) | Value::Number(_) => Self::Other,
        }
    }
}
