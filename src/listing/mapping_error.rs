use serde_json::Value;
use thiserror::Error;

/// Raised only when the listing's structure is broken: the input is not an
/// object, a nested node such as `address` is not an object, or `listers`
/// is not an array of objects. Missing, null or oddly typed leaf values
/// are never errors.
#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Unexpected data shape: expected a listing object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}

impl From<serde_json::Error> for MappingError {
    fn from(e: serde_json::Error) -> Self {
        MappingError::UnexpectedShape(e.to_string())
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
