use std::str::from_utf8;

use time::OffsetDateTime;

use crate::error::DecodeError;

/// A value as handed to, or received from, a database driver's parameter binding.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    Bool(bool),
    Time(OffsetDateTime),
}

impl Value {
    pub fn int64(&self) -> std::result::Result<i64, DecodeError> {
        match self {
            Value::Integer(v) => Ok(*v),
            _ => Err(DecodeError::Conversion("not an integer".into())),
        }
    }

    /// The value as a string. Blobs must be valid UTF-8.
    pub fn text(&self) -> std::result::Result<&str, DecodeError> {
        match self {
            Value::Text(v) => Ok(v.as_str()),
            Value::Blob(v) => from_utf8(v).map_err(|e| DecodeError::Conversion(e.to_string())),
            _ => Err(DecodeError::Conversion("not text".into())),
        }
    }

    /// The name of the shape this value carries, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::Bool(_) => "bool",
            Value::Time(_) => "time",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(v: OffsetDateTime) -> Self {
        Value::Time(v)
    }
}
