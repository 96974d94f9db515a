//! Types for working with errors produced by nullscalar.

use crate::scalar::Kind;

/// A specialized `Result` type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Ways decoding a JSON token, a text literal or a driver value can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The literal is a well-formed integer that does not fit the target.
    #[error("{value} overflows {kind} (range {min}..={max})", min = .kind.min(), max = .kind.max())]
    Overflow { value: String, kind: Kind },

    /// The literal is not a base-10 integer.
    #[error("invalid {kind} literal: {input:?}")]
    Parse { input: String, kind: Kind },

    /// A JSON token of a non-scalar shape was given for an integer target.
    #[error("cannot decode JSON {found} into {target}")]
    TypeMismatch { found: &'static str, target: Kind },

    /// Reported by a driver value converter.
    #[error("decoding conversion error: {0}")]
    Conversion(String),
}

impl From<String> for DecodeError {
    fn from(err: String) -> Self {
        DecodeError::Conversion(err)
    }
}

/// Ways encoding a value for the database can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("encoding conversion error: {0}")]
    Conversion(String),
}
