//! JSON encoding and decoding for [`Nullable`].
//!
//! `null` maps to the null state and integers to the valid state. Numeric strings are accepted too, and for
//! unsigned targets an empty string is read as `null`. Decoding always marks the instance set, so
//!
//! ```
//! # use nullscalar::Nullable;
//! #[derive(serde::Deserialize)]
//! struct Patch {
//!     #[serde(default)]
//!     limit: Nullable<u16>,
//! }
//!
//! let absent: Patch = serde_json::from_str("{}").unwrap();
//! let cleared: Patch = serde_json::from_str(r#"{"limit": null}"#).unwrap();
//! assert!(!absent.limit.is_set());
//! assert!(cleared.limit.is_set() && cleared.limit.is_null());
//! ```
//!
//! The unsigned 32- and 64-bit types read a JSON `0` as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use serde_json::{Number, Value as JsonValue};
use tracing::debug;

use crate::{Nullable, error::DecodeError, scalar::Scalar};

const NULL_BYTES: &[u8] = b"null";

impl<T: Scalar> Nullable<T> {
    /// Decode a raw JSON token into this instance.
    ///
    /// On error the instance is left null.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        self.set = true;
        match serde_json::from_slice::<JsonValue>(data) {
            Ok(token) => self.apply_json(&token),
            Err(e) => {
                self.clear();
                debug!(target: "nullscalar", kind = %T::KIND, error = %e, "malformed JSON");
                Err(DecodeError::Parse {
                    input: String::from_utf8_lossy(data).into_owned(),
                    kind: T::KIND,
                })
            }
        }
    }

    /// `null`, or the decimal value.
    pub fn marshal_json(&self) -> Vec<u8> {
        match self.as_ref() {
            Some(v) => v.to_string().into_bytes(),
            None => NULL_BYTES.to_vec(),
        }
    }

    pub(crate) fn apply_json(&mut self, token: &JsonValue) -> Result<(), DecodeError> {
        self.set = true;
        let parsed = match token {
            JsonValue::Null => {
                self.clear();
                return Ok(());
            }
            JsonValue::String(s) if s.is_empty() && !T::KIND.is_signed() => {
                self.clear();
                return Ok(());
            }
            JsonValue::Number(n) => number::<T>(n),
            JsonValue::String(s) => T::parse(s),
            JsonValue::Bool(_) => Err(mismatch::<T>("bool")),
            JsonValue::Array(_) => Err(mismatch::<T>("array")),
            JsonValue::Object(_) => Err(mismatch::<T>("object")),
        };
        match parsed {
            Ok(v) if T::ZERO_IS_NULL && v.is_zero() => self.clear(),
            Ok(v) => {
                self.value = v;
                self.valid = true;
            }
            Err(e) => {
                self.clear();
                debug!(target: "nullscalar", kind = %T::KIND, error = %e, "rejected JSON token");
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Parse a JSON number through its literal text.
///
/// serde_json keeps the literal verbatim (`arbitrary_precision`), so an integer of any size reaches the range check
/// unrounded and fractional or exponent forms fail as syntax errors.
fn number<T: Scalar>(n: &Number) -> Result<T, DecodeError> {
    T::parse(&n.to_string())
}

fn mismatch<T: Scalar>(found: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        found,
        target: T::KIND,
    }
}

impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_ref() {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

// Decoding buffers the token as a `serde_json::Value`, so the input format must be self-describing.
impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = JsonValue::deserialize(deserializer)?;
        let mut n = Self::default();
        n.apply_json(&token).map_err(D::Error::custom)?;
        Ok(n)
    }
}
