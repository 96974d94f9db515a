//! Coercion of arbitrary driver values into integer scalars.
//!
//! [`Nullable::scan`](crate::Nullable::scan) only depends on the [`Convert`] contract, so callers with their own
//! rules for what a column may hold can plug them in with
//! [`Nullable::scan_with`](crate::Nullable::scan_with).

use crate::{Value, error::DecodeError, scalar::Kind};

/// Turns a non-null driver value into an integer within the range of `kind`.
pub trait Convert {
    fn coerce(&self, raw: &Value, kind: Kind) -> Result<i128, DecodeError>;
}

impl<C: Convert + ?Sized> Convert for &C {
    fn coerce(&self, raw: &Value, kind: Kind) -> Result<i128, DecodeError> {
        (**self).coerce(raw, kind)
    }
}

/// The default converter.
///
/// Integers are range-checked, text and UTF-8 blobs are parsed as base-10 literals, and doubles are accepted only
/// when they hold an integral value. Booleans, timestamps and nulls are rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestEffort;

impl Convert for BestEffort {
    fn coerce(&self, raw: &Value, kind: Kind) -> Result<i128, DecodeError> {
        match raw {
            Value::Integer(v) => in_range(i128::from(*v), kind),
            Value::Text(_) | Value::Blob(_) => {
                let text = raw.text()?;
                let v = text.parse::<i128>().map_err(|e| {
                    DecodeError::Conversion(format!(
                        "converting driver {} {text:?} to {kind}: {e}",
                        raw.kind_name()
                    ))
                })?;
                in_range(v, kind)
            }
            Value::Double(f) if f.is_finite() && f.fract() == 0.0 => {
                // Saturates outside i128, which `in_range` then rejects.
                in_range(*f as i128, kind).map_err(|_| DecodeError::Overflow {
                    value: f.to_string(),
                    kind,
                })
            }
            Value::Double(f) => Err(DecodeError::Conversion(format!(
                "converting driver double {f} to {kind}: not an integer"
            ))),
            Value::Null | Value::Bool(_) | Value::Time(_) => Err(DecodeError::Conversion(format!(
                "unsupported driver {} value for {kind}",
                raw.kind_name()
            ))),
        }
    }
}

fn in_range(v: i128, kind: Kind) -> Result<i128, DecodeError> {
    if kind.contains(v) {
        Ok(v)
    } else {
        Err(DecodeError::Overflow {
            value: v.to_string(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(raw: impl Into<Value>, kind: Kind) -> Result<i128, DecodeError> {
        BestEffort.coerce(&raw.into(), kind)
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(coerce(127i64, Kind::I8), Ok(127));
        assert_eq!(
            coerce(128i64, Kind::I8),
            Err(DecodeError::Overflow {
                value: "128".into(),
                kind: Kind::I8
            })
        );
        assert!(coerce(-1i64, Kind::U32).is_err());
        assert_eq!(coerce(i64::MAX, Kind::U64), Ok(i64::MAX as i128));
    }

    #[test]
    fn text_and_blobs_are_parsed() {
        assert_eq!(coerce("18446744073709551615", Kind::U64), Ok(u64::MAX as i128));
        assert_eq!(coerce(b"-12".to_vec(), Kind::I16), Ok(-12));
        assert!(matches!(
            coerce("twelve", Kind::I16),
            Err(DecodeError::Conversion(_))
        ));
        assert!(matches!(
            coerce("70000", Kind::U16),
            Err(DecodeError::Overflow { .. })
        ));
    }

    #[test]
    fn doubles_must_be_integral() {
        assert_eq!(coerce(3.0, Kind::I32), Ok(3));
        assert!(matches!(
            coerce(3.5, Kind::I32),
            Err(DecodeError::Conversion(_))
        ));
        assert!(matches!(
            coerce(f64::NAN, Kind::I32),
            Err(DecodeError::Conversion(_))
        ));
        assert_eq!(
            coerce(1e30, Kind::I64),
            Err(DecodeError::Overflow {
                value: 1e30.to_string(),
                kind: Kind::I64
            })
        );
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(matches!(
            coerce(true, Kind::I8),
            Err(DecodeError::Conversion(_))
        ));
        assert!(matches!(
            BestEffort.coerce(&Value::Null, Kind::I8),
            Err(DecodeError::Conversion(_))
        ));
    }
}
