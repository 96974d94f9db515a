//! The bridge between [`Nullable`] and database driver values.
//!
//! Drivers bind parameters and return columns as [`Value`]s, which carry integers only as signed 64-bit numbers.
//! Unsigned 64-bit values that do not fit are written as decimal text, and a negative integer scanned into an
//! unsigned 64-bit target is read back as its two's-complement bit pattern, so every `u64` survives a round trip.

use tracing::{debug, trace};

use crate::{
    Nullable, Value,
    convert::{BestEffort, Convert},
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError},
    scalar::Scalar,
};

impl<T: Scalar> Nullable<T> {
    /// Scan a driver value into this instance using the [`BestEffort`] converter.
    pub fn scan(&mut self, raw: &Value) -> Result<(), DecodeError> {
        self.scan_with(raw, &BestEffort)
    }

    /// Scan a driver value into this instance using `converter` for non-null values.
    ///
    /// `NULL` resets the instance to null. On error the instance is left null and the converter's error is
    /// returned unchanged.
    pub fn scan_with<C>(&mut self, raw: &Value, converter: &C) -> Result<(), DecodeError>
    where
        C: Convert + ?Sized,
    {
        self.set = true;
        if raw.is_null() {
            self.clear();
            return Ok(());
        }
        match coerce::<T, C>(raw, converter) {
            Ok(v) => {
                trace!(target: "nullscalar", kind = %T::KIND, source = raw.kind_name(), "scanned");
                self.value = v;
                self.valid = true;
                Ok(())
            }
            Err(e) => {
                self.clear();
                debug!(target: "nullscalar", kind = %T::KIND, source = raw.kind_name(), error = %e, "scan failed");
                Err(e)
            }
        }
    }

    /// The driver value for this instance: `NULL`, an integer, or decimal text for unsigned values of 2^63 and up.
    pub fn to_value(&self) -> Value {
        match self.as_ref() {
            Some(v) => v.to_driver(),
            None => Value::Null,
        }
    }
}

/// Coerce a non-null driver value into `T`.
fn coerce<T, C>(raw: &Value, converter: &C) -> Result<T, DecodeError>
where
    T: Scalar,
    C: Convert + ?Sized,
{
    if let Value::Integer(i) = raw {
        if *i < 0 {
            if let Some(v) = T::from_driver_negative(*i) {
                return Ok(v);
            }
        }
    }
    let v = converter.coerce(raw, T::KIND)?;
    // A converter may ignore `kind`.
    T::from_i128(v).ok_or_else(|| DecodeError::Overflow {
        value: v.to_string(),
        kind: T::KIND,
    })
}

impl<T: Scalar> Encode for Nullable<T> {
    fn encode(self) -> Result<Value, EncodeError> {
        Ok(self.to_value())
    }
}

impl<T: Scalar> Decode for Nullable<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let mut n = Self::default();
        n.scan(value)?;
        Ok(n)
    }
}

macro_rules! impl_codec {
    ($($ty:ty),+) => {
        $(
            impl Encode for $ty {
                fn encode(self) -> Result<Value, EncodeError> {
                    Ok(self.to_driver())
                }
            }

            impl Decode for $ty {
                fn decode(value: &Value) -> Result<Self, DecodeError> {
                    if value.is_null() {
                        return Err(DecodeError::Conversion("unexpected NULL".into()));
                    }
                    coerce::<$ty, _>(value, &BestEffort)
                }
            }
        )+
    };
}

impl_codec!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
