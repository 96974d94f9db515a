//! Width and signedness policy for the integers a [`Nullable`](crate::Nullable) can hold.
//!
//! Every codec in this crate is written once against [`Scalar`]. The per-type differences (range, the
//! zero-is-null quirk of the wide unsigned types, driver reinterpretation and test-value reduction) live in the
//! table at the bottom of this file.

use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use serde::Serialize;

use crate::{Value, error::DecodeError};

/// The integer type behind a [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl Kind {
    pub const fn bits(self) -> u32 {
        match self {
            Kind::I8 | Kind::U8 => 8,
            Kind::I16 | Kind::U16 => 16,
            Kind::I32 | Kind::U32 => 32,
            Kind::I64 | Kind::U64 => 64,
            Kind::Isize | Kind::Usize => usize::BITS,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::Isize
        )
    }

    /// Smallest representable value.
    pub const fn min(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub const fn max(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    pub const fn contains(self, v: i128) -> bool {
        v >= self.min() && v <= self.max()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Kind::I8 => "int8",
            Kind::I16 => "int16",
            Kind::I32 => "int32",
            Kind::I64 => "int64",
            Kind::Isize => "int",
            Kind::U8 => "uint8",
            Kind::U16 => "uint16",
            Kind::U32 => "uint32",
            Kind::U64 => "uint64",
            Kind::Usize => "uint",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An integer type that can be wrapped in a [`Nullable`](crate::Nullable).
///
/// Implemented for all primitive integers except the 128-bit ones, which no driver value can carry.
pub trait Scalar:
    Copy
    + Default
    + Eq
    + Hash
    + Debug
    + Display
    + FromStr<Err = ParseIntError>
    + Serialize
    + Send
    + Sync
    + 'static
{
    const KIND: Kind;

    /// Decoding a JSON zero into this type yields null rather than a valid zero.
    const ZERO_IS_NULL: bool;

    fn from_i128(v: i128) -> Option<Self>;

    fn to_i128(self) -> i128;

    /// Reduce an arbitrary generator output into this type's range.
    fn from_random(n: i64) -> Self;

    /// The reinterpretation applied to a negative driver integer, if this type has one.
    fn from_driver_negative(_v: i64) -> Option<Self> {
        None
    }

    fn is_zero(self) -> bool {
        self == Self::default()
    }

    /// Parse a base-10 literal at exactly this type's width.
    fn parse(text: &str) -> Result<Self, DecodeError> {
        text.parse::<Self>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::Overflow {
                value: text.to_owned(),
                kind: Self::KIND,
            },
            _ => DecodeError::Parse {
                input: text.to_owned(),
                kind: Self::KIND,
            },
        })
    }

    /// The driver representation of a value.
    ///
    /// Drivers only carry signed 64-bit integers, so values at or above 2^63 are emitted as decimal text.
    fn to_driver(self) -> Value {
        match i64::try_from(self.to_i128()) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Text(self.to_string()),
        }
    }
}

macro_rules! from_random {
    (modulo, $ty:ty, $n:expr) => {
        ($n % (<$ty>::MAX as i64)) as $ty
    };
    (bits, $ty:ty, $n:expr) => {
        $n as $ty
    };
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident { zero_is_null: $zero:literal, random: $rand:ident, reinterpret: $neg:literal })+) => {
        $(
            impl Scalar for $ty {
                const KIND: Kind = Kind::$kind;
                const ZERO_IS_NULL: bool = $zero;

                fn from_i128(v: i128) -> Option<Self> {
                    <$ty>::try_from(v).ok()
                }

                fn to_i128(self) -> i128 {
                    self as i128
                }

                fn from_random(n: i64) -> Self {
                    from_random!($rand, $ty, n)
                }

                fn from_driver_negative(v: i64) -> Option<Self> {
                    $neg.then_some(v as $ty)
                }
            }
        )+
    };
}

impl_scalar! {
    i8 => I8 { zero_is_null: false, random: modulo, reinterpret: false }
    i16 => I16 { zero_is_null: false, random: modulo, reinterpret: false }
    i32 => I32 { zero_is_null: false, random: modulo, reinterpret: false }
    i64 => I64 { zero_is_null: false, random: modulo, reinterpret: false }
    isize => Isize { zero_is_null: false, random: modulo, reinterpret: false }
    u8 => U8 { zero_is_null: false, random: modulo, reinterpret: false }
    u16 => U16 { zero_is_null: false, random: modulo, reinterpret: false }
    u32 => U32 { zero_is_null: true, random: modulo, reinterpret: false }
    u64 => U64 { zero_is_null: true, random: bits, reinterpret: true }
    usize => Usize { zero_is_null: true, random: bits, reinterpret: true }
}
