//! Tri-state nullable integers for JSON, text and database drivers.
//!
//! A [`Nullable<T>`] is *unset*, *null* or *valid*, and keeps that state intact across every boundary it crosses:
//!
//! | Boundary        | Null                | Valid                                   |
//! |-----------------|---------------------|-----------------------------------------|
//! | JSON            | `null`              | integer, or numeric string on decode     |
//! | Text            | empty string        | base-10 literal                         |
//! | Driver [`Value`]| [`Value::Null`]     | [`Value::Integer`], or [`Value::Text`] for `u64` ≥ 2^63 |
//!
//! # Types
//!
//! | Alias          | Rust type |
//! |----------------|-----------|
//! | [`NullI8`]     | `i8`      |
//! | [`NullI16`]    | `i16`     |
//! | [`NullI32`]    | `i32`     |
//! | [`NullI64`]    | `i64`     |
//! | [`NullIsize`]  | `isize`   |
//! | [`NullU8`]     | `u8`      |
//! | [`NullU16`]    | `u16`     |
//! | [`NullU32`]    | `u32`     |
//! | [`NullU64`]    | `u64`     |
//! | [`NullUsize`]  | `usize`   |
//!
//! #### Note: zero and the wide unsigned types
//!
//! `u32`, `u64` and `usize` decode a JSON `0` as null. Text and driver decoding do not share this rule, so
//! `Nullable::<u64>::from_value(0)` survives text and driver round trips but comes back from JSON as null.
//!
//! #### Note: unsigned 64-bit driver values
//!
//! Drivers carry integers as `i64`. Values of 2^63 and above are bound as decimal text, and a negative integer
//! scanned into a `u64` or `usize` is read as its two's-complement bit pattern rather than rejected. `usize` follows
//! `u64` in both directions, so large `usize` values are bound as text rather than truncated.

mod driver;
mod error;
mod json;
mod nullable;
mod text;
mod value;

pub mod convert;
pub mod decode;
pub mod encode;
pub mod scalar;

pub use crate::{
    convert::{BestEffort, Convert},
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Result},
    nullable::Nullable,
    scalar::{Kind, Scalar},
    value::Value,
};

pub type NullI8 = Nullable<i8>;
pub type NullI16 = Nullable<i16>;
pub type NullI32 = Nullable<i32>;
pub type NullI64 = Nullable<i64>;
pub type NullIsize = Nullable<isize>;
pub type NullU8 = Nullable<u8>;
pub type NullU16 = Nullable<u16>;
pub type NullU32 = Nullable<u32>;
pub type NullU64 = Nullable<u64>;
pub type NullUsize = Nullable<usize>;
