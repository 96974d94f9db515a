use nullscalar::{Nullable, Scalar};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[doc(hidden)]
pub use paste;

/// A deterministic `next_int` generator for [`Nullable::randomize`](nullscalar::Nullable::randomize).
pub fn seeded(seed: u64) -> impl FnMut() -> i64 {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    move || rng.random::<i64>()
}

/// Serialize with serde_json and deserialize the result.
pub fn serde_round_trip<T: Scalar>(n: &Nullable<T>) -> anyhow::Result<Nullable<T>> {
    Ok(serde_json::from_str(&serde_json::to_string(n)?)?)
}

// Test a scalar type across every boundary: each literal must decode to the value from JSON and text, encode back
// to the same literal, and survive a driver round trip.
#[macro_export]
macro_rules! test_scalar {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        $crate::test_json_scalar!($name<$ty>($($text == $value),+));
        $crate::test_text_scalar!($name<$ty>($($text == $value),+));
        $crate::test_driver_scalar!($name<$ty>($($value),+));
    };

    ($name:ident($($text:literal == $value:expr),+ $(,)?)) => {
        $crate::test_scalar!($name<$name>($($text == $value),+));
    };
}

#[macro_export]
macro_rules! test_json_scalar {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_json_scalar_ $name >] () -> anyhow::Result<()> {
                use nullscalar::Nullable;

                $(
                    let expected = Nullable::<$ty>::from_value($value);

                    let mut decoded = Nullable::<$ty>::default();
                    decoded.unmarshal_json($text.as_bytes())?;
                    assert_eq!(expected, decoded, "[1] JSON decode mismatch for {}", $text);
                    assert_eq!($text.as_bytes(), &expected.marshal_json()[..], "[2] JSON encode mismatch for {}", $text);

                    let via_serde = $crate::serde_round_trip(&expected)?;
                    assert_eq!(expected, via_serde, "[3] serde round-trip mismatch for {}", $text);
                )+

                Ok(())
            }
        }
    };
}

#[macro_export]
macro_rules! test_text_scalar {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_text_scalar_ $name >] () -> anyhow::Result<()> {
                use nullscalar::Nullable;

                $(
                    let expected = Nullable::<$ty>::from_value($value);

                    let decoded: Nullable<$ty> = $text.parse()?;
                    assert_eq!(expected, decoded, "[1] text decode mismatch for {}", $text);
                    assert_eq!($text.as_bytes(), &expected.marshal_text()[..], "[2] text encode mismatch for {}", $text);
                )+

                Ok(())
            }
        }
    };
}

#[macro_export]
macro_rules! test_driver_scalar {
    ($name:ident<$ty:ty>($($value:expr),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_driver_scalar_ $name >] () -> anyhow::Result<()> {
                use nullscalar::Nullable;

                $(
                    let expected = Nullable::<$ty>::from_value($value);
                    let bound = expected.to_value();

                    let mut scanned = Nullable::<$ty>::default();
                    scanned.scan(&bound)?;
                    assert_eq!(expected, scanned, "driver round-trip mismatch; bound as {:?}", bound);
                )+

                Ok(())
            }
        }
    };
}
