//! Text encoding for form, query string and CSV style codecs. An empty string is null.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{Nullable, error::DecodeError, scalar::Scalar};

impl<T: Scalar> Nullable<T> {
    /// Decode a base-10 literal into this instance. Empty input is null.
    ///
    /// On error the instance is left null.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), DecodeError> {
        self.set = true;
        if text.is_empty() {
            self.clear();
            return Ok(());
        }
        let parsed = match std::str::from_utf8(text) {
            Ok(s) => T::parse(s),
            Err(_) => Err(DecodeError::Parse {
                input: String::from_utf8_lossy(text).into_owned(),
                kind: T::KIND,
            }),
        };
        match parsed {
            Ok(v) => {
                self.value = v;
                self.valid = true;
                Ok(())
            }
            Err(e) => {
                self.clear();
                debug!(target: "nullscalar", kind = %T::KIND, error = %e, "rejected text literal");
                Err(e)
            }
        }
    }

    /// Empty for null, otherwise the decimal value.
    pub fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl<T: Scalar> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_ref() {
            Some(v) => fmt::Display::fmt(v, f),
            None => Ok(()),
        }
    }
}

impl<T: Scalar> FromStr for Nullable<T> {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut n = Self::default();
        n.unmarshal_text(s.as_bytes())?;
        Ok(n)
    }
}
