use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::scalar::Scalar;

/// A nullable integer that also remembers whether it was ever set.
///
/// A `Nullable` is in one of three states:
///
/// - *unset*: freshly defaulted and never touched. An absent field decoded with `#[serde(default)]` stays here.
/// - *null*: set, but holding no value (`null` in JSON, empty text, `NULL` from the database).
/// - *valid*: set and holding a value.
///
/// The stored value of a null instance is never observed: equality, hashing, [`as_ref`](Self::as_ref) and every
/// encoder treat it as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nullable<T> {
    pub(crate) value: T,
    pub(crate) valid: bool,
    pub(crate) set: bool,
}

impl<T: Scalar> Nullable<T> {
    /// Build an instance from its raw parts. Nothing is validated.
    pub const fn new(value: T, valid: bool, set: bool) -> Self {
        Self { value, valid, set }
    }

    /// A set, valid instance holding `value`.
    pub const fn from_value(value: T) -> Self {
        Self::new(value, true, true)
    }

    /// A set instance that is null when `value` is `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::new(T::default(), false, true),
        }
    }

    /// A set, null instance.
    pub fn null() -> Self {
        Self::from_option(None)
    }

    /// Store `value` and mark the instance valid and set.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
        self.set = true;
    }

    /// Mark the instance null and set.
    pub fn set_null(&mut self) {
        self.clear();
        self.set = true;
    }

    /// A reference to the value, or `None` if null.
    pub fn as_ref(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn get(&self) -> Option<T> {
        self.as_ref().copied()
    }

    pub fn into_option(self) -> Option<T> {
        self.get()
    }

    pub fn value_or(&self, default: T) -> T {
        self.get().unwrap_or(default)
    }

    pub fn value_or_zero(&self) -> T {
        self.value_or(T::default())
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True when there is no value.
    ///
    /// Use this with `#[serde(skip_serializing_if = "Nullable::is_null")]` to omit null fields.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// True once any constructor, decoder, scan or mutator has touched the instance.
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Fill the instance with a test value.
    ///
    /// `next_int` is reduced into `T`'s range the way the integer conversion of each width would truncate it.
    /// `field_type` is the database column type the value is destined for and is only used for tracing.
    pub fn randomize<F>(&mut self, mut next_int: F, field_type: &str, force_null: bool)
    where
        F: FnMut() -> i64,
    {
        if force_null {
            self.set_null();
        } else {
            self.set_valid(T::from_random(next_int()));
        }
        trace!(target: "nullscalar", kind = %T::KIND, field_type, force_null, "randomized");
    }

    pub(crate) fn clear(&mut self) {
        self.value = T::default();
        self.valid = false;
    }
}

impl<T: Scalar> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Scalar> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Scalar> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: Scalar> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set && self.as_ref() == other.as_ref()
    }
}

impl<T: Scalar> Eq for Nullable<T> {}

impl<T: Scalar> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.set.hash(state);
        self.as_ref().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset_null() {
        let n = Nullable::<i16>::default();
        assert!(!n.is_set());
        assert!(n.is_null());
        assert_eq!(n.as_ref(), None);
    }

    #[test]
    fn constructors() {
        let n = Nullable::new(5u8, false, false);
        assert_eq!(n.get(), None);
        assert!(!n.is_set());

        let n = Nullable::from_value(0i32);
        assert_eq!(n.get(), Some(0));
        assert!(n.is_set());

        let n = Nullable::<u64>::from_option(None);
        assert!(n.is_null());
        assert!(n.is_set());

        let n: Nullable<i8> = Some(-3).into();
        assert_eq!(n, Nullable::from_value(-3));
        let o: Option<i8> = n.into();
        assert_eq!(o, Some(-3));
    }

    #[test]
    fn null_ignores_stored_value() {
        let a = Nullable::new(7i64, false, true);
        let b = Nullable::new(0i64, false, true);
        assert_eq!(a, b);
        assert_eq!(a.as_ref(), None);
        assert_eq!(a.value_or(9), 9);
        assert_ne!(a, Nullable::default());
    }

    #[test]
    fn set_is_monotonic() {
        let mut n = Nullable::<u16>::default();
        n.set_valid(4);
        assert_eq!(n.get(), Some(4));
        n.set_null();
        assert!(n.is_set());
        assert!(n.is_null());
        assert_eq!(n.value_or_zero(), 0);
    }

    #[test]
    fn randomize() {
        let mut n = Nullable::<i16>::default();
        n.randomize(|| 40000, "smallint", false);
        assert_eq!(n.get(), Some(7233));
        assert!(n.is_set());

        n.randomize(|| 1, "smallint", true);
        assert!(n.is_null());
        assert_eq!(n.value, 0);

        let mut n = Nullable::<u64>::default();
        n.randomize(|| -1, "numeric", false);
        assert_eq!(n.get(), Some(u64::MAX));
    }
}
