//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Store-assigned integer identifier tagged with the record type it belongs to.
pub struct TypedId<T>(i64, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wrap a raw store id.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id, PhantomData)
    }

    /// The raw store id.
    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<i64> for TypedId<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<TypedId<T>> for i64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_i64()
    }
}
