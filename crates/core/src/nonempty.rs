//! Non-empty sequence wrapper.
//!
//! A certificate must carry at least one amount, one document, and one
//! event. The guarantee lives in the type: `NonEmpty` can only be built from
//! a sequence with at least one element, and deserialization re-checks.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// A sequence guaranteed to hold at least one element.
///
/// Serializes transparently as a plain array, so the wire shape is an
/// ordinary list; decoding an empty array fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmpty<T>(Vec<T>);

impl<T> NonEmpty<T> {
    /// Validate a sequence, failing when it is empty.
    pub fn new(items: Vec<T>) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::invariant("sequence must not be empty"));
        }
        Ok(Self(items))
    }

    /// Build from a known first element.
    pub fn of(first: T) -> Self {
        Self(vec![first])
    }

    /// Build from a first element plus any number of further elements.
    pub fn with_tail(first: T, tail: impl IntoIterator<Item = T>) -> Self {
        let mut items = vec![first];
        items.extend(tail);
        Self(items)
    }

    /// The first element (always present).
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// Number of elements (always >= 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Append an element. Growing can never break the invariant.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = DomainError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T> AsRef<[T]> for NonEmpty<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T> Deserialize<'de> for NonEmpty<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmpty::new(items).map_err(serde::de::Error::custom)
    }
}
