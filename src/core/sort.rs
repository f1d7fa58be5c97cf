//! Composable multi-key sort specifications
//!
//! An [`OrderKey`] pairs a key selector with a [`SortDirection`]. A
//! [`SortSpecification`] is an ordered list of keys: the first key is the
//! primary sort and every following key only breaks ties left by the keys
//! before it.
//!
//! # Null keys
//!
//! Selectors over relations that may be absent return `Option<K>`. `None`
//! compares below every `Some`, so absent keys come first when ascending and
//! last when descending.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type Comparator<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Direction of a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Parse "asc"/"desc" (case-insensitive); anything else is ascending
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") || value.eq_ignore_ascii_case("descending") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// A key selector paired with a direction
///
/// The selector's key type is erased into a comparator so keys of different
/// types can share one [`SortSpecification`].
pub struct OrderKey<T> {
    compare: Arc<Comparator<T>>,
    direction: SortDirection,
}

impl<T: 'static> OrderKey<T> {
    /// Build a key from a selector returning any totally ordered value
    pub fn new<K, F>(selector: F, direction: SortDirection) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(move |a: &T, b: &T| selector(a).cmp(&selector(b))),
            direction,
        }
    }

    /// Shorthand for an ascending key
    pub fn ascending<K, F>(selector: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(selector, SortDirection::Ascending)
    }

    /// Shorthand for a descending key
    pub fn descending<K, F>(selector: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(selector, SortDirection::Descending)
    }
}

impl<T> OrderKey<T> {
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two entities under this key, honouring its direction
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.compare)(a, b))
    }
}

impl<T> Clone for OrderKey<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for OrderKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderKey")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Priority-ordered list of sort keys
///
/// # Example
/// ```rust,ignore
/// let sort = SortSpecification::new(OrderKey::descending(|t: &Tag| t.post_ids.len()))
///     .and(SortSpecification::new(OrderKey::ascending(|t: &Tag| t.name.clone())));
/// ```
pub struct SortSpecification<T> {
    keys: Vec<OrderKey<T>>,
}

impl<T> SortSpecification<T> {
    /// Wrap a single key
    pub fn new(key: OrderKey<T>) -> Self {
        Self { keys: vec![key] }
    }

    /// Append `other`'s keys after this specification's keys
    ///
    /// This is concatenation, not a merge: every key of `self` keeps priority
    /// over every key of `other`.
    pub fn and(mut self, other: Self) -> Self {
        self.keys.extend(other.keys);
        self
    }

    /// Append a single key with the lowest priority so far
    pub fn then(mut self, key: OrderKey<T>) -> Self {
        self.keys.push(key);
        self
    }

    pub fn keys(&self) -> &[OrderKey<T>] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two entities key by key; the first non-equal key decides
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sort in place
    ///
    /// `sort_by` is stable, so entities equal under every key keep their
    /// relative order. That matches sorting by key 0 and recursively sorting
    /// each group of ties by the next key.
    pub fn sort(&self, items: &mut [T]) {
        if self.keys.is_empty() {
            return;
        }
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<T> From<OrderKey<T>> for SortSpecification<T> {
    fn from(key: OrderKey<T>) -> Self {
        Self::new(key)
    }
}

impl<T> Clone for SortSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T> fmt::Debug for SortSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSpecification")
            .field("keys", &self.keys)
            .finish()
    }
}
