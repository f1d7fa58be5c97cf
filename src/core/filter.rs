//! Composable filter specifications
//!
//! A [`FilterSpecification`] wraps a pure predicate over an entity. Leaves are
//! built from closures (see `crate::specifications`) and combined with
//! [`FilterSpecification::and`], [`FilterSpecification::or`] and
//! [`FilterSpecification::not`].
//!
//! "No filter" is expressed by absence (`Option::None`) rather than by an
//! always-true instance, which is why [`FilterSpecification::all_of`] returns
//! an `Option`.

use std::fmt;
use std::sync::Arc;

type Predicate<T> = dyn Fn(&T) -> bool + Send + Sync;

/// A side-effect-free boolean predicate over `T`
///
/// # Example
/// ```rust,ignore
/// let published = FilterSpecification::new(|p: &Post| p.published_at.is_some());
/// let by_alice = FilterSpecification::new(|p: &Post| p.author_id == 1);
///
/// let spec = published.and(by_alice);
/// assert!(spec.is_satisfied_by(&post));
/// ```
pub struct FilterSpecification<T> {
    predicate: Arc<Predicate<T>>,
}

impl<T> FilterSpecification<T> {
    /// Create a leaf specification from a predicate
    ///
    /// The predicate must not mutate anything and must treat absent nested
    /// relations as "no match" rather than panicking.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the specification against a single entity
    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }

    /// Fold a chain of specifications with AND
    ///
    /// Returns `None` for an empty chain, which callers treat as "no filter".
    pub fn all_of<I>(specs: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        T: 'static,
    {
        specs.into_iter().reduce(|acc, spec| acc.and(spec))
    }
}

impl<T: 'static> FilterSpecification<T> {
    /// Conjunction: `x => self(x) && other(x)`
    ///
    /// The right side is only evaluated when the left side holds.
    pub fn and(self, other: Self) -> Self {
        let left = self.predicate;
        let right = other.predicate;
        Self::new(move |entity| left(entity) && right(entity))
    }

    /// Disjunction: `x => self(x) || other(x)`
    ///
    /// The right side is only evaluated when the left side fails.
    pub fn or(self, other: Self) -> Self {
        let left = self.predicate;
        let right = other.predicate;
        Self::new(move |entity| left(entity) || right(entity))
    }

    /// Negation: `x => !self(x)`
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        let inner = self.predicate;
        Self::new(move |entity| !inner(entity))
    }
}

impl<T> Clone for FilterSpecification<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for FilterSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSpecification").finish_non_exhaustive()
    }
}
