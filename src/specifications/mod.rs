//! Concrete specification leaves and sort keys, one module per entity
//!
//! Every leaf is a plain constructor returning a
//! [`FilterSpecification`]; sort keys return a [`SortSpecification`] so they
//! can be chained with `and`.
//!
//! # Example
//! ```rust,ignore
//! use quill::specifications::post;
//!
//! let filter = post::has_tag("rust").and(post::created_after(last_week));
//! let sort = post::by_likes_count(SortDirection::Descending)
//!     .and(post::by_title(SortDirection::Ascending));
//!
//! let page = posts.query(Some(&filter), Some(&PagingSpecification::new(0, 20)), Some(&sort))?;
//! ```
//!
//! String comparisons are ordinal and case-sensitive.

pub mod category;
pub mod comment;
pub mod like;
pub mod post;
pub mod role;
pub mod tag;
pub mod user;

use crate::core::entity::{Entity, EntityId};
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};

/// Entity whose identity equals `id`
pub fn id_equals<T: Entity>(id: EntityId) -> FilterSpecification<T> {
    FilterSpecification::new(move |entity: &T| entity.id() == id)
}

/// Entity whose identity is one of `ids`
pub fn id_in<T: Entity>(ids: Vec<EntityId>) -> FilterSpecification<T> {
    FilterSpecification::new(move |entity: &T| ids.contains(&entity.id()))
}

/// Sort by identity
pub fn by_id<T: Entity>(direction: SortDirection) -> SortSpecification<T> {
    SortSpecification::new(OrderKey::new(|entity: &T| entity.id(), direction))
}

/// Substring test shared by the "contains" leaves
pub(crate) fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Substring test over a value that may be absent; absent never matches
pub(crate) fn contains_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| contains(value, needle))
}
