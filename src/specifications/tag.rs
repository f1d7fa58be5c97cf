//! Tag leaves and sort keys

use super::contains;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::Tag;
use chrono::{DateTime, Utc};

pub fn name_equals(name: impl Into<String>) -> FilterSpecification<Tag> {
    let name = name.into();
    FilterSpecification::new(move |t: &Tag| t.name == name)
}

pub fn name_contains(fragment: impl Into<String>) -> FilterSpecification<Tag> {
    let fragment = fragment.into();
    FilterSpecification::new(move |t: &Tag| contains(&t.name, &fragment))
}

pub fn posts_count_at_least(min: usize) -> FilterSpecification<Tag> {
    FilterSpecification::new(move |t: &Tag| t.posts_count() >= min)
}

pub fn posts_count_at_most(max: usize) -> FilterSpecification<Tag> {
    FilterSpecification::new(move |t: &Tag| t.posts_count() <= max)
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<Tag> {
    FilterSpecification::new(move |t: &Tag| t.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<Tag> {
    FilterSpecification::new(move |t: &Tag| t.created_at < instant)
}

pub fn by_name(direction: SortDirection) -> SortSpecification<Tag> {
    SortSpecification::new(OrderKey::new(|t: &Tag| t.name.clone(), direction))
}

pub fn by_posts_count(direction: SortDirection) -> SortSpecification<Tag> {
    SortSpecification::new(OrderKey::new(|t: &Tag| t.posts_count(), direction))
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<Tag> {
    SortSpecification::new(OrderKey::new(|t: &Tag| t.created_at, direction))
}
