//! Category leaves and sort keys

use super::contains;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::Category;
use chrono::{DateTime, Utc};

pub fn name_equals(name: impl Into<String>) -> FilterSpecification<Category> {
    let name = name.into();
    FilterSpecification::new(move |c: &Category| c.name == name)
}

pub fn name_contains(fragment: impl Into<String>) -> FilterSpecification<Category> {
    let fragment = fragment.into();
    FilterSpecification::new(move |c: &Category| contains(&c.name, &fragment))
}

pub fn posts_count_at_least(min: usize) -> FilterSpecification<Category> {
    FilterSpecification::new(move |c: &Category| c.posts_count() >= min)
}

pub fn posts_count_at_most(max: usize) -> FilterSpecification<Category> {
    FilterSpecification::new(move |c: &Category| c.posts_count() <= max)
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<Category> {
    FilterSpecification::new(move |c: &Category| c.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<Category> {
    FilterSpecification::new(move |c: &Category| c.created_at < instant)
}

pub fn by_name(direction: SortDirection) -> SortSpecification<Category> {
    SortSpecification::new(OrderKey::new(|c: &Category| c.name.clone(), direction))
}

pub fn by_posts_count(direction: SortDirection) -> SortSpecification<Category> {
    SortSpecification::new(OrderKey::new(|c: &Category| c.posts_count(), direction))
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<Category> {
    SortSpecification::new(OrderKey::new(|c: &Category| c.created_at, direction))
}
