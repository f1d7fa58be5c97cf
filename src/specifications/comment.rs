//! Comment leaves and sort keys

use super::{contains, contains_opt};
use crate::core::entity::EntityId;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::Comment;
use chrono::{DateTime, Utc};

pub fn content_contains(fragment: impl Into<String>) -> FilterSpecification<Comment> {
    let fragment = fragment.into();
    FilterSpecification::new(move |c: &Comment| contains(&c.content, &fragment))
}

pub fn post_id_equals(post_id: EntityId) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.post_id == post_id)
}

pub fn author_id_equals(author_id: EntityId) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.author_id == author_id)
}

pub fn author_username_contains(fragment: impl Into<String>) -> FilterSpecification<Comment> {
    let fragment = fragment.into();
    FilterSpecification::new(move |c: &Comment| {
        contains_opt(c.author.as_ref().map(|a| a.username.as_str()), &fragment)
    })
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.created_at < instant)
}

pub fn likes_count_at_least(min: usize) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.likes_count() >= min)
}

pub fn likes_count_at_most(max: usize) -> FilterSpecification<Comment> {
    FilterSpecification::new(move |c: &Comment| c.likes_count() <= max)
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<Comment> {
    SortSpecification::new(OrderKey::new(|c: &Comment| c.created_at, direction))
}

pub fn by_likes_count(direction: SortDirection) -> SortSpecification<Comment> {
    SortSpecification::new(OrderKey::new(|c: &Comment| c.likes_count(), direction))
}
