//! Post leaves and sort keys
//!
//! Leaves over the author and category snapshots treat an absent snapshot as
//! "no match"; the id leaves read the foreign keys and never need one.

use super::{contains, contains_opt};
use crate::core::entity::EntityId;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::Post;
use chrono::{DateTime, Utc};

pub fn title_equals(title: impl Into<String>) -> FilterSpecification<Post> {
    let title = title.into();
    FilterSpecification::new(move |p: &Post| p.title == title)
}

pub fn title_contains(fragment: impl Into<String>) -> FilterSpecification<Post> {
    let fragment = fragment.into();
    FilterSpecification::new(move |p: &Post| contains(&p.title, &fragment))
}

pub fn content_contains(fragment: impl Into<String>) -> FilterSpecification<Post> {
    let fragment = fragment.into();
    FilterSpecification::new(move |p: &Post| contains(&p.content, &fragment))
}

/// Post tagged with a tag of this name
pub fn has_tag(name: impl Into<String>) -> FilterSpecification<Post> {
    let name = name.into();
    FilterSpecification::new(move |p: &Post| p.has_tag(&name))
}

pub fn category_id_equals(category_id: EntityId) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.category_id == Some(category_id))
}

pub fn category_name_equals(name: impl Into<String>) -> FilterSpecification<Post> {
    let name = name.into();
    FilterSpecification::new(move |p: &Post| p.category.as_ref().is_some_and(|c| c.name == name))
}

/// Posts filed under no category
pub fn uncategorized() -> FilterSpecification<Post> {
    FilterSpecification::new(|p: &Post| p.category_id.is_none())
}

pub fn author_id_equals(author_id: EntityId) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.author_id == author_id)
}

pub fn author_username_contains(fragment: impl Into<String>) -> FilterSpecification<Post> {
    let fragment = fragment.into();
    FilterSpecification::new(move |p: &Post| {
        contains_opt(p.author.as_ref().map(|a| a.username.as_str()), &fragment)
    })
}

pub fn author_display_name_contains(fragment: impl Into<String>) -> FilterSpecification<Post> {
    let fragment = fragment.into();
    FilterSpecification::new(move |p: &Post| {
        contains_opt(
            p.author.as_ref().and_then(|a| a.display_name.as_deref()),
            &fragment,
        )
    })
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.created_at < instant)
}

pub fn comments_count_at_least(min: usize) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.comments_count() >= min)
}

pub fn comments_count_at_most(max: usize) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.comments_count() <= max)
}

pub fn likes_count_at_least(min: usize) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.likes_count() >= min)
}

pub fn likes_count_at_most(max: usize) -> FilterSpecification<Post> {
    FilterSpecification::new(move |p: &Post| p.likes_count() <= max)
}

pub fn by_title(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(|p: &Post| p.title.clone(), direction))
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(|p: &Post| p.created_at, direction))
}

/// Never-edited posts sort first when ascending
pub fn by_updated_at(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(|p: &Post| p.updated_at, direction))
}

pub fn by_likes_count(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(|p: &Post| p.likes_count(), direction))
}

pub fn by_comments_count(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(|p: &Post| p.comments_count(), direction))
}

pub fn by_category_name(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(
        |p: &Post| p.category.as_ref().map(|c| c.name.clone()),
        direction,
    ))
}

pub fn by_author_username(direction: SortDirection) -> SortSpecification<Post> {
    SortSpecification::new(OrderKey::new(
        |p: &Post| p.author.as_ref().map(|a| a.username.clone()),
        direction,
    ))
}
