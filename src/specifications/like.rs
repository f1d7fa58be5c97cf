//! Like leaves and sort keys

use super::contains_opt;
use crate::core::entity::EntityId;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::{Like, LikeKind, LikeTarget};
use chrono::{DateTime, Utc};

pub fn user_id_equals(user_id: EntityId) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.user_id == user_id)
}

/// Liked item is a post or a comment
pub fn kind_is(kind: LikeKind) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.kind() == kind)
}

/// Liked item is exactly this post or comment
pub fn target_equals(target: LikeTarget) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.target == target)
}

/// Liked item has this id, whatever its kind
pub fn target_id_equals(target_id: EntityId) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.target.id() == target_id)
}

pub fn user_username_contains(fragment: impl Into<String>) -> FilterSpecification<Like> {
    let fragment = fragment.into();
    FilterSpecification::new(move |l: &Like| {
        contains_opt(l.user.as_ref().map(|u| u.username.as_str()), &fragment)
    })
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<Like> {
    FilterSpecification::new(move |l: &Like| l.created_at < instant)
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<Like> {
    SortSpecification::new(OrderKey::new(|l: &Like| l.created_at, direction))
}
