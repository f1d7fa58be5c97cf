//! User leaves and sort keys

use super::{contains, contains_opt};
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::User;
use chrono::{DateTime, Utc};

pub fn username_equals(username: impl Into<String>) -> FilterSpecification<User> {
    let username = username.into();
    FilterSpecification::new(move |u: &User| u.username == username)
}

pub fn username_contains(fragment: impl Into<String>) -> FilterSpecification<User> {
    let fragment = fragment.into();
    FilterSpecification::new(move |u: &User| contains(&u.username, &fragment))
}

pub fn email_equals(email: impl Into<String>) -> FilterSpecification<User> {
    let email = email.into();
    FilterSpecification::new(move |u: &User| u.email == email)
}

pub fn email_contains(fragment: impl Into<String>) -> FilterSpecification<User> {
    let fragment = fragment.into();
    FilterSpecification::new(move |u: &User| contains(&u.email, &fragment))
}

/// Matches first or last name; users without either never match
pub fn name_contains(fragment: impl Into<String>) -> FilterSpecification<User> {
    let fragment = fragment.into();
    FilterSpecification::new(move |u: &User| {
        contains_opt(u.first_name.as_deref(), &fragment)
            || contains_opt(u.last_name.as_deref(), &fragment)
    })
}

/// User holding a role with this name
pub fn has_role(role: impl Into<String>) -> FilterSpecification<User> {
    let role = role.into();
    FilterSpecification::new(move |u: &User| u.has_role(&role))
}

pub fn created_after(instant: DateTime<Utc>) -> FilterSpecification<User> {
    FilterSpecification::new(move |u: &User| u.created_at > instant)
}

pub fn created_before(instant: DateTime<Utc>) -> FilterSpecification<User> {
    FilterSpecification::new(move |u: &User| u.created_at < instant)
}

pub fn by_username(direction: SortDirection) -> SortSpecification<User> {
    SortSpecification::new(OrderKey::new(|u: &User| u.username.clone(), direction))
}

pub fn by_email(direction: SortDirection) -> SortSpecification<User> {
    SortSpecification::new(OrderKey::new(|u: &User| u.email.clone(), direction))
}

/// Users without a last name sort first when ascending
pub fn by_last_name(direction: SortDirection) -> SortSpecification<User> {
    SortSpecification::new(OrderKey::new(|u: &User| u.last_name.clone(), direction))
}

pub fn by_created_at(direction: SortDirection) -> SortSpecification<User> {
    SortSpecification::new(OrderKey::new(|u: &User| u.created_at, direction))
}
