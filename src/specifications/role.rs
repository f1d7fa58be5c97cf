//! Role leaves and sort keys

use super::contains;
use crate::core::filter::FilterSpecification;
use crate::core::sort::{OrderKey, SortDirection, SortSpecification};
use crate::entities::Role;

pub fn name_equals(name: impl Into<String>) -> FilterSpecification<Role> {
    let name = name.into();
    FilterSpecification::new(move |r: &Role| r.name == name)
}

pub fn name_contains(fragment: impl Into<String>) -> FilterSpecification<Role> {
    let fragment = fragment.into();
    FilterSpecification::new(move |r: &Role| contains(&r.name, &fragment))
}

/// Role carrying the named permission
pub fn grants_permission(permission: impl Into<String>) -> FilterSpecification<Role> {
    let permission = permission.into();
    FilterSpecification::new(move |r: &Role| r.grants(&permission))
}

pub fn permissions_count_at_least(min: usize) -> FilterSpecification<Role> {
    FilterSpecification::new(move |r: &Role| r.permissions.len() >= min)
}

pub fn permissions_count_at_most(max: usize) -> FilterSpecification<Role> {
    FilterSpecification::new(move |r: &Role| r.permissions.len() <= max)
}

pub fn by_name(direction: SortDirection) -> SortSpecification<Role> {
    SortSpecification::new(OrderKey::new(|r: &Role| r.name.clone(), direction))
}

pub fn by_permissions_count(direction: SortDirection) -> SortSpecification<Role> {
    SortSpecification::new(OrderKey::new(|r: &Role| r.permissions.len(), direction))
}
