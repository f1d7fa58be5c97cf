//! Roles and the permissions they grant

use crate::core::entity::EntityId;
use crate::entities::references::EntityRef;
use serde::{Deserialize, Serialize};

/// A named capability granted through a role (e.g. "posts.delete")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
}

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub permissions: Vec<Permission>,
}

crate::impl_entity!(Role, "role", "roles");

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            permissions: Vec::new(),
        }
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(Permission::new(permission));
        self
    }

    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p.name == permission)
    }

    pub fn to_ref(&self) -> EntityRef {
        EntityRef::new(self.id, self.name.clone())
    }
}
