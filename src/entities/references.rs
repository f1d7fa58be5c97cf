//! Lightweight snapshots of related entities

use crate::core::entity::EntityId;
use serde::{Deserialize, Serialize};

/// A named entity referenced from another one (category, tag, role)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// The unique ID of the referenced entity
    pub id: EntityId,

    /// Its display name at the time the snapshot was taken
    pub name: String,
}

impl EntityRef {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A user referenced as author of a post, comment or like
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    pub id: EntityId,
    pub username: String,

    /// Public name; falls back to the username when unset
    pub display_name: Option<String>,
}

impl UserRef {
    pub fn new(id: EntityId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Name shown to readers
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}
