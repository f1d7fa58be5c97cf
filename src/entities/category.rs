//! Post categories

use crate::core::entity::EntityId;
use crate::entities::references::EntityRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,

    /// Posts filed under this category
    pub post_ids: Vec<EntityId>,
}

crate::impl_entity!(Category, "category", "categories");

impl Category {
    /// Create a category that has not been stored yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            created_at: Utc::now(),
            post_ids: Vec::new(),
        }
    }

    pub fn posts_count(&self) -> usize {
        self.post_ids.len()
    }

    pub fn to_ref(&self) -> EntityRef {
        EntityRef::new(self.id, self.name.clone())
    }
}
