//! Comments left on posts

use crate::core::entity::EntityId;
use crate::entities::references::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,

    pub post_id: EntityId,
    pub author_id: EntityId,
    pub author: Option<UserRef>,

    pub like_ids: Vec<EntityId>,
}

crate::impl_entity!(Comment, "comment", "comments");

impl Comment {
    pub fn new(post_id: EntityId, author: UserRef, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
            post_id,
            author_id: author.id,
            author: Some(author),
            like_ids: Vec::new(),
        }
    }

    pub fn likes_count(&self) -> usize {
        self.like_ids.len()
    }
}
