//! Blog posts

use crate::core::entity::EntityId;
use crate::entities::references::{EntityRef, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,

    pub author_id: EntityId,
    pub author: Option<UserRef>,

    pub category_id: Option<EntityId>,
    pub category: Option<EntityRef>,

    pub tags: Vec<EntityRef>,
    pub comment_ids: Vec<EntityId>,
    pub like_ids: Vec<EntityId>,
}

crate::impl_entity!(Post, "post", "posts");

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: UserRef) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
            author_id: author.id,
            author: Some(author),
            category_id: None,
            category: None,
            tags: Vec::new(),
            comment_ids: Vec::new(),
            like_ids: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: EntityRef) -> Self {
        self.category_id = Some(category.id);
        self.category = Some(category);
        self
    }

    pub fn with_tag(mut self, tag: EntityRef) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    pub fn comments_count(&self) -> usize {
        self.comment_ids.len()
    }

    pub fn likes_count(&self) -> usize {
        self.like_ids.len()
    }
}
