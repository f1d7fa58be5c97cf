//! Likes on posts and comments

use crate::core::entity::EntityId;
use crate::entities::references::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of item a like points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
    Post,
    Comment,
}

impl fmt::Display for LikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeKind::Post => write!(f, "post"),
            LikeKind::Comment => write!(f, "comment"),
        }
    }
}

/// The liked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LikeTarget {
    Post(EntityId),
    Comment(EntityId),
}

impl LikeTarget {
    pub fn kind(&self) -> LikeKind {
        match self {
            LikeTarget::Post(_) => LikeKind::Post,
            LikeTarget::Comment(_) => LikeKind::Comment,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            LikeTarget::Post(id) | LikeTarget::Comment(id) => *id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub user_id: EntityId,
    pub user: Option<UserRef>,
    pub target: LikeTarget,
}

crate::impl_entity!(Like, "like", "likes");

impl Like {
    pub fn new(user: UserRef, target: LikeTarget) -> Self {
        Self {
            id: 0,
            created_at: Utc::now(),
            user_id: user.id,
            user: Some(user),
            target,
        }
    }

    pub fn kind(&self) -> LikeKind {
        self.target.kind()
    }
}
