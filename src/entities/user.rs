//! Registered users

use crate::core::entity::EntityId;
use crate::entities::references::{EntityRef, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub roles: Vec<EntityRef>,
}

crate::impl_entity!(User, "user", "users");

impl User {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
            roles: Vec::new(),
        }
    }

    /// "First Last" when both are known, whichever one is set otherwise
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.name == role)
    }

    /// Snapshot used as author reference on posts, comments and likes
    pub fn to_ref(&self) -> UserRef {
        UserRef {
            id: self.id,
            username: self.username.clone(),
            display_name: self.full_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut user = User::new("alice", "alice@example.com");
        assert_eq!(user.full_name(), None);

        user.first_name = Some("Alice".to_string());
        assert_eq!(user.full_name().as_deref(), Some("Alice"));

        user.last_name = Some("Liddell".to_string());
        assert_eq!(user.full_name().as_deref(), Some("Alice Liddell"));
        assert_eq!(user.to_ref().shown_name(), "Alice Liddell");
    }
}
