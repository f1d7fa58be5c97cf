//! User registration and lookup

use crate::config::QuillConfig;
use crate::core::entity::EntityId;
use crate::core::error::{ConflictError, QuillResult};
use crate::core::field::{FieldChecks, FieldFormat};
use crate::core::query::{PageRequest, PagedResult};
use crate::core::repository::AsyncRepository;
use crate::core::sort::SortDirection;
use crate::entities::{Role, User};
use crate::repositories::UserRepositoryExtAsync;
use crate::services::ensure_valid;
use crate::specifications::user;
use serde::Deserialize;
use std::sync::Arc;

/// Registration input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

pub struct UserService<R> {
    users: Arc<R>,
    config: Arc<QuillConfig>,
}

impl<R: AsyncRepository<User>> UserService<R> {
    pub fn new(users: Arc<R>, config: Arc<QuillConfig>) -> Self {
        Self { users, config }
    }

    /// Register a user
    ///
    /// Every field problem is reported at once; username and email must not
    /// be taken by another user.
    pub async fn register(&self, input: NewUser) -> QuillResult<User> {
        let username = input.username.trim();
        let email = input.email.trim();
        let limits = &self.config.validation;

        let mut checks = FieldChecks::new();
        checks
            .required("username", username)
            .max_length("username", username, limits.max_username_length)
            .format("username", username, &FieldFormat::Username)
            .required("email", email)
            .max_length("email", email, limits.max_email_length)
            .format("email", email, &FieldFormat::Email);
        ensure_valid(checks)?;

        if self.users.username_already_exists_async(Some(username)).await? {
            return Err(ConflictError::new("user", "username", username).into());
        }
        if self.users.email_already_exists_async(Some(email)).await? {
            return Err(ConflictError::new("user", "email", email).into());
        }

        let mut user = User::new(username, email);
        user.first_name = input.first_name;
        user.last_name = input.last_name;

        let user = self.users.add_async(Some(user)).await?;
        tracing::info!(id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn get(&self, id: EntityId) -> QuillResult<User> {
        Ok(self.users.get_async(id).await?)
    }

    /// Look a user up by exact username
    pub async fn find_by_username(&self, username: &str) -> QuillResult<Option<User>> {
        let filter = user::username_equals(username);
        let found = self.users.query_async(Some(&filter), None, None).await?;
        Ok(found.into_iter().next())
    }

    /// Attach a role; assigning a role twice changes nothing
    pub async fn assign_role(&self, id: EntityId, role: &Role) -> QuillResult<User> {
        let mut user = self.users.get_async(id).await?;
        if user.roles.iter().any(|r| r.id == role.id) {
            return Ok(user);
        }

        user.roles.push(role.to_ref());
        let user = self.users.update_async(Some(user)).await?;
        tracing::debug!(id, role = %role.name, "role assigned");
        Ok(user)
    }

    pub async fn delete(&self, id: EntityId) -> QuillResult<()> {
        let user = self.users.get_async(id).await?;
        self.users.remove_async(Some(&user)).await?;
        Ok(())
    }

    /// Users sorted by username; the search term matches username or email
    pub async fn list(&self, request: &PageRequest) -> QuillResult<PagedResult<User>> {
        let filter = request
            .search_term()
            .map(|term| user::username_contains(term).or(user::email_contains(term)));
        let sort = user::by_username(request.direction);
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .users
            .query_page_async(filter.as_ref(), Some(&paging), Some(&sort))
            .await?)
    }

    /// Members of a role, newest first
    pub async fn list_with_role(
        &self,
        role: &str,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<User>> {
        let filter = user::has_role(role);
        let sort = user::by_created_at(SortDirection::Descending)
            .and(user::by_username(SortDirection::Ascending));
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .users
            .query_page_async(Some(&filter), Some(&paging), Some(&sort))
            .await?)
    }
}
