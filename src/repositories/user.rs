//! User existence checks

use crate::core::error::RepositoryResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::entities::User;
use crate::specifications::user;
use async_trait::async_trait;

pub trait UserRepositoryExt {
    fn username_already_exists(&self, username: Option<&str>) -> RepositoryResult<bool>;

    fn email_already_exists(&self, email: Option<&str>) -> RepositoryResult<bool>;
}

impl<R: Repository<User> + ?Sized> UserRepositoryExt for R {
    fn username_already_exists(&self, username: Option<&str>) -> RepositoryResult<bool> {
        match username {
            Some(username) => self.exists(&user::username_equals(username)),
            None => Ok(false),
        }
    }

    fn email_already_exists(&self, email: Option<&str>) -> RepositoryResult<bool> {
        match email {
            Some(email) => self.exists(&user::email_equals(email)),
            None => Ok(false),
        }
    }
}

#[async_trait]
pub trait UserRepositoryExtAsync {
    async fn username_already_exists_async(&self, username: Option<&str>)
    -> RepositoryResult<bool>;

    async fn email_already_exists_async(&self, email: Option<&str>) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R: AsyncRepository<User> + ?Sized> UserRepositoryExtAsync for R {
    async fn username_already_exists_async(
        &self,
        username: Option<&str>,
    ) -> RepositoryResult<bool> {
        match username {
            Some(username) => self.exists_async(&user::username_equals(username)).await,
            None => Ok(false),
        }
    }

    async fn email_already_exists_async(&self, email: Option<&str>) -> RepositoryResult<bool> {
        match email {
            Some(email) => self.exists_async(&user::email_equals(email)).await,
            None => Ok(false),
        }
    }
}
