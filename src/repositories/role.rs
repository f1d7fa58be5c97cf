//! Role existence checks

use crate::core::error::RepositoryResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::entities::Role;
use crate::specifications::role;
use async_trait::async_trait;

pub trait RoleRepositoryExt {
    /// Whether a role with exactly this name is stored
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

impl<R: Repository<Role> + ?Sized> RoleRepositoryExt for R {
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists(&role::name_equals(name)),
            None => Ok(false),
        }
    }
}

#[async_trait]
pub trait RoleRepositoryExtAsync {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R: AsyncRepository<Role> + ?Sized> RoleRepositoryExtAsync for R {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists_async(&role::name_equals(name)).await,
            None => Ok(false),
        }
    }
}
