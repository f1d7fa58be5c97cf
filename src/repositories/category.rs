//! Category existence checks

use crate::core::error::RepositoryResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::entities::Category;
use crate::specifications::category;
use async_trait::async_trait;

pub trait CategoryRepositoryExt {
    /// Whether a category with exactly this name is stored
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

impl<R: Repository<Category> + ?Sized> CategoryRepositoryExt for R {
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists(&category::name_equals(name)),
            None => Ok(false),
        }
    }
}

#[async_trait]
pub trait CategoryRepositoryExtAsync {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R: AsyncRepository<Category> + ?Sized> CategoryRepositoryExtAsync for R {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists_async(&category::name_equals(name)).await,
            None => Ok(false),
        }
    }
}
