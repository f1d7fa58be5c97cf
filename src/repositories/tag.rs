//! Tag existence checks

use crate::core::error::RepositoryResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::entities::Tag;
use crate::specifications::tag;
use async_trait::async_trait;

pub trait TagRepositoryExt {
    /// Whether a tag with exactly this name is stored
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

impl<R: Repository<Tag> + ?Sized> TagRepositoryExt for R {
    fn name_already_exists(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists(&tag::name_equals(name)),
            None => Ok(false),
        }
    }
}

#[async_trait]
pub trait TagRepositoryExtAsync {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R: AsyncRepository<Tag> + ?Sized> TagRepositoryExtAsync for R {
    async fn name_already_exists_async(&self, name: Option<&str>) -> RepositoryResult<bool> {
        match name {
            Some(name) => self.exists_async(&tag::name_equals(name)).await,
            None => Ok(false),
        }
    }
}
