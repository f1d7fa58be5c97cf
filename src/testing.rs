//! Test doubles for service tests

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{RepositoryError, RepositoryResult};
use crate::core::filter::FilterSpecification;
use crate::core::paging::PagingSpecification;
use crate::core::repository::AsyncRepository;
use crate::core::sort::SortSpecification;
use crate::storage::InMemoryRepository;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-memory repository whose lookups by id can be switched to fail
/// with a storage error while every other operation keeps working
pub(crate) struct FlakyRepository<T> {
    inner: InMemoryRepository<T>,
    failing_gets: AtomicBool,
}

impl<T: Entity> FlakyRepository<T> {
    pub(crate) fn new(inner: InMemoryRepository<T>) -> Self {
        Self {
            inner,
            failing_gets: AtomicBool::new(false),
        }
    }

    pub(crate) fn inner(&self) -> &InMemoryRepository<T> {
        &self.inner
    }

    pub(crate) fn fail_gets(&self) {
        self.failing_gets.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T: Entity> AsyncRepository<T> for FlakyRepository<T> {
    async fn add_async(&self, entity: Option<T>) -> RepositoryResult<T> {
        self.inner.add_async(entity).await
    }

    async fn update_async(&self, entity: Option<T>) -> RepositoryResult<T> {
        self.inner.update_async(entity).await
    }

    async fn remove_async(&self, entity: Option<&T>) -> RepositoryResult<()> {
        self.inner.remove_async(entity).await
    }

    async fn get_async(&self, id: EntityId) -> RepositoryResult<T> {
        if self.failing_gets.load(Ordering::SeqCst) {
            return Err(RepositoryError::storage("connection lost"));
        }
        self.inner.get_async(id).await
    }

    async fn get_all_async(&self) -> RepositoryResult<Vec<T>> {
        self.inner.get_all_async().await
    }

    async fn count_all_async(&self) -> RepositoryResult<usize> {
        self.inner.count_all_async().await
    }

    async fn query_async(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>> {
        self.inner.query_async(filter, paging, sort).await
    }
}
