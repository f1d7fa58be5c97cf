//! Generic repository traits
//!
//! [`Repository`] is the synchronous contract and [`AsyncRepository`] its
//! awaitable twin; both carry the same semantics. The async methods carry an
//! `_async` suffix so a store implementing both traits never has ambiguous
//! method calls. A `None` argument stands
//! for an absent (null) value and is rejected with
//! [`RepositoryError::ArgumentNull`].

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{RepositoryError, RepositoryResult};
use crate::core::filter::FilterSpecification;
use crate::core::paging::PagingSpecification;
use crate::core::query::PagedResult;
use crate::core::sort::SortSpecification;
use async_trait::async_trait;

/// Generic CRUD plus the filter → sort → page query for any entity type
///
/// Implementations are agnostic to the underlying storage mechanism.
pub trait Repository<T: Entity>: Send + Sync {
    /// Stage a create
    ///
    /// An entity without identity (`id <= 0`) is assigned the next one.
    /// Returns the entity as stored.
    fn add(&self, entity: Option<T>) -> RepositoryResult<T>;

    /// Replace the stored entity carrying the same identity
    fn update(&self, entity: Option<T>) -> RepositoryResult<T>;

    /// Stage a delete; removing an entity that is not stored is a no-op
    fn remove(&self, entity: Option<&T>) -> RepositoryResult<()>;

    /// Remove every entity of the batch, one at a time
    ///
    /// Not atomic: an error part-way leaves the earlier removals in place.
    fn remove_range(&self, entities: Option<&[T]>) -> RepositoryResult<()> {
        let entities = entities.ok_or_else(|| RepositoryError::argument_null("entities"))?;
        for entity in entities {
            self.remove(Some(entity))?;
        }
        Ok(())
    }

    /// Get the entity with this identity, or [`RepositoryError::NotFound`]
    fn get(&self, id: EntityId) -> RepositoryResult<T>;

    /// Get every entity, in no particular order
    fn get_all(&self) -> RepositoryResult<Vec<T>>;

    /// Total number of stored entities, ignoring any specification
    fn count_all(&self) -> RepositoryResult<usize>;

    /// Filter, then sort, then page; every stage is optional
    fn query(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>>;

    /// Number of entities matching `filter` (all entities without one)
    fn count(&self, filter: Option<&FilterSpecification<T>>) -> RepositoryResult<usize> {
        Ok(self.query(filter, None, None)?.len())
    }

    /// Whether at least one entity matches `filter`
    fn exists(&self, filter: &FilterSpecification<T>) -> RepositoryResult<bool> {
        Ok(self.count(Some(filter))? > 0)
    }

    /// [`Repository::query`] plus the filtered total and paging metadata
    ///
    /// The default counts and queries in two separate calls, so a concurrent
    /// write in between can make `total` disagree with `data`. Stores that
    /// can read both from one snapshot override it.
    fn query_page(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<PagedResult<T>> {
        let total = self.count(filter)?;
        let data = self.query(filter, paging, sort)?;
        Ok(PagedResult::new(data, paging, total))
    }
}

/// Awaitable variant of [`Repository`] with identical semantics
#[async_trait]
pub trait AsyncRepository<T: Entity>: Send + Sync {
    /// See [`Repository::add`]
    async fn add_async(&self, entity: Option<T>) -> RepositoryResult<T>;

    /// See [`Repository::update`]
    async fn update_async(&self, entity: Option<T>) -> RepositoryResult<T>;

    /// See [`Repository::remove`]
    async fn remove_async(&self, entity: Option<&T>) -> RepositoryResult<()>;

    /// See [`Repository::remove_range`]
    async fn remove_range_async(&self, entities: Option<&[T]>) -> RepositoryResult<()> {
        let entities = entities.ok_or_else(|| RepositoryError::argument_null("entities"))?;
        for entity in entities {
            self.remove_async(Some(entity)).await?;
        }
        Ok(())
    }

    /// See [`Repository::get`]
    async fn get_async(&self, id: EntityId) -> RepositoryResult<T>;

    /// See [`Repository::get_all`]
    async fn get_all_async(&self) -> RepositoryResult<Vec<T>>;

    /// See [`Repository::count_all`]
    async fn count_all_async(&self) -> RepositoryResult<usize>;

    /// See [`Repository::query`]
    async fn query_async(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>>;

    /// See [`Repository::count`]
    async fn count_async(&self, filter: Option<&FilterSpecification<T>>) -> RepositoryResult<usize> {
        Ok(self.query_async(filter, None, None).await?.len())
    }

    /// See [`Repository::exists`]
    async fn exists_async(&self, filter: &FilterSpecification<T>) -> RepositoryResult<bool> {
        Ok(self.count_async(Some(filter)).await? > 0)
    }

    /// See [`Repository::query_page`]
    async fn query_page_async(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<PagedResult<T>> {
        let total = self.count_async(filter).await?;
        let data = self.query_async(filter, paging, sort).await?;
        Ok(PagedResult::new(data, paging, total))
    }
}
