//! In-memory implementation of the repository traits for testing and development

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{RepositoryError, RepositoryResult};
use crate::core::filter::FilterSpecification;
use crate::core::paging::PagingSpecification;
use crate::core::query::PagedResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::core::sort::SortSpecification;
use crate::core::store::QueryableStore;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Collection<T> {
    entities: IndexMap<EntityId, T>,
    last_id: EntityId,
}

/// In-memory repository implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// clones share the same collection. Identities are assigned from a
/// per-collection sequence, like an identity column.
pub struct InMemoryRepository<T> {
    collection: Arc<RwLock<Collection<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            collection: Arc::new(RwLock::new(Collection {
                entities: IndexMap::new(),
                last_id: 0,
            })),
        }
    }

    /// Create a repository pre-filled with `entities`
    pub fn with_entities<I>(entities: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let repository = Self::new();
        for entity in entities {
            repository.add(Some(entity))?;
        }
        Ok(repository)
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Collection<T>>> {
        self.collection
            .read()
            .map_err(|e| RepositoryError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Collection<T>>> {
        self.collection
            .write()
            .map_err(|e| RepositoryError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
        }
    }
}

impl<T: Entity> QueryableStore<T> for InMemoryRepository<T> {
    fn snapshot(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.read()?.entities.values().cloned().collect())
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&self, entity: Option<T>) -> RepositoryResult<T> {
        let mut entity = entity.ok_or_else(|| RepositoryError::argument_null("entity"))?;
        let mut collection = self.write()?;

        if entity.has_identity() {
            collection.last_id = collection.last_id.max(entity.id());
        } else {
            collection.last_id = collection
                .last_id
                .checked_add(1)
                .ok_or_else(|| RepositoryError::storage("identity sequence exhausted"))?;
            entity.set_id(collection.last_id);
        }

        collection.entities.insert(entity.id(), entity.clone());

        tracing::debug!(entity = T::resource_name_singular(), id = entity.id(), "entity added");
        Ok(entity)
    }

    fn update(&self, entity: Option<T>) -> RepositoryResult<T> {
        let entity = entity.ok_or_else(|| RepositoryError::argument_null("entity"))?;
        let mut collection = self.write()?;

        let stored = collection
            .entities
            .get_mut(&entity.id())
            .ok_or_else(|| RepositoryError::not_found(T::resource_name_singular(), entity.id()))?;
        *stored = entity.clone();

        tracing::debug!(entity = T::resource_name_singular(), id = entity.id(), "entity updated");
        Ok(entity)
    }

    fn remove(&self, entity: Option<&T>) -> RepositoryResult<()> {
        let entity = entity.ok_or_else(|| RepositoryError::argument_null("entity"))?;
        let mut collection = self.write()?;

        // shift_remove keeps the insertion order of the remaining entities
        let removed = collection.entities.shift_remove(&entity.id()).is_some();

        tracing::debug!(
            entity = T::resource_name_singular(),
            id = entity.id(),
            removed,
            "entity removed"
        );
        Ok(())
    }

    fn get(&self, id: EntityId) -> RepositoryResult<T> {
        self.read()?
            .entities
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(T::resource_name_singular(), id))
    }

    fn get_all(&self) -> RepositoryResult<Vec<T>> {
        self.snapshot()
    }

    fn count_all(&self) -> RepositoryResult<usize> {
        Ok(self.read()?.entities.len())
    }

    fn query(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>> {
        let data = self.execute(filter, paging, sort)?;

        tracing::trace!(
            entity = T::resource_name(),
            filtered = filter.is_some(),
            sorted = sort.is_some(),
            paged = paging.is_some(),
            returned = data.len(),
            "query executed"
        );
        Ok(data)
    }

    // Counts under the read lock without cloning the matches
    fn count(&self, filter: Option<&FilterSpecification<T>>) -> RepositoryResult<usize> {
        let collection = self.read()?;
        Ok(collection
            .entities
            .values()
            .filter(|entity| filter.is_none_or(|f| f.is_satisfied_by(entity)))
            .count())
    }

    // Total and page come from the same snapshot, so concurrent writes
    // cannot make them disagree
    fn query_page(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<PagedResult<T>> {
        let mut data = self.snapshot()?;
        if let Some(filter) = filter {
            data = self.apply_filter(data, filter);
        }
        let total = data.len();

        if let Some(sort) = sort {
            data = self.apply_sort(data, sort);
        }
        if let Some(paging) = paging {
            data = self.apply_paging(data, paging);
        }
        Ok(PagedResult::new(data, paging, total))
    }
}

#[async_trait]
impl<T: Entity> AsyncRepository<T> for InMemoryRepository<T> {
    async fn add_async(&self, entity: Option<T>) -> RepositoryResult<T> {
        self.add(entity)
    }

    async fn update_async(&self, entity: Option<T>) -> RepositoryResult<T> {
        self.update(entity)
    }

    async fn remove_async(&self, entity: Option<&T>) -> RepositoryResult<()> {
        self.remove(entity)
    }

    async fn get_async(&self, id: EntityId) -> RepositoryResult<T> {
        self.get(id)
    }

    async fn get_all_async(&self) -> RepositoryResult<Vec<T>> {
        self.get_all()
    }

    async fn count_all_async(&self) -> RepositoryResult<usize> {
        self.count_all()
    }

    async fn query_async(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>> {
        self.query(filter, paging, sort)
    }

    async fn count_async(&self, filter: Option<&FilterSpecification<T>>) -> RepositoryResult<usize> {
        self.count(filter)
    }

    async fn query_page_async(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<PagedResult<T>> {
        self.query_page(filter, paging, sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::OrderKey;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: EntityId,
        title: String,
        stars: u32,
    }

    impl Note {
        fn new(title: &str, stars: u32) -> Self {
            Self {
                id: 0,
                title: title.to_string(),
                stars,
            }
        }
    }

    impl Entity for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn resource_name_singular() -> &'static str {
            "note"
        }

        fn id(&self) -> EntityId {
            self.id
        }

        fn set_id(&mut self, id: EntityId) {
            self.id = id;
        }
    }

    fn seeded() -> InMemoryRepository<Note> {
        InMemoryRepository::with_entities(vec![
            Note::new("gamma", 2),
            Note::new("alpha", 5),
            Note::new("beta", 2),
            Note::new("delta", 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let repository = InMemoryRepository::new();
        let first = repository.add(Some(Note::new("a", 0))).unwrap();
        let second = repository.add(Some(Note::new("b", 0))).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_add_keeps_explicit_ids_and_advances_sequence() {
        let repository = InMemoryRepository::new();
        let mut explicit = Note::new("explicit", 0);
        explicit.id = 10;

        repository.add(Some(explicit)).unwrap();
        let next = repository.add(Some(Note::new("next", 0))).unwrap();

        assert_eq!(next.id, 11);
        assert_eq!(repository.get(10).unwrap().title, "explicit");
    }

    #[test]
    fn test_add_after_max_id_fails_without_wrapping() {
        let repository = InMemoryRepository::new();
        let mut last = Note::new("last", 0);
        last.id = EntityId::MAX;
        repository.add(Some(last)).unwrap();

        assert_eq!(
            repository.add(Some(Note::new("next", 0))).unwrap_err(),
            RepositoryError::storage("identity sequence exhausted")
        );
        assert_eq!(repository.get(EntityId::MAX).unwrap().title, "last");
    }

    #[test]
    fn test_add_none_is_argument_null() {
        let repository: InMemoryRepository<Note> = InMemoryRepository::new();
        assert_eq!(
            repository.add(None).unwrap_err(),
            RepositoryError::argument_null("entity")
        );
    }

    #[test]
    fn test_update() {
        let repository = seeded();
        let mut note = repository.get(1).unwrap();
        note.stars = 9;

        repository.update(Some(note)).unwrap();
        assert_eq!(repository.get(1).unwrap().stars, 9);

        let mut ghost = Note::new("ghost", 0);
        ghost.id = 99;
        assert!(matches!(
            repository.update(Some(ghost)).unwrap_err(),
            RepositoryError::NotFound { id: 99, .. }
        ));
    }

    #[test]
    fn test_remove_missing_entity_is_noop() {
        let repository = seeded();
        let mut ghost = Note::new("ghost", 0);
        ghost.id = 99;

        repository.remove(Some(&ghost)).unwrap();
        assert_eq!(repository.count_all().unwrap(), 4);
    }

    #[test]
    fn test_query_filters_sorts_and_pages() {
        let repository = seeded();
        let filter = FilterSpecification::new(|n: &Note| n.stars > 0);
        let sort = SortSpecification::new(OrderKey::descending(|n: &Note| n.stars))
            .then(OrderKey::ascending(|n: &Note| n.title.clone()));
        let paging = PagingSpecification::new(0, 20);

        let titles: Vec<String> = repository
            .query(Some(&filter), Some(&paging), Some(&sort))
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();

        assert_eq!(titles, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_count_ignores_paging_and_count_all_ignores_filter() {
        let repository = seeded();
        let filter = FilterSpecification::new(|n: &Note| n.stars == 2);

        assert_eq!(repository.count(Some(&filter)).unwrap(), 2);
        assert_eq!(repository.count(None).unwrap(), 4);
        assert_eq!(repository.count_all().unwrap(), 4);
    }

    #[test]
    fn test_query_page_reports_filtered_total() {
        let repository = seeded();
        let filter = FilterSpecification::new(|n: &Note| n.stars > 0);
        let paging = PagingSpecification::new(0, 2);

        let page = repository.query_page(Some(&filter), Some(&paging), None).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_next);
    }

    #[test]
    fn test_query_page_total_matches_data_under_concurrent_adds() {
        let repository = seeded();
        let writer = repository.clone();

        std::thread::scope(|scope| {
            scope.spawn(move || {
                for i in 0..2000 {
                    writer.add(Some(Note::new("w", i % 3))).unwrap();
                }
            });

            for _ in 0..200 {
                let page = repository.query_page(None, None, None).unwrap();
                assert_eq!(page.pagination.total, page.data.len());
            }
        });

        assert_eq!(repository.count_all().unwrap(), 2004);
    }

    #[test]
    fn test_clones_share_the_collection() {
        let repository = seeded();
        let other = repository.clone();
        other.add(Some(Note::new("epsilon", 1))).unwrap();

        assert_eq!(repository.count_all().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_async_variants_match_sync_semantics() {
        let repository = seeded();

        let added = repository.add_async(Some(Note::new("zeta", 3))).await.unwrap();
        assert_eq!(repository.get_async(added.id).await.unwrap(), added);

        assert!(matches!(
            repository.get_async(1000).await.unwrap_err(),
            RepositoryError::NotFound { .. }
        ));
        assert_eq!(
            repository.remove_range_async(None).await.unwrap_err(),
            RepositoryError::argument_null("entities")
        );

        let filter = FilterSpecification::new(|n: &Note| n.stars >= 3);
        assert!(repository.exists_async(&filter).await.unwrap());
        assert_eq!(repository.count_all_async().await.unwrap(), 5);
    }
}
