//! Store traits for filtering, sorting and paging

use crate::core::error::RepositoryResult;
use crate::core::filter::FilterSpecification;
use crate::core::paging::PagingSpecification;
use crate::core::sort::SortSpecification;

/// Trait for stores that can execute the filter → sort → page pipeline
///
/// A store only has to expose a snapshot of its entities; the default
/// stages evaluate everything in process. Backends able to push a stage
/// down to the underlying engine override that stage.
pub trait QueryableStore<T>: Send + Sync {
    /// Get all entities (unfiltered, unsorted)
    fn snapshot(&self) -> RepositoryResult<Vec<T>>;

    /// Keep the entities satisfying `filter`
    fn apply_filter(&self, data: Vec<T>, filter: &FilterSpecification<T>) -> Vec<T> {
        data.into_iter()
            .filter(|entity| filter.is_satisfied_by(entity))
            .collect()
    }

    /// Order the entities by `sort` (stable)
    fn apply_sort(&self, mut data: Vec<T>, sort: &SortSpecification<T>) -> Vec<T> {
        sort.sort(&mut data);
        data
    }

    /// Cut the `paging` window out of the entities
    fn apply_paging(&self, data: Vec<T>, paging: &PagingSpecification) -> Vec<T> {
        paging.apply(data)
    }

    /// Run the full pipeline in its fixed order: filter, then sort, then page
    ///
    /// Every stage is optional; a missing stage passes its input through.
    fn execute(
        &self,
        filter: Option<&FilterSpecification<T>>,
        paging: Option<&PagingSpecification>,
        sort: Option<&SortSpecification<T>>,
    ) -> RepositoryResult<Vec<T>> {
        let mut data = self.snapshot()?;

        if let Some(filter) = filter {
            data = self.apply_filter(data, filter);
        }
        if let Some(sort) = sort {
            data = self.apply_sort(data, sort);
        }
        if let Some(paging) = paging {
            data = self.apply_paging(data, paging);
        }

        Ok(data)
    }
}
