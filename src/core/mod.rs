//! Core module containing the specification algebra and repository contracts

pub mod entity;
pub mod error;
pub mod field;
pub mod filter;
pub mod paging;
pub mod query;
pub mod repository;
pub mod sort;
pub mod store;

pub use entity::{Entity, EntityId};
pub use error::{
    ConfigError, ConflictError, FieldValidationError, QuillError, QuillResult, RepositoryError,
    RepositoryResult, ValidationError,
};
pub use field::{FieldChecks, FieldFormat};
pub use filter::FilterSpecification;
pub use paging::PagingSpecification;
pub use query::{PageRequest, PagedResult, PaginationMeta};
pub use repository::{AsyncRepository, Repository};
pub use sort::{OrderKey, SortDirection, SortSpecification};
pub use store::QueryableStore;
