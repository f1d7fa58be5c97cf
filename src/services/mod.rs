//! Calling services for each content type
//!
//! Services sit between request handling and the repositories: they check
//! business rules before anything is added (non-empty fields, configured
//! maximum lengths, username/email formats, uniqueness), translate page
//! requests into a [`PagingSpecification`](crate::core::paging::PagingSpecification)
//! and assemble the filter and sort specifications for each listing.
//!
//! Every service holds its repositories behind an `Arc` and works against
//! [`AsyncRepository`](crate::core::repository::AsyncRepository), so any
//! store implementing the contract can back it.

pub mod category;
pub mod comment;
pub mod like;
pub mod post;
pub mod tag;
pub mod user;

pub use category::CategoryService;
pub use comment::CommentService;
pub use like::LikeService;
pub use post::{NewPost, PostService};
pub use tag::TagService;
pub use user::{NewUser, UserService};

use crate::core::entity::{Entity, EntityId};
use crate::core::error::{QuillResult, RepositoryError, ValidationError};
use crate::core::field::FieldChecks;
use crate::core::repository::AsyncRepository;

/// Turn the collected field errors into a validation failure, if any
pub(crate) fn ensure_valid(checks: FieldChecks) -> QuillResult<()> {
    match ValidationError::from_fields(checks.into_errors()) {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Load the other side of a relation
///
/// A related entity that is gone yields `None`; every other repository
/// failure is returned.
pub(crate) async fn find_related<E, R>(repository: &R, id: EntityId) -> QuillResult<Option<E>>
where
    E: Entity,
    R: AsyncRepository<E> + ?Sized,
{
    match repository.get_async(id).await {
        Ok(entity) => Ok(Some(entity)),
        Err(RepositoryError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
