//! Existence checks layered on the generic repository contract
//!
//! Each entity gets an extension trait with a blanket implementation over
//! any [`Repository`](crate::core::repository::Repository) of that entity, plus
//! an async twin over
//! [`AsyncRepository`](crate::core::repository::AsyncRepository). The checks
//! compose the matching specification leaf with `exists`; an absent
//! value answers `false` without touching the store.
//!
//! ```rust,ignore
//! use quill::repositories::UserRepositoryExt;
//!
//! if users.username_already_exists(Some("alice"))? {
//!     // reject the sign-up
//! }
//! ```

pub mod category;
pub mod like;
pub mod role;
pub mod tag;
pub mod user;

pub use category::{CategoryRepositoryExt, CategoryRepositoryExtAsync};
pub use like::{LikeRepositoryExt, LikeRepositoryExtAsync};
pub use role::{RoleRepositoryExt, RoleRepositoryExtAsync};
pub use tag::{TagRepositoryExt, TagRepositoryExtAsync};
pub use user::{UserRepositoryExt, UserRepositoryExtAsync};
