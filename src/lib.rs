//! # Quill
//!
//! A specification-based query engine for a content backend (posts, comments,
//! likes, categories, tags, users and roles).
//!
//! ## Features
//!
//! - **Composable filters**: predicates built independently and AND-ed (or
//!   OR-ed, negated) generically with short-circuit evaluation
//! - **Multi-key sorting**: priority-ordered keys with deterministic
//!   tie-breaking and a stable sort
//! - **Clamping pagination**: skip/take windows that never fail and never pad
//! - **Generic repositories**: one CRUD + query contract for every entity type,
//!   sync and async, with existence checks layered on top
//! - **Services**: validation, uniqueness and page-number translation for each
//!   content type
//! - **Configuration-Based**: page sizes, field limits and logging via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill::prelude::*;
//! use quill::specifications::post;
//!
//! let posts = InMemoryRepository::<Post>::new();
//!
//! let filter = post::has_tag("rust").and(post::likes_count_at_least(10));
//! let sort = post::by_likes_count(SortDirection::Descending)
//!     .and(post::by_title(SortDirection::Ascending));
//! let paging = PagingSpecification::new(0, 20);
//!
//! // Filter, then sort, then page
//! let top = posts.query(Some(&filter), Some(&paging), Some(&sort))?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod repositories;
pub mod services;
pub mod specifications;
pub mod storage;

#[cfg(test)]
mod testing;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Specifications ===
    pub use crate::core::{
        filter::FilterSpecification,
        paging::PagingSpecification,
        sort::{OrderKey, SortDirection, SortSpecification},
    };

    // === Repository contract ===
    pub use crate::core::{
        entity::{Entity, EntityId},
        query::{PageRequest, PagedResult, PaginationMeta},
        repository::{AsyncRepository, Repository},
        store::QueryableStore,
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ConflictError, FieldValidationError, QuillError, QuillResult,
        RepositoryError, RepositoryResult, ValidationError,
    };

    // === Validation ===
    pub use crate::core::field::{FieldChecks, FieldFormat};

    // === Macros ===
    pub use crate::impl_entity;

    // === Entities ===
    pub use crate::entities::{
        Category, Comment, EntityRef, Like, LikeKind, LikeTarget, Permission, Post, Role, Tag,
        User, UserRef,
    };

    // === Existence checks ===
    pub use crate::repositories::{
        CategoryRepositoryExt, CategoryRepositoryExtAsync, LikeRepositoryExt,
        LikeRepositoryExtAsync, RoleRepositoryExt, RoleRepositoryExtAsync, TagRepositoryExt,
        TagRepositoryExtAsync, UserRepositoryExt, UserRepositoryExtAsync,
    };

    // === Services ===
    pub use crate::services::{
        CategoryService, CommentService, LikeService, NewPost, NewUser, PostService, TagService,
        UserService,
    };

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::{LoggingConfig, PagingConfig, QuillConfig, ValidationConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
}
