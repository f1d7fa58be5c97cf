//! Shared test harness for repository implementations
//!
//! Provides `Article`, a small entity with a text field, a count and an
//! optional relation snapshot, plus helpers for building test data. The
//! `repository_tests!` macro generates the contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//! use repository_harness::*;
//!
//! repository_tests!(InMemoryRepository::<Article>::new());
//! ```

#![allow(dead_code)]

#[macro_use]
mod repository_tests;

use quill::core::entity::EntityId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Article, the entity every contract test runs against
// ---------------------------------------------------------------------------

/// A test entity covering the key shapes the sort and filter stages see.
///
/// Fields:
/// - `title`: String (ordinal ordering, substring matching)
/// - `likes`: usize (related-collection size)
/// - `category`: Option<String> (possibly absent relation)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: EntityId,
    pub title: String,
    pub likes: usize,
    pub category: Option<String>,
}

quill::impl_entity!(Article, "article", "articles");

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Create an `Article` without identity, so the store assigns one
pub fn article(title: &str, likes: usize) -> Article {
    Article {
        id: 0,
        title: title.to_string(),
        likes,
        category: None,
    }
}

/// Create an `Article` with a specific identity for deterministic testing
pub fn article_with_id(id: EntityId, title: &str, likes: usize) -> Article {
    Article {
        id,
        ..article(title, likes)
    }
}

/// Generate `n` articles with distinct titles and likes cycling through 0..5
pub fn sample_batch(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| article(&format!("article_{:02}", i), i % 5))
        .collect()
}

/// Titles of a result list, in order
pub fn titles(list: &[Article]) -> Vec<String> {
    list.iter().map(|a| a.title.clone()).collect()
}

/// Assert that a list contains exactly `n` entities.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
