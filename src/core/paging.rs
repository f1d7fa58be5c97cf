//! Skip/take paging windows

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A skip/take window applied after filtering and sorting
///
/// Construction never validates; out-of-range values are clamped when the
/// window is applied:
/// - `skip < 0` behaves like `skip = 0`
/// - `skip >= total` yields nothing
/// - `take <= 0` yields nothing, whatever `skip` is
/// - `take` past the end returns all remaining items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PagingSpecification {
    skip: i64,
    take: i64,
}

impl PagingSpecification {
    pub fn new(skip: i64, take: i64) -> Self {
        Self { skip, take }
    }

    /// Window for a 1-based page number
    ///
    /// Pages below 1 are treated as page 1.
    pub fn page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        Self::new((page - 1).saturating_mul(page_size.max(0)), page_size)
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn take(&self) -> i64 {
        self.take
    }

    /// Index range selected out of `total` items
    ///
    /// Always within `0..=total`; an empty range means an empty page.
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.take <= 0 {
            return 0..0;
        }

        let start = usize::try_from(self.skip.max(0)).unwrap_or(usize::MAX);
        if start >= total {
            return 0..0;
        }

        let take = usize::try_from(self.take).unwrap_or(usize::MAX);
        start..start.saturating_add(take).min(total)
    }

    /// Keep only the items inside the window
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let window = self.window(items.len());
        if window.is_empty() {
            return Vec::new();
        }

        items.truncate(window.end);
        items.drain(..window.start);
        items
    }
}
