//! Page requests and paged results

use crate::config::PagingConfig;
use crate::core::paging::PagingSpecification;
use crate::core::sort::SortDirection;
use serde::{Deserialize, Serialize};

/// Page-number request made by calling services
///
/// Services translate it into a [`PagingSpecification`]. All fields have
/// sensible defaults.
///
/// # Example
/// ```rust,ignore
/// let request = PageRequest { page: 2, limit: 10, ..Default::default() };
/// let paging = request.to_paging(&config.paging);
/// assert_eq!(paging, PagingSpecification::new(10, 10));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PageRequest {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page; `0` means "use the configured default"
    pub limit: usize,

    /// Free-text search term, interpreted by each service
    pub search: Option<String>,

    /// Sort direction for the service's primary key
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 0,
            search: None,
            direction: SortDirection::default(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, falling back to the default and capped at the maximum
    pub fn limit(&self, config: &PagingConfig) -> usize {
        if self.limit == 0 {
            config.default_page_size
        } else {
            self.limit.clamp(1, config.max_page_size)
        }
    }

    /// Search term with surrounding whitespace removed; blank means none
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Translate into a skip/take window
    pub fn to_paging(&self, config: &PagingConfig) -> PagingSpecification {
        let limit = i64::try_from(self.limit(config)).unwrap_or(i64::MAX);
        let page = i64::try_from(self.page()).unwrap_or(i64::MAX);
        PagingSpecification::page(page, limit)
    }
}

/// Paged result structure
///
/// Wraps a page of entities with metadata about the whole filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    /// The entities of this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PagedResult<T> {
    pub fn new(data: Vec<T>, paging: Option<&PagingSpecification>, total: usize) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(paging, total),
        }
    }

    /// Transform the entities, keeping the metadata
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Items skipped before this page (after clamping)
    pub skip: usize,

    /// Requested page size (after clamping; `0` for an empty window)
    pub take: usize,

    /// Current page number (starts at 1)
    pub page: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Derive metadata from the paging window and the filtered total
    ///
    /// Without paging the whole set is a single page.
    pub fn new(paging: Option<&PagingSpecification>, total: usize) -> Self {
        let Some(paging) = paging else {
            return Self {
                skip: 0,
                take: total,
                page: 1,
                total,
                total_pages: usize::from(total > 0),
                has_next: false,
                has_prev: false,
            };
        };

        let skip = usize::try_from(paging.skip().max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(paging.take().max(0)).unwrap_or(usize::MAX);
        if take == 0 {
            return Self {
                skip,
                take,
                page: 1,
                total,
                total_pages: 0,
                has_next: false,
                has_prev: skip > 0,
            };
        }

        Self {
            skip,
            take,
            page: skip / take + 1,
            total,
            total_pages: total.div_ceil(take),
            has_next: skip.saturating_add(take) < total,
            has_prev: skip > 0,
        }
    }
}
