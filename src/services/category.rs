//! Category management
//!
//! Posts carry a snapshot of their category, so renaming or deleting a
//! category rewrites the posts listed in its `post_ids`.

use crate::config::QuillConfig;
use crate::core::entity::EntityId;
use crate::core::error::{ConflictError, QuillResult};
use crate::core::field::FieldChecks;
use crate::core::query::{PageRequest, PagedResult};
use crate::core::repository::AsyncRepository;
use crate::entities::{Category, Post};
use crate::repositories::CategoryRepositoryExtAsync;
use crate::services::{ensure_valid, find_related};
use crate::specifications::category;
use std::sync::Arc;

pub struct CategoryService<R, P> {
    categories: Arc<R>,
    posts: Arc<P>,
    config: Arc<QuillConfig>,
}

impl<R, P> CategoryService<R, P>
where
    R: AsyncRepository<Category>,
    P: AsyncRepository<Post>,
{
    pub fn new(categories: Arc<R>, posts: Arc<P>, config: Arc<QuillConfig>) -> Self {
        Self {
            categories,
            posts,
            config,
        }
    }

    fn check_name(&self, name: &str) -> QuillResult<()> {
        let mut checks = FieldChecks::new();
        checks
            .required("name", name)
            .max_length("name", name, self.config.validation.max_name_length);
        ensure_valid(checks)
    }

    /// Create a category; names are unique
    pub async fn create(&self, name: &str) -> QuillResult<Category> {
        let name = name.trim();
        self.check_name(name)?;

        if self.categories.name_already_exists_async(Some(name)).await? {
            return Err(ConflictError::new("category", "name", name).into());
        }

        let category = self.categories.add_async(Some(Category::new(name))).await?;
        tracing::info!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn get(&self, id: EntityId) -> QuillResult<Category> {
        Ok(self.categories.get_async(id).await?)
    }

    /// Rename a category, keeping names unique
    pub async fn rename(&self, id: EntityId, name: &str) -> QuillResult<Category> {
        let name = name.trim();
        self.check_name(name)?;

        let mut category = self.categories.get_async(id).await?;
        if category.name == name {
            return Ok(category);
        }
        if self.categories.name_already_exists_async(Some(name)).await? {
            return Err(ConflictError::new("category", "name", name).into());
        }

        category.name = name.to_string();
        let category = self.categories.update_async(Some(category)).await?;

        let snapshot = category.to_ref();
        for post_id in &category.post_ids {
            if let Some(mut post) = find_related(&*self.posts, *post_id).await? {
                post.category = Some(snapshot.clone());
                self.posts.update_async(Some(post)).await?;
            }
        }
        Ok(category)
    }

    /// Delete a category; its posts become uncategorized
    pub async fn delete(&self, id: EntityId) -> QuillResult<()> {
        let category = self.categories.get_async(id).await?;
        self.categories.remove_async(Some(&category)).await?;

        for post_id in &category.post_ids {
            if let Some(mut post) = find_related(&*self.posts, *post_id).await? {
                post.category_id = None;
                post.category = None;
                self.posts.update_async(Some(post)).await?;
            }
        }
        tracing::info!(id, posts = category.post_ids.len(), "category deleted");
        Ok(())
    }

    /// Categories sorted by name; the search term matches part of the name
    pub async fn list(&self, request: &PageRequest) -> QuillResult<PagedResult<Category>> {
        let filter = request.search_term().map(category::name_contains);
        let sort = category::by_name(request.direction);
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .categories
            .query_page_async(filter.as_ref(), Some(&paging), Some(&sort))
            .await?)
    }
}
