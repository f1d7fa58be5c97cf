//! Publishing and browsing posts
//!
//! The post service keeps the reverse side of its relations current: a
//! category or tag lists the ids of the posts filed under it, so publishing
//! and deleting a post update those lists as well.

use crate::config::QuillConfig;
use crate::core::entity::EntityId;
use crate::core::error::QuillResult;
use crate::core::field::FieldChecks;
use crate::core::filter::FilterSpecification;
use crate::core::query::{PageRequest, PagedResult};
use crate::core::repository::AsyncRepository;
use crate::core::sort::{SortDirection, SortSpecification};
use crate::entities::{Category, Post, Tag, UserRef};
use crate::services::{ensure_valid, find_related};
use crate::specifications::post;
use chrono::Utc;
use std::sync::Arc;

/// Publishing input
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: UserRef,
    pub category_id: Option<EntityId>,
    pub tag_ids: Vec<EntityId>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: UserRef) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }

    pub fn in_category(mut self, category_id: EntityId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tagged(mut self, tag_id: EntityId) -> Self {
        self.tag_ids.push(tag_id);
        self
    }
}

pub struct PostService<P, C, T> {
    posts: Arc<P>,
    categories: Arc<C>,
    tags: Arc<T>,
    config: Arc<QuillConfig>,
}

impl<P, C, T> PostService<P, C, T>
where
    P: AsyncRepository<Post>,
    C: AsyncRepository<Category>,
    T: AsyncRepository<Tag>,
{
    pub fn new(posts: Arc<P>, categories: Arc<C>, tags: Arc<T>, config: Arc<QuillConfig>) -> Self {
        Self {
            posts,
            categories,
            tags,
            config,
        }
    }

    fn check_text(&self, title: &str, content: &str) -> QuillResult<()> {
        let limits = &self.config.validation;
        let mut checks = FieldChecks::new();
        checks
            .required("title", title)
            .max_length("title", title, limits.max_title_length)
            .required("content", content)
            .max_length("content", content, limits.max_content_length);
        ensure_valid(checks)
    }

    /// Publish a post under an optional category with optional tags
    ///
    /// Unknown category or tag ids fail with not-found before anything is
    /// stored.
    pub async fn publish(&self, input: NewPost) -> QuillResult<Post> {
        let title = input.title.trim();
        self.check_text(title, &input.content)?;

        let category = match input.category_id {
            Some(id) => Some(self.categories.get_async(id).await?),
            None => None,
        };
        let mut tags = Vec::with_capacity(input.tag_ids.len());
        for id in &input.tag_ids {
            tags.push(self.tags.get_async(*id).await?);
        }

        let mut draft = Post::new(title, input.content.as_str(), input.author);
        if let Some(category) = &category {
            draft = draft.with_category(category.to_ref());
        }
        for tag in &tags {
            draft = draft.with_tag(tag.to_ref());
        }
        let post = self.posts.add_async(Some(draft)).await?;

        if let Some(mut category) = category {
            category.post_ids.push(post.id);
            self.categories.update_async(Some(category)).await?;
        }
        for mut tag in tags {
            tag.post_ids.push(post.id);
            self.tags.update_async(Some(tag)).await?;
        }

        tracing::info!(id = post.id, author_id = post.author_id, "post published");
        Ok(post)
    }

    pub async fn get(&self, id: EntityId) -> QuillResult<Post> {
        Ok(self.posts.get_async(id).await?)
    }

    /// Replace title and content, stamping the edit time
    pub async fn edit(&self, id: EntityId, title: &str, content: &str) -> QuillResult<Post> {
        let title = title.trim();
        self.check_text(title, content)?;

        let mut post = self.posts.get_async(id).await?;
        post.title = title.to_string();
        post.content = content.to_string();
        post.updated_at = Some(Utc::now());
        Ok(self.posts.update_async(Some(post)).await?)
    }

    /// Delete a post and detach it from its category and tags
    pub async fn delete(&self, id: EntityId) -> QuillResult<()> {
        let post = self.posts.get_async(id).await?;
        self.posts.remove_async(Some(&post)).await?;

        if let Some(category_id) = post.category_id {
            if let Some(mut category) = find_related(&*self.categories, category_id).await? {
                category.post_ids.retain(|&post_id| post_id != id);
                self.categories.update_async(Some(category)).await?;
            }
        }
        for tag_ref in &post.tags {
            if let Some(mut tag) = find_related(&*self.tags, tag_ref.id).await? {
                tag.post_ids.retain(|&post_id| post_id != id);
                self.tags.update_async(Some(tag)).await?;
            }
        }

        tracing::info!(id, "post deleted");
        Ok(())
    }

    /// Latest posts first (per `request.direction`), then by title
    ///
    /// The search term matches part of the title or the content.
    pub async fn list(&self, request: &PageRequest) -> QuillResult<PagedResult<Post>> {
        let filter = request
            .search_term()
            .map(|term| post::title_contains(term).or(post::content_contains(term)));
        let sort = post::by_created_at(request.direction)
            .and(post::by_title(SortDirection::Ascending));
        self.search(filter.as_ref(), Some(&sort), request).await
    }

    pub async fn by_tag(&self, tag: &str, request: &PageRequest) -> QuillResult<PagedResult<Post>> {
        let sort = post::by_created_at(SortDirection::Descending);
        self.search(Some(&post::has_tag(tag)), Some(&sort), request)
            .await
    }

    pub async fn by_author(
        &self,
        author_id: EntityId,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Post>> {
        let sort = post::by_created_at(SortDirection::Descending);
        self.search(Some(&post::author_id_equals(author_id)), Some(&sort), request)
            .await
    }

    /// Posts with at least `min_likes` likes, most liked first, then most
    /// discussed, then by title
    pub async fn popular(
        &self,
        min_likes: usize,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Post>> {
        let sort = post::by_likes_count(SortDirection::Descending)
            .and(post::by_comments_count(SortDirection::Descending))
            .and(post::by_title(SortDirection::Ascending));
        self.search(Some(&post::likes_count_at_least(min_likes)), Some(&sort), request)
            .await
    }

    /// Run caller-built specifications with the request's page window
    pub async fn search(
        &self,
        filter: Option<&FilterSpecification<Post>>,
        sort: Option<&SortSpecification<Post>>,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Post>> {
        let paging = request.to_paging(&self.config.paging);
        Ok(self
            .posts
            .query_page_async(filter, Some(&paging), sort)
            .await?)
    }
}
