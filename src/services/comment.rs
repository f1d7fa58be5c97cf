//! Comment threads under posts

use crate::config::QuillConfig;
use crate::core::entity::EntityId;
use crate::core::error::QuillResult;
use crate::core::field::FieldChecks;
use crate::core::query::{PageRequest, PagedResult};
use crate::core::repository::AsyncRepository;
use crate::core::sort::SortDirection;
use crate::entities::{Comment, Post, UserRef};
use crate::services::{ensure_valid, find_related};
use crate::specifications::{self, comment};
use chrono::Utc;
use std::sync::Arc;

pub struct CommentService<C, P> {
    comments: Arc<C>,
    posts: Arc<P>,
    config: Arc<QuillConfig>,
}

impl<C, P> CommentService<C, P>
where
    C: AsyncRepository<Comment>,
    P: AsyncRepository<Post>,
{
    pub fn new(comments: Arc<C>, posts: Arc<P>, config: Arc<QuillConfig>) -> Self {
        Self {
            comments,
            posts,
            config,
        }
    }

    fn check_content(&self, content: &str) -> QuillResult<()> {
        let mut checks = FieldChecks::new();
        checks.required("content", content).max_length(
            "content",
            content,
            self.config.validation.max_content_length,
        );
        ensure_valid(checks)
    }

    /// Comment on an existing post
    pub async fn add(
        &self,
        post_id: EntityId,
        author: UserRef,
        content: &str,
    ) -> QuillResult<Comment> {
        self.check_content(content)?;
        let mut post = self.posts.get_async(post_id).await?;

        let comment = self
            .comments
            .add_async(Some(Comment::new(post_id, author, content)))
            .await?;

        post.comment_ids.push(comment.id);
        self.posts.update_async(Some(post)).await?;

        tracing::debug!(id = comment.id, post_id, "comment added");
        Ok(comment)
    }

    pub async fn get(&self, id: EntityId) -> QuillResult<Comment> {
        Ok(self.comments.get_async(id).await?)
    }

    pub async fn edit(&self, id: EntityId, content: &str) -> QuillResult<Comment> {
        self.check_content(content)?;

        let mut comment = self.comments.get_async(id).await?;
        comment.content = content.to_string();
        comment.updated_at = Some(Utc::now());
        Ok(self.comments.update_async(Some(comment)).await?)
    }

    pub async fn delete(&self, id: EntityId) -> QuillResult<()> {
        let comment = self.comments.get_async(id).await?;
        self.comments.remove_async(Some(&comment)).await?;

        if let Some(mut post) = find_related(&*self.posts, comment.post_id).await? {
            post.comment_ids.retain(|&comment_id| comment_id != id);
            self.posts.update_async(Some(post)).await?;
        }
        Ok(())
    }

    /// The thread of one post, oldest first unless the request says otherwise
    pub async fn for_post(
        &self,
        post_id: EntityId,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Comment>> {
        let mut filter = comment::post_id_equals(post_id);
        if let Some(term) = request.search_term() {
            filter = filter.and(comment::content_contains(term));
        }
        let sort = comment::by_created_at(request.direction)
            .and(specifications::by_id(SortDirection::Ascending));
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .comments
            .query_page_async(Some(&filter), Some(&paging), Some(&sort))
            .await?)
    }

    pub async fn by_author(
        &self,
        author_id: EntityId,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Comment>> {
        let filter = comment::author_id_equals(author_id);
        let sort = comment::by_created_at(SortDirection::Descending);
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .comments
            .query_page_async(Some(&filter), Some(&paging), Some(&sort))
            .await?)
    }
}
