//! Likes on posts and comments

use crate::core::entity::EntityId;
use crate::core::error::{ConflictError, QuillResult};
use crate::core::repository::AsyncRepository;
use crate::core::sort::SortDirection;
use crate::entities::{Comment, Like, LikeTarget, Post, UserRef};
use crate::repositories::LikeRepositoryExtAsync;
use crate::services::find_related;
use crate::specifications::like;
use std::sync::Arc;

/// Keeps each liked post or comment's like list in step with the stored likes
pub struct LikeService<L, P, C> {
    likes: Arc<L>,
    posts: Arc<P>,
    comments: Arc<C>,
}

impl<L, P, C> LikeService<L, P, C>
where
    L: AsyncRepository<Like>,
    P: AsyncRepository<Post>,
    C: AsyncRepository<Comment>,
{
    pub fn new(likes: Arc<L>, posts: Arc<P>, comments: Arc<C>) -> Self {
        Self {
            likes,
            posts,
            comments,
        }
    }

    /// Like a post or comment once per user
    pub async fn like(&self, user: UserRef, target: LikeTarget) -> QuillResult<Like> {
        if self.likes.like_already_exists_async(user.id, target).await? {
            let value = format!("{} {}", target.kind(), target.id());
            return Err(ConflictError::new("like", "target", value).into());
        }

        // Resolve the target first so a dangling like is never stored
        let like = match target {
            LikeTarget::Post(id) => {
                let mut post = self.posts.get_async(id).await?;
                let like = self.likes.add_async(Some(Like::new(user, target))).await?;
                post.like_ids.push(like.id);
                self.posts.update_async(Some(post)).await?;
                like
            }
            LikeTarget::Comment(id) => {
                let mut comment = self.comments.get_async(id).await?;
                let like = self.likes.add_async(Some(Like::new(user, target))).await?;
                comment.like_ids.push(like.id);
                self.comments.update_async(Some(comment)).await?;
                like
            }
        };

        tracing::debug!(id = like.id, user_id = like.user_id, kind = %target.kind(), "liked");
        Ok(like)
    }

    /// Withdraw a like; returns whether there was one
    pub async fn unlike(&self, user_id: EntityId, target: LikeTarget) -> QuillResult<bool> {
        let filter = like::user_id_equals(user_id).and(like::target_equals(target));
        let existing = self.likes.query_async(Some(&filter), None, None).await?;
        if existing.is_empty() {
            return Ok(false);
        }
        self.likes.remove_range_async(Some(&existing)).await?;

        let removed: Vec<EntityId> = existing.iter().map(|l| l.id).collect();
        match target {
            LikeTarget::Post(id) => {
                if let Some(mut post) = find_related(&*self.posts, id).await? {
                    post.like_ids.retain(|like_id| !removed.contains(like_id));
                    self.posts.update_async(Some(post)).await?;
                }
            }
            LikeTarget::Comment(id) => {
                if let Some(mut comment) = find_related(&*self.comments, id).await? {
                    comment.like_ids.retain(|like_id| !removed.contains(like_id));
                    self.comments.update_async(Some(comment)).await?;
                }
            }
        }
        Ok(true)
    }

    /// Number of likes on one post or comment
    pub async fn count_for(&self, target: LikeTarget) -> QuillResult<usize> {
        Ok(self
            .likes
            .count_async(Some(&like::target_equals(target)))
            .await?)
    }

    /// Everything a user liked, of either kind
    pub async fn liked_by(&self, user_id: EntityId) -> QuillResult<Vec<Like>> {
        let sort = like::by_created_at(SortDirection::Descending);
        Ok(self
            .likes
            .query_async(Some(&like::user_id_equals(user_id)), None, Some(&sort))
            .await?)
    }
}
