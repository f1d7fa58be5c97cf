//! Like existence checks

use crate::core::entity::EntityId;
use crate::core::error::RepositoryResult;
use crate::core::repository::{AsyncRepository, Repository};
use crate::entities::{Like, LikeTarget};
use crate::specifications::like;
use async_trait::async_trait;

pub trait LikeRepositoryExt {
    /// Whether this user already liked this post or comment
    fn like_already_exists(&self, user_id: EntityId, target: LikeTarget)
    -> RepositoryResult<bool>;
}

impl<R: Repository<Like> + ?Sized> LikeRepositoryExt for R {
    fn like_already_exists(
        &self,
        user_id: EntityId,
        target: LikeTarget,
    ) -> RepositoryResult<bool> {
        self.exists(&like::user_id_equals(user_id).and(like::target_equals(target)))
    }
}

#[async_trait]
pub trait LikeRepositoryExtAsync {
    async fn like_already_exists_async(
        &self,
        user_id: EntityId,
        target: LikeTarget,
    ) -> RepositoryResult<bool>;
}

#[async_trait]
impl<R: AsyncRepository<Like> + ?Sized> LikeRepositoryExtAsync for R {
    async fn like_already_exists_async(
        &self,
        user_id: EntityId,
        target: LikeTarget,
    ) -> RepositoryResult<bool> {
        let filter = like::user_id_equals(user_id).and(like::target_equals(target));
        self.exists_async(&filter).await
    }
}
