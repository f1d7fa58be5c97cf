//! Tag management
//!
//! Deleting a tag strips it from the posts listed in its `post_ids`.

use crate::config::QuillConfig;
use crate::core::entity::EntityId;
use crate::core::error::{ConflictError, QuillResult};
use crate::core::field::FieldChecks;
use crate::core::filter::FilterSpecification;
use crate::core::query::{PageRequest, PagedResult};
use crate::core::repository::AsyncRepository;
use crate::core::sort::SortDirection;
use crate::entities::{Post, Tag};
use crate::repositories::TagRepositoryExtAsync;
use crate::services::{ensure_valid, find_related};
use crate::specifications::tag;
use std::sync::Arc;

pub struct TagService<R, P> {
    tags: Arc<R>,
    posts: Arc<P>,
    config: Arc<QuillConfig>,
}

impl<R, P> TagService<R, P>
where
    R: AsyncRepository<Tag>,
    P: AsyncRepository<Post>,
{
    pub fn new(tags: Arc<R>, posts: Arc<P>, config: Arc<QuillConfig>) -> Self {
        Self { tags, posts, config }
    }

    pub async fn create(&self, name: &str) -> QuillResult<Tag> {
        let name = name.trim();
        let mut checks = FieldChecks::new();
        checks
            .required("name", name)
            .max_length("name", name, self.config.validation.max_name_length);
        ensure_valid(checks)?;

        if self.tags.name_already_exists_async(Some(name)).await? {
            return Err(ConflictError::new("tag", "name", name).into());
        }

        let tag = self.tags.add_async(Some(Tag::new(name))).await?;
        tracing::info!(id = tag.id, name = %tag.name, "tag created");
        Ok(tag)
    }

    /// Return the stored tag with this name, creating it when missing
    pub async fn find_or_create(&self, name: &str) -> QuillResult<Tag> {
        let filter = tag::name_equals(name.trim());
        let existing = self.tags.query_async(Some(&filter), None, None).await?;
        match existing.into_iter().next() {
            Some(tag) => Ok(tag),
            None => self.create(name).await,
        }
    }

    pub async fn get(&self, id: EntityId) -> QuillResult<Tag> {
        Ok(self.tags.get_async(id).await?)
    }

    pub async fn delete(&self, id: EntityId) -> QuillResult<()> {
        let tag = self.tags.get_async(id).await?;
        self.tags.remove_async(Some(&tag)).await?;

        for post_id in &tag.post_ids {
            if let Some(mut post) = find_related(&*self.posts, *post_id).await? {
                post.tags.retain(|snapshot| snapshot.id != id);
                self.posts.update_async(Some(post)).await?;
            }
        }
        tracing::info!(id, posts = tag.post_ids.len(), "tag deleted");
        Ok(())
    }

    /// Most used tags first, ties broken by name
    ///
    /// `request.direction` applies to the usage count.
    pub async fn list(&self, request: &PageRequest) -> QuillResult<PagedResult<Tag>> {
        let filter = request.search_term().map(tag::name_contains);
        self.list_matching(filter.as_ref(), request).await
    }

    /// Tags no post uses any more
    pub async fn unused(&self, request: &PageRequest) -> QuillResult<PagedResult<Tag>> {
        self.list_matching(Some(&tag::posts_count_at_most(0)), request)
            .await
    }

    async fn list_matching(
        &self,
        filter: Option<&FilterSpecification<Tag>>,
        request: &PageRequest,
    ) -> QuillResult<PagedResult<Tag>> {
        let sort = tag::by_posts_count(request.direction).and(tag::by_name(SortDirection::Ascending));
        let paging = request.to_paging(&self.config.paging);

        Ok(self
            .tags
            .query_page_async(filter, Some(&paging), Some(&sort))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repository::Repository;
    use crate::entities::UserRef;
    use crate::specifications::post;
    use crate::storage::InMemoryRepository;

    fn posts() -> Arc<InMemoryRepository<Post>> {
        Arc::new(InMemoryRepository::new())
    }

    fn tag_with_posts(name: &str, posts: usize) -> Tag {
        let mut tag = Tag::new(name);
        tag.post_ids = (1..=posts as i64).collect();
        tag
    }

    #[tokio::test]
    async fn test_find_or_create_reuses_existing() {
        let service = TagService::new(
            Arc::new(InMemoryRepository::new()),
            posts(),
            Arc::new(QuillConfig::default()),
        );

        let first = service.find_or_create("rust").await.unwrap();
        let second = service.find_or_create(" rust").await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.create("rust").await.unwrap_err().error_code(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_list_most_used_first() {
        let repository = Arc::new(
            InMemoryRepository::with_entities(vec![
                tag_with_posts("web", 2),
                tag_with_posts("cli", 5),
                tag_with_posts("api", 2),
                tag_with_posts("old", 0),
            ])
            .unwrap(),
        );
        let service = TagService::new(
            Arc::clone(&repository),
            posts(),
            Arc::new(QuillConfig::default()),
        );

        let request = PageRequest::default().with_direction(SortDirection::Descending);
        let names: Vec<String> = service
            .list(&request)
            .await
            .unwrap()
            .data
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["cli", "api", "web", "old"]);

        let unused = service.unused(&PageRequest::default()).await.unwrap();
        assert_eq!(unused.pagination.total, 1);
        assert_eq!(unused.data[0].name, "old");

        service.delete(unused.data[0].id).await.unwrap();
        assert_eq!(repository.count_all().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_strips_tag_from_posts() {
        let tags =
            Arc::new(InMemoryRepository::with_entities(vec![tag_with_posts("rust", 1)]).unwrap());
        let rust = tags.get(1).unwrap().to_ref();
        let posts = Arc::new(
            InMemoryRepository::with_entities(vec![
                Post::new("Hello", "body", UserRef::new(1, "alice")).with_tag(rust),
            ])
            .unwrap(),
        );
        let service = TagService::new(tags, Arc::clone(&posts), Arc::new(QuillConfig::default()));
        assert_eq!(posts.count(Some(&post::has_tag("rust"))).unwrap(), 1);

        service.delete(1).await.unwrap();

        assert_eq!(posts.count(Some(&post::has_tag("rust"))).unwrap(), 0);
        assert!(posts.get(1).unwrap().tags.is_empty());
    }
}
