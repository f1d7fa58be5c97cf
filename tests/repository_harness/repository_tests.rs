//! Macro-generated test suite for `Repository<Article>` contract validation.
//!
//! The `repository_tests!` macro generates a test module that validates any
//! store implementing both `Repository<Article>` and `AsyncRepository<Article>`
//! against the full contract: CRUD, null arguments, the filter → sort → page
//! pipeline, paging clamps, existence checks and concurrent access.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_add_assigns_identity`: stored entity gets a positive, unique id
//! - `test_exhausted_identity_sequence_is_storage_error`
//! - `test_get_just_inserted` / `test_get_missing_is_not_found`
//! - `test_get_all_and_count_all`
//! - `test_update_existing` / `test_update_missing_is_not_found`
//! - `test_remove` / `test_remove_missing_is_noop` / `test_remove_range`
//!
//! ## Null arguments
//! - `test_null_arguments_are_rejected`: add, update, remove, remove_range
//!
//! ## Query pipeline
//! - `test_query_without_specifications`
//! - `test_pipeline_order`: filter, then sort, then page
//! - `test_multi_key_tie_break`
//! - `test_absent_keys_sort_first_ascending`
//! - `test_paging_clamps`: every clamp rule on the filtered, sorted set
//! - `test_count_exists_and_query_page`
//!
//! ## Concurrency
//! - `test_concurrent_adds`: parallel adds through clones of the store

/// Generate a full repository conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `Repository<Article> + AsyncRepository<Article> + Clone + 'static`. It is
/// re-evaluated for each test to ensure isolation.
macro_rules! repository_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use quill::core::error::RepositoryError;
            use quill::core::filter::FilterSpecification;
            use quill::core::paging::PagingSpecification;
            use quill::core::repository::{AsyncRepository, Repository};
            use quill::core::sort::{OrderKey, SortDirection, SortSpecification};

            fn seeded<R: Repository<Article>>(repository: &R, items: Vec<Article>) {
                for item in items {
                    repository.add(Some(item)).unwrap();
                }
            }

            fn popular() -> FilterSpecification<Article> {
                FilterSpecification::new(|a: &Article| a.likes > 0)
            }

            fn by_likes_then_title() -> SortSpecification<Article> {
                SortSpecification::new(OrderKey::descending(|a: &Article| a.likes))
                    .then(OrderKey::ascending(|a: &Article| a.title.clone()))
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[test]
            fn test_add_assigns_identity() {
                let repository = $factory;
                let first = repository.add(Some(article("a", 0))).unwrap();
                let second = repository.add(Some(article("b", 0))).unwrap();

                assert!(first.id > 0);
                assert!(second.id > 0);
                assert_ne!(first.id, second.id);
            }

            #[test]
            fn test_exhausted_identity_sequence_is_storage_error() {
                let repository = $factory;
                repository
                    .add(Some(article_with_id(i64::MAX, "last", 0)))
                    .unwrap();

                let err = repository.add(Some(article("overflow", 0))).unwrap_err();
                assert!(matches!(err, RepositoryError::Storage { .. }));
                assert_eq!(repository.count_all().unwrap(), 1);
            }

            #[test]
            fn test_get_just_inserted() {
                let repository = $factory;
                let stored = repository.add(Some(article("fresh", 3))).unwrap();

                assert_eq!(repository.get(stored.id).unwrap(), stored);
            }

            #[test]
            fn test_get_missing_is_not_found() {
                let repository = $factory;
                seeded(&repository, sample_batch(3));

                let err = repository.get(4242).unwrap_err();
                assert!(matches!(err, RepositoryError::NotFound { id: 4242, .. }));
                assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
            }

            #[test]
            fn test_get_all_and_count_all() {
                let repository = $factory;
                assert_count(&repository.get_all().unwrap(), 0);

                seeded(&repository, sample_batch(5));
                assert_count(&repository.get_all().unwrap(), 5);
                assert_eq!(repository.count_all().unwrap(), 5);
            }

            #[test]
            fn test_update_existing() {
                let repository = $factory;
                let mut stored = repository.add(Some(article("draft", 0))).unwrap();
                stored.title = "final".to_string();

                repository.update(Some(stored.clone())).unwrap();
                assert_eq!(repository.get(stored.id).unwrap().title, "final");
                assert_eq!(repository.count_all().unwrap(), 1);
            }

            #[test]
            fn test_update_missing_is_not_found() {
                let repository = $factory;
                let err = repository
                    .update(Some(article_with_id(77, "ghost", 0)))
                    .unwrap_err();
                assert!(matches!(err, RepositoryError::NotFound { id: 77, .. }));
            }

            #[test]
            fn test_remove() {
                let repository = $factory;
                let stored = repository.add(Some(article("doomed", 0))).unwrap();

                repository.remove(Some(&stored)).unwrap();
                assert!(repository.get(stored.id).is_err());
                assert_eq!(repository.count_all().unwrap(), 0);
            }

            #[test]
            fn test_remove_missing_is_noop() {
                let repository = $factory;
                seeded(&repository, sample_batch(2));

                repository
                    .remove(Some(&article_with_id(999, "ghost", 0)))
                    .unwrap();
                assert_eq!(repository.count_all().unwrap(), 2);
            }

            #[test]
            fn test_remove_range() {
                let repository = $factory;
                seeded(&repository, sample_batch(6));

                let doomed = repository.query(Some(&popular()), None, None).unwrap();
                repository.remove_range(Some(&doomed)).unwrap();

                let left = repository.get_all().unwrap();
                assert!(left.iter().all(|a| a.likes == 0));
                assert_count(&left, 2);

                repository.remove_range(Some(&[])).unwrap();
                assert_eq!(repository.count_all().unwrap(), 2);
            }

            // ==================================================================
            // Null arguments
            // ==================================================================

            #[test]
            fn test_null_arguments_are_rejected() {
                let repository = $factory;

                assert_eq!(
                    repository.add(None).unwrap_err(),
                    RepositoryError::argument_null("entity")
                );
                assert_eq!(
                    repository.update(None).unwrap_err(),
                    RepositoryError::argument_null("entity")
                );
                assert_eq!(
                    repository.remove(None).unwrap_err(),
                    RepositoryError::argument_null("entity")
                );
                assert_eq!(
                    repository.remove_range(None).unwrap_err(),
                    RepositoryError::argument_null("entities")
                );
                assert_eq!(repository.count_all().unwrap(), 0);
            }

            // ==================================================================
            // Query pipeline
            // ==================================================================

            #[test]
            fn test_query_without_specifications() {
                let repository = $factory;
                seeded(&repository, sample_batch(7));

                assert_count(&repository.query(None, None, None).unwrap(), 7);
            }

            #[test]
            fn test_pipeline_order() {
                let repository = $factory;
                seeded(
                    &repository,
                    vec![
                        article("delta", 1),
                        article("alpha", 0),
                        article("charlie", 4),
                        article("bravo", 1),
                        article("echo", 2),
                        article("foxtrot", 0),
                    ],
                );

                let paging = PagingSpecification::new(0, 20);
                let result = repository
                    .query(Some(&popular()), Some(&paging), Some(&by_likes_then_title()))
                    .unwrap();

                assert_eq!(titles(&result), vec!["charlie", "echo", "bravo", "delta"]);

                // Paging applies to the sorted matches, not the raw collection
                let second = PagingSpecification::new(1, 2);
                let result = repository
                    .query(Some(&popular()), Some(&second), Some(&by_likes_then_title()))
                    .unwrap();
                assert_eq!(titles(&result), vec!["echo", "bravo"]);
            }

            #[test]
            fn test_multi_key_tie_break() {
                let repository = $factory;
                seeded(
                    &repository,
                    vec![article("z", 2), article("b", 1), article("a", 1)],
                );

                let sort = SortSpecification::new(OrderKey::ascending(|a: &Article| a.likes))
                    .and(SortSpecification::new(OrderKey::ascending(|a: &Article| {
                        a.title.clone()
                    })));
                let result = repository.query(None, None, Some(&sort)).unwrap();

                let pairs: Vec<(usize, String)> =
                    result.into_iter().map(|a| (a.likes, a.title)).collect();
                assert_eq!(
                    pairs,
                    vec![
                        (1, "a".to_string()),
                        (1, "b".to_string()),
                        (2, "z".to_string())
                    ]
                );
            }

            #[test]
            fn test_absent_keys_sort_first_ascending() {
                let repository = $factory;
                let mut filed = article("filed", 0);
                filed.category = Some("news".to_string());
                seeded(&repository, vec![filed, article("loose", 0)]);

                let key = |direction| {
                    SortSpecification::new(OrderKey::new(
                        |a: &Article| a.category.clone(),
                        direction,
                    ))
                };

                let asc = repository
                    .query(None, None, Some(&key(SortDirection::Ascending)))
                    .unwrap();
                assert_eq!(titles(&asc), vec!["loose", "filed"]);

                let desc = repository
                    .query(None, None, Some(&key(SortDirection::Descending)))
                    .unwrap();
                assert_eq!(titles(&desc), vec!["filed", "loose"]);
            }

            #[test]
            fn test_paging_clamps() {
                let repository = $factory;
                seeded(&repository, sample_batch(10));
                let sort = SortSpecification::new(OrderKey::ascending(|a: &Article| {
                    a.title.clone()
                }));
                let page = |skip, take| {
                    repository
                        .query(None, Some(&PagingSpecification::new(skip, take)), Some(&sort))
                        .unwrap()
                };

                // Negative skip counts as zero
                assert_eq!(titles(&page(-5, 2)), vec!["article_00", "article_01"]);
                // Skip at or past the end
                assert_count(&page(10, 5), 0);
                assert_count(&page(50, 5), 0);
                // Negative or zero take
                assert_count(&page(0, -1), 0);
                assert_count(&page(3, 0), 0);
                // Take past the end returns the remainder
                assert_eq!(titles(&page(8, 100)), vec!["article_08", "article_09"]);
            }

            #[test]
            fn test_count_exists_and_query_page() {
                let repository = $factory;
                seeded(&repository, sample_batch(10));
                let none = FilterSpecification::new(|a: &Article| a.likes > 100);

                assert_eq!(repository.count(Some(&popular())).unwrap(), 8);
                assert!(repository.exists(&popular()).unwrap());
                assert!(!repository.exists(&none).unwrap());

                let paging = PagingSpecification::new(6, 5);
                let page = repository
                    .query_page(Some(&popular()), Some(&paging), Some(&by_likes_then_title()))
                    .unwrap();
                assert_count(&page.data, 2);
                assert_eq!(page.pagination.total, 8);
                assert!(!page.pagination.has_next);
                assert!(page.pagination.has_prev);
            }

            // ==================================================================
            // Async twin and concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_async_twin_rejects_nulls_and_misses() {
                let repository = $factory;

                assert_eq!(
                    repository.add_async(None).await.unwrap_err(),
                    RepositoryError::argument_null("entity")
                );
                assert_eq!(
                    repository.remove_async(None).await.unwrap_err(),
                    RepositoryError::argument_null("entity")
                );
                assert!(matches!(
                    repository.get_async(1).await.unwrap_err(),
                    RepositoryError::NotFound { .. }
                ));
            }

            #[tokio::test]
            async fn test_concurrent_adds() {
                let repository = $factory;

                let adds = (0..16).map(|i| {
                    let repository = repository.clone();
                    tokio::spawn(async move {
                        repository
                            .add_async(Some(article(&format!("concurrent_{}", i), i % 3)))
                            .await
                    })
                });
                let results = tokio::time::timeout(
                    std::time::Duration::from_secs(30),
                    futures::future::join_all(adds),
                )
                .await
                .expect("Concurrent adds timed out after 30s, possible deadlock");

                let mut ids: Vec<_> = results
                    .into_iter()
                    .map(|joined| joined.unwrap().unwrap().id)
                    .collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 16, "Every add should get its own identity");
                assert_eq!(repository.count_all_async().await.unwrap(), 16);
            }
        }
    };
}
