// src/github/paginate.rs
// =============================================================================
// Collects every starred repository by walking the paginated collection.
//
// How it works:
// 1. Ask for the first `page_size` repositories (no cursor)
// 2. Each page tells us the total size of the collection
// 3. Continue from the cursor of the last edge on the page
// 4. The next request asks for min(page_size, total - collected)
// 5. Stop once we have collected `total` repositories
//
// A page with no edges while repositories are still missing cannot give us
// a cursor to continue from, so it is reported as QueryError::EmptyPage.
// =============================================================================

use crate::error::QueryError;
use crate::github::types::{RepositoryInfo, StarredPage};
use crate::sanitize::clean_description;
use tracing::{debug, warn};

/// GitHub refuses `first:` values above this.
pub const MAX_PAGE_SIZE: u32 = 100;

// Languages kept per repository
const MAX_LANGUAGES: usize = 3;

/// Anything that can serve pages of the viewer's starred repositories.
pub trait StarredSource {
    /// Fetches up to `count` repositories starting after `cursor`
    /// (from the beginning when `cursor` is None).
    async fn fetch_page(&self, count: u32, cursor: Option<&str>) -> Result<StarredPage, QueryError>;
}

/// Fetches the whole starred collection, newest star first.
///
/// Descriptions are cleaned and language lists cut to three entries as each
/// page arrives.
pub async fn fetch_starred_repositories<S: StarredSource>(
    source: &S,
    page_size: u32,
) -> Result<Vec<RepositoryInfo>, QueryError> {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

    let mut repositories: Vec<RepositoryInfo> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut count = page_size;

    loop {
        debug!(count, cursor = cursor.as_deref().unwrap_or("<start>"), "requesting page");
        let page = source.fetch_page(count, cursor.as_deref()).await?;

        let total = page.total_count;
        if page.is_over_limit {
            warn!(total, "starred collection is over the API limit, results may be truncated");
        }

        // Cursor of the last edge, or stop/fail when the page is empty
        let next_cursor = match page.edges.last() {
            Some(edge) => edge.cursor.clone(),
            None if repositories.len() < total => {
                return Err(QueryError::EmptyPage {
                    accumulated: repositories.len(),
                    total,
                });
            }
            None => break,
        };

        for edge in page.edges {
            if repositories.len() >= total {
                break;
            }
            let mut repository = edge.repository;
            repository.description = clean_description(&repository.description);
            repository.languages.truncate(MAX_LANGUAGES);
            repositories.push(repository);
        }

        debug!(total, collected = repositories.len(), "page received");

        if repositories.len() >= total {
            break;
        }

        let remaining = total - repositories.len();
        count = page_size.min(u32::try_from(remaining).unwrap_or(u32::MAX));
        cursor = Some(next_cursor);
    }

    Ok(repositories)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for the source?
//    - The loop only needs "give me a page", not a network client
//    - Tests implement StarredSource on a plain Vec and count the requests
//    - The generic <S: StarredSource> is resolved at compile time (no Box)
//
// 2. Why cursor.as_deref()?
//    - cursor is Option<String> (we own the text between iterations)
//    - fetch_page wants Option<&str> (it only reads it)
//    - as_deref() borrows Option<String> as Option<&str> without cloning
//
// 3. Why match on page.edges.last()?
//    - last() returns None for an empty Vec instead of panicking
//    - So the "empty page" case has to be handled explicitly
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::StarredEdge;
    use std::cell::RefCell;

    fn repository(index: usize) -> RepositoryInfo {
        RepositoryInfo {
            name: format!("repo-{index}"),
            name_with_owner: format!("owner/repo-{index}"),
            description: format!("Repository number {index}"),
            url: format!("https://github.com/owner/repo-{index}"),
            stargazer_count: index as u64,
            fork_count: 0,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            created_at: "2023-01-01T00:00:00Z".to_string(),
            pushed_at: "2024-01-01T00:00:00Z".to_string(),
            is_archived: false,
            languages: vec!["Rust".to_string()],
        }
    }

    // In-memory source: the cursor is the index of the next repository
    struct VecSource {
        repositories: Vec<RepositoryInfo>,
        requests: RefCell<Vec<(u32, Option<String>)>>,
    }

    impl VecSource {
        fn with_count(total: usize) -> Self {
            VecSource {
                repositories: (0..total).map(repository).collect(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_sizes(&self) -> Vec<u32> {
            self.requests.borrow().iter().map(|(count, _)| *count).collect()
        }
    }

    impl StarredSource for VecSource {
        async fn fetch_page(&self, count: u32, cursor: Option<&str>) -> Result<StarredPage, QueryError> {
            self.requests
                .borrow_mut()
                .push((count, cursor.map(str::to_string)));

            let start = cursor.map(|c| c.parse::<usize>().unwrap()).unwrap_or(0);
            let end = (start + count as usize).min(self.repositories.len());
            let edges = (start..end)
                .map(|i| StarredEdge {
                    cursor: (i + 1).to_string(),
                    repository: self.repositories[i].clone(),
                })
                .collect();

            Ok(StarredPage {
                total_count: self.repositories.len(),
                is_over_limit: false,
                edges,
            })
        }
    }

    // Claims more repositories than it ever returns
    struct ShortSource;

    impl StarredSource for ShortSource {
        async fn fetch_page(&self, _count: u32, cursor: Option<&str>) -> Result<StarredPage, QueryError> {
            let edges = match cursor {
                None => vec![StarredEdge {
                    cursor: "1".to_string(),
                    repository: repository(0),
                }],
                Some(_) => Vec::new(),
            };
            Ok(StarredPage {
                total_count: 5,
                is_over_limit: false,
                edges,
            })
        }
    }

    // Returns more edges than its total count
    struct OverfullSource;

    impl StarredSource for OverfullSource {
        async fn fetch_page(&self, _count: u32, _cursor: Option<&str>) -> Result<StarredPage, QueryError> {
            Ok(StarredPage {
                total_count: 2,
                is_over_limit: true,
                edges: (0..4)
                    .map(|i| StarredEdge {
                        cursor: i.to_string(),
                        repository: repository(i),
                    })
                    .collect(),
            })
        }
    }

    async fn assert_collects_all(total: usize, page_size: u32) -> VecSource {
        let source = VecSource::with_count(total);
        let repositories = fetch_starred_repositories(&source, page_size).await.unwrap();
        assert_eq!(repositories, source.repositories, "total={total} page_size={page_size}");
        source
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let source = assert_collects_all(0, 100).await;
        assert_eq!(source.request_sizes(), vec![100]);
    }

    #[tokio::test]
    async fn test_exactly_one_page() {
        let source = assert_collects_all(100, 100).await;
        assert_eq!(source.request_sizes(), vec![100]);
    }

    #[tokio::test]
    async fn test_one_more_than_a_page() {
        let source = assert_collects_all(101, 100).await;
        assert_eq!(source.request_sizes(), vec![100, 1]);
    }

    #[tokio::test]
    async fn test_request_sizes_shrink_to_remaining() {
        let source = assert_collects_all(250, 100).await;
        assert_eq!(source.request_sizes(), vec![100, 100, 50]);

        let cursors: Vec<Option<String>> =
            source.requests.borrow().iter().map(|(_, c)| c.clone()).collect();
        assert_eq!(cursors, vec![None, Some("100".to_string()), Some("200".to_string())]);
    }

    #[tokio::test]
    async fn test_various_page_sizes() {
        for (total, page_size) in [(1, 1), (7, 3), (9, 3), (10, 3), (42, 100)] {
            assert_collects_all(total, page_size).await;
        }
    }

    #[tokio::test]
    async fn test_page_size_is_clamped() {
        let source = assert_collects_all(150, 500).await;
        assert_eq!(source.request_sizes(), vec![100, 50]);
    }

    #[tokio::test]
    async fn test_empty_page_is_an_error() {
        match fetch_starred_repositories(&ShortSource, 100).await {
            Err(QueryError::EmptyPage { accumulated, total }) => {
                assert_eq!(accumulated, 1);
                assert_eq!(total, 5);
            }
            other => panic!("expected EmptyPage, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_never_returns_more_than_total() {
        let repositories = fetch_starred_repositories(&OverfullSource, 100).await.unwrap();
        assert_eq!(repositories.len(), 2);
    }

    #[tokio::test]
    async fn test_descriptions_and_languages_are_cleaned() {
        let mut source = VecSource::with_count(1);
        source.repositories[0].description = "✨ Cool lib! ✨".to_string();
        source.repositories[0].languages = ["Rust", "C", "Shell", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let repositories = fetch_starred_repositories(&source, 100).await.unwrap();
        assert_eq!(repositories[0].description, "Cool lib");
        assert_eq!(repositories[0].languages, vec!["Rust", "C", "Shell"]);
    }
}
