// src/github/mod.rs
// =============================================================================
// This module fetches the authenticated user's starred repositories.
//
// Submodules:
// - types: RepositoryInfo and the page/edge types
// - query: GraphQL client for api.github.com (one request per page)
// - paginate: walks the pages until every starred repository is collected
//
// The pagination loop only depends on the StarredSource trait, so it can be
// tested against an in-memory source without touching the network.
// =============================================================================

mod paginate;
mod query;
mod types;

pub use paginate::{fetch_starred_repositories, StarredSource, MAX_PAGE_SIZE};
pub use query::GitHubClient;
pub use types::{RepositoryInfo, StarredEdge, StarredPage};
