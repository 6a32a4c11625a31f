// src/github/types.rs
// =============================================================================
// Data types shared by the GraphQL client and the pagination loop.
//
// RepositoryInfo is what the templates see. It derives Serialize so the
// template engine can read its fields by name, e.g.
// {{ repo.name_with_owner }} or {{ repo.stargazer_count }}.
// =============================================================================

use serde::Serialize;

/// One starred repository, as returned by GitHub at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub name_with_owner: String,
    /// Cleaned by `sanitize::clean_description` right after the page arrives
    pub description: String,
    pub url: String,
    pub stargazer_count: u64,
    pub fork_count: u64,
    pub updated_at: String,
    pub created_at: String,
    pub pushed_at: String,
    pub is_archived: bool,
    /// At most three, in the order GitHub returned them
    pub languages: Vec<String>,
}

/// A repository plus the opaque cursor pointing just past it.
#[derive(Debug, Clone)]
pub struct StarredEdge {
    pub cursor: String,
    pub repository: RepositoryInfo,
}

/// One page of the viewer's starred repositories.
#[derive(Debug, Clone)]
pub struct StarredPage {
    /// Size of the whole collection, not of this page
    pub total_count: usize,
    pub is_over_limit: bool,
    pub edges: Vec<StarredEdge>,
}
