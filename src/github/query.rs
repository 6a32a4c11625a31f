// src/github/query.rs
// =============================================================================
// GraphQL client for the GitHub API.
//
// Strategy:
// - POST a single query document to the GraphQL endpoint
// - Ask for viewer.starredRepositories, newest star first
// - Pass `count` and `cursor` as variables (cursor is null on the first page)
// - Decode the JSON body into a StarredPage
//
// GitHub reports most query problems with HTTP 200 and an "errors" array,
// so both the status code and the body are checked.
// =============================================================================

use crate::error::QueryError;
use crate::github::paginate::StarredSource;
use crate::github::types::{RepositoryInfo, StarredEdge, StarredPage};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::trace;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const STARRED_QUERY: &str = r#"
    query starred($count: Int!, $cursor: String) {
        viewer {
            starredRepositories(first: $count, after: $cursor, orderBy: {field: STARRED_AT, direction: DESC}) {
                isOverLimit
                totalCount
                edges {
                    starredAt
                    cursor
                    node {
                        name
                        nameWithOwner
                        description
                        url
                        stargazerCount
                        forkCount
                        updatedAt
                        createdAt
                        pushedAt
                        isArchived
                        languages(first: 3) {
                            nodes {
                                name
                            }
                        }
                    }
                }
            }
        }
    }
"#;

/// Talks to the GitHub GraphQL endpoint with a personal access token.
pub struct GitHubClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl GitHubClient {
    pub fn new(endpoint: Url, token: String) -> Result<Self, QueryError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(GitHubClient {
            client,
            endpoint,
            token,
        })
    }

    // Builds the POST for one page, with the token as a bearer header
    fn page_request(&self, count: u32, cursor: Option<&str>) -> Result<reqwest::Request, QueryError> {
        let payload = serde_json::json!({
            "query": STARRED_QUERY,
            "variables": {
                "count": count,
                "cursor": cursor,
            }
        });

        Ok(self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&payload)
            .build()?)
    }
}

impl StarredSource for GitHubClient {
    async fn fetch_page(&self, count: u32, cursor: Option<&str>) -> Result<StarredPage, QueryError> {
        let request = self.page_request(count, cursor)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(%status, bytes = body.len(), "GraphQL response received");

        page_from_response(status, &body)
    }
}

// Turns a status code and body into a page
//
// A non-2xx status is an error carrying the body text, whatever the body
// contains; otherwise the body is decoded as a GraphQL response.
fn page_from_response(status: StatusCode, body: &str) -> Result<StarredPage, QueryError> {
    if !status.is_success() {
        return Err(QueryError::Status {
            status,
            body: body.to_string(),
        });
    }

    decode_page(body)
}

// Raw response shapes. Field names follow the GraphQL schema (camelCase).

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ViewerData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ViewerData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Viewer {
    starred_repositories: StarredConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StarredConnection {
    #[serde(default)]
    is_over_limit: bool,
    total_count: usize,
    edges: Option<Vec<RawEdge>>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    cursor: String,
    node: RawRepository,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRepository {
    name: String,
    name_with_owner: String,
    description: Option<String>,
    url: String,
    stargazer_count: u64,
    fork_count: u64,
    updated_at: String,
    created_at: String,
    pushed_at: Option<String>,
    is_archived: bool,
    languages: Option<LanguageConnection>,
}

#[derive(Debug, Deserialize)]
struct LanguageConnection {
    nodes: Option<Vec<Option<Language>>>,
}

#[derive(Debug, Deserialize)]
struct Language {
    name: String,
}

impl From<RawRepository> for RepositoryInfo {
    fn from(raw: RawRepository) -> Self {
        let languages = raw
            .languages
            .and_then(|connection| connection.nodes)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|language| language.name)
            .collect();

        RepositoryInfo {
            name: raw.name,
            name_with_owner: raw.name_with_owner,
            description: raw.description.unwrap_or_default(),
            url: raw.url,
            stargazer_count: raw.stargazer_count,
            fork_count: raw.fork_count,
            updated_at: raw.updated_at,
            created_at: raw.created_at,
            pushed_at: raw.pushed_at.unwrap_or_default(),
            is_archived: raw.is_archived,
            languages,
        }
    }
}

// Decodes one GraphQL response body into a StarredPage
//
// Errors reported by GitHub take priority over any partial data.
fn decode_page(body: &str) -> Result<StarredPage, QueryError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(QueryError::GraphQl(messages.join("; ")));
    }

    let connection = response
        .data
        .ok_or(QueryError::MissingData)?
        .viewer
        .starred_repositories;

    let edges = connection
        .edges
        .unwrap_or_default()
        .into_iter()
        .map(|edge| StarredEdge {
            cursor: edge.cursor,
            repository: edge.node.into(),
        })
        .collect();

    Ok(StarredPage {
        total_count: connection.total_count,
        is_over_limit: connection.is_over_limit,
        edges,
    })
}
