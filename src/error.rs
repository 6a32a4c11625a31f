// src/error.rs
// =============================================================================
// Error types for every stage of the pipeline.
//
// Each stage has its own error enum so the code that produces it can say
// exactly what went wrong. The pipeline wraps them all in AppError, and
// AppError knows which process exit code belongs to each failure:
//
//   0 = success
//   1 = separator regex failed to compile
//   2 = token environment variable missing
//   3 = template file could not be read
//   4 = GitHub query failed
//   5 = template rendering failed
//   6 = markdown conversion failed
//   7 = writing an output file failed
//
// A scheduler can tell which stage broke from the exit code alone.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

// Exit code for a fully successful run
pub const EXIT_OK: i32 = 0;

/// Failures while talking to the GitHub GraphQL API or paging through results.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("GitHub API returned errors: {0}")]
    GraphQl(String),

    #[error("GitHub API response has no data")]
    MissingData,

    #[error("could not decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("page returned no repositories after {accumulated} of {total}")]
    EmptyPage { accumulated: usize, total: usize },
}

/// Failures while filling a template.
#[derive(Debug, Error)]
#[error("{name}: {source:#}")]
pub struct RenderError {
    pub name: &'static str,
    #[source]
    pub source: minijinja::Error,
}

/// Failures while turning markdown into HTML.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not write HTML: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTML output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure while writing one of the output documents.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Top-level error: the first failure of a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Pattern(#[from] regex::Error),

    #[error("${0} environment variable not set.")]
    MissingToken(String),

    #[error("{}: {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Write(#[from] WriteError),
}

impl AppError {
    /// The process exit code for this failure stage.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Pattern(_) => 1,
            AppError::MissingToken(_) => 2,
            AppError::TemplateNotFound { .. } => 3,
            AppError::Query(_) => 4,
            AppError::Render(_) => 5,
            AppError::Convert(_) => 6,
            AppError::Write(_) => 7,
        }
    }
}
