// src/config.rs
// =============================================================================
// Process-wide configuration.
//
// Config is built once in main() from the parsed command line and then
// passed by reference to every stage. Nothing in here changes after startup.
//
// The access token is NOT stored in Config: it is looked up separately by
// resolve_token() so the "no token" failure has its own exit code.
// =============================================================================

use crate::cli::Cli;
use crate::error::AppError;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub token_env: String,
    pub readme_template: PathBuf,
    pub index_template: PathBuf,
    pub readme_output: PathBuf,
    pub index_output: PathBuf,
    pub username: String,
    pub repository_name: String,
    pub api_url: Url,
    pub page_size: u32,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let config = Config {
            token_env: cli.token_env,
            readme_template: cli.readme_template,
            index_template: cli.index_template,
            readme_output: cli.readme_output,
            index_output: cli.index_output,
            username: cli.username,
            repository_name: cli.repository_name,
            api_url: cli.api_url,
            page_size: cli.page_size,
        };
        config.rooted_at(&cli.dir)
    }
}

impl Config {
    /// Resolves every relative path against `dir`.
    ///
    /// Absolute paths are left alone (PathBuf::join replaces the base).
    fn rooted_at(mut self, dir: &Path) -> Self {
        self.readme_template = dir.join(&self.readme_template);
        self.index_template = dir.join(&self.index_template);
        self.readme_output = dir.join(&self.readme_output);
        self.index_output = dir.join(&self.index_output);
        self
    }
}

// Reads the access token from the environment variable named `var`
//
// Returns: the token, or AppError::MissingToken if the variable is unset,
// empty, or not valid unicode
pub fn resolve_token(var: &str) -> Result<String, AppError> {
    match std::env::var(var) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::MissingToken(var.to_string())),
    }
}
