// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool is meant to run unattended (for example from a scheduled job),
// so there are no subcommands and every flag has a default. Running the
// binary with no arguments reads README.tmpl and index.tmpl from the
// working directory and writes README.md and index.html next to them.
//
// The parsed Cli is turned into a Config once at startup (see config.rs);
// the rest of the program only ever sees the Config.
// =============================================================================

use crate::github::MAX_PAGE_SIZE;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "starred-monitor",
    version,
    about = "Render your GitHub starred repositories into README.md and index.html",
    long_about = "starred-monitor fetches every repository the token's owner has starred, \
                  fills a markdown template with them, converts the result to HTML and \
                  embeds it into a page template. Each failure stage has its own exit code."
)]
pub struct Cli {
    /// Directory that relative template and output paths are resolved against
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Environment variable holding the GitHub access token
    #[arg(long, default_value = "USER_GITHUB_TOKEN")]
    pub token_env: String,

    /// Markdown document template
    #[arg(long, default_value = "README.tmpl")]
    pub readme_template: PathBuf,

    /// HTML page template
    #[arg(long, default_value = "index.tmpl")]
    pub index_template: PathBuf,

    /// Where the rendered markdown document is written
    #[arg(long, default_value = "README.md")]
    pub readme_output: PathBuf,

    /// Where the rendered HTML page is written
    #[arg(long, default_value = "index.html")]
    pub index_output: PathBuf,

    /// Owner identity shown in the documents
    #[arg(long, default_value = "gududege")]
    pub username: String,

    /// Project name; the page title is derived from it
    #[arg(long, default_value = "Starred-Repository-Monitor")]
    pub repository_name: String,

    /// GitHub GraphQL endpoint
    #[arg(long, default_value = "https://api.github.com/graphql")]
    pub api_url: Url,

    /// Repositories requested per page (GitHub allows at most 100)
    ///
    /// #[arg(value_parser = ...)] rejects values outside 1..=100 at parse time
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)))]
    pub page_size: u32,

    /// Log filter for stderr diagnostics (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_names() {
        let cli = Cli::try_parse_from(["starred-monitor"]).unwrap();
        assert_eq!(cli.token_env, "USER_GITHUB_TOKEN");
        assert_eq!(cli.readme_template, PathBuf::from("README.tmpl"));
        assert_eq!(cli.index_output, PathBuf::from("index.html"));
        assert_eq!(cli.page_size, 100);
        assert_eq!(cli.api_url.as_str(), "https://api.github.com/graphql");
    }

    #[test]
    fn test_page_size_out_of_range() {
        let result = Cli::try_parse_from(["starred-monitor", "--page-size", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_api_url() {
        let result = Cli::try_parse_from(["starred-monitor", "--api-url", "not a url"]);
        assert!(result.is_err());
    }
}
