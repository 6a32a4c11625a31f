// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and build the Config
// 2. Set up diagnostic logging (stderr)
// 3. Run the five-step pipeline against the GitHub GraphQL API
// 4. Exit with the code of the stage that failed (0 = success)
//
// Exit codes:
//   0 = success              4 = GitHub query failed
//   1 = regex fault          5 = template rendering failed
//   2 = no token given       6 = markdown conversion failed
//   3 = template not found   7 = writing output failed
//
// The run is a straight line with no concurrency, so tokio runs on the
// current thread only.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - settings fixed at startup, token lookup
mod error;     // src/error.rs - error types and exit codes
mod github;    // src/github/ - GraphQL client and pagination
mod logging;   // src/logging.rs - tracing subscriber
mod output;    // src/output.rs - writing README.md and index.html
mod pipeline;  // src/pipeline.rs - the five steps
mod render;    // src/render/ - templates and markdown conversion
mod sanitize;  // src/sanitize.rs - title and description cleanup

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::Config;
use error::EXIT_OK;
use github::GitHubClient;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logging is optional; a bad filter should not stop the run
    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("Warning: {:#}", e);
    }

    let config = Config::from(cli);

    let exit_code = match pipeline::run(&config, |config, token| {
        GitHubClient::new(config.api_url.clone(), token)
    })
    .await
    {
        Ok(()) => EXIT_OK,
        Err(e) => {
            // The error text was already printed after its step label
            error!(exit_code = e.exit_code(), error = %e, "run failed");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}
