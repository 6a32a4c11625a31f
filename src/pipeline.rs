// src/pipeline.rs
// =============================================================================
// The whole run, one stage after another:
//
// 1. Check configuration: token, page title, both template files
// 2. Fetch every starred repository from GitHub
// 3. Render the README template
// 4. Convert the README to HTML and render the index template around it
// 5. Write README.md and index.html
//
// Each step prints its label, then "OK." or the error text. The first
// failure stops the run; nothing is written unless steps 1-4 all succeed.
// =============================================================================

use crate::config::{resolve_token, Config};
use crate::error::{AppError, QueryError};
use crate::github::{fetch_starred_repositories, RepositoryInfo, StarredSource};
use crate::output::write_outputs;
use crate::render::{markdown_to_html, render_template, IndexContext, ReadmeContext};
use crate::sanitize::title_from_name;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

const STEP_CONFIGURATION: &str = "Step1 - Check configuration: ";
const STEP_QUERY: &str = "Step2 - Get user starred repositories information via Github api: ";
const STEP_README: &str = "Step3 - Render README template file with data: ";
const STEP_INDEX: &str = "Step4 - Render index.html template file with README content: ";
const STEP_WRITE: &str = "Step5 - Write output: ";

// Everything step 1 checks, handed on to later steps
struct Prepared {
    token: String,
    title: String,
    readme_template: String,
    index_template: String,
}

// Runs the pipeline
//
// Parameters:
//   config: fixed settings for this run
//   connect: builds the repository source from the config and the token
//            (the real binary passes a GitHubClient constructor; tests pass
//            an in-memory source)
pub async fn run<S, F>(config: &Config, connect: F) -> Result<(), AppError>
where
    S: StarredSource,
    F: FnOnce(&Config, String) -> Result<S, QueryError>,
{
    begin_step(STEP_CONFIGURATION);
    let prepared = finish_step(check_configuration(config))?;

    begin_step(STEP_QUERY);
    let repositories = finish_step(query(config, prepared.token, connect).await)?;
    info!(count = repositories.len(), "starred repositories fetched");

    begin_step(STEP_README);
    let readme = finish_step(render_readme(
        config,
        &prepared.title,
        &prepared.readme_template,
        &repositories,
    ))?;

    begin_step(STEP_INDEX);
    let index = finish_step(render_index(
        config,
        &prepared.title,
        &prepared.index_template,
        &readme,
        repositories.len(),
    ))?;

    begin_step(STEP_WRITE);
    finish_step(
        write_outputs(&config.readme_output, &readme, &config.index_output, &index)
            .map_err(AppError::from),
    )?;

    println!("Finished!");
    Ok(())
}

fn begin_step(label: &str) {
    print!("{}", label);
    // A failed flush only delays the label; the result line still follows
    let _ = std::io::stdout().flush();
}

fn finish_step<T>(result: Result<T, AppError>) -> Result<T, AppError> {
    match &result {
        Ok(_) => println!("OK."),
        Err(e) => println!("{}", e),
    }
    result
}

fn check_configuration(config: &Config) -> Result<Prepared, AppError> {
    let token = resolve_token(&config.token_env)?;
    let title = title_from_name(&config.repository_name)?;
    let readme_template = read_template(&config.readme_template)?;
    let index_template = read_template(&config.index_template)?;

    Ok(Prepared {
        token,
        title,
        readme_template,
        index_template,
    })
}

fn read_template(path: &Path) -> Result<String, AppError> {
    let template = std::fs::read_to_string(path).map_err(|source| AppError::TemplateNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = template.len(), "template loaded");
    Ok(template)
}

async fn query<S, F>(config: &Config, token: String, connect: F) -> Result<Vec<RepositoryInfo>, AppError>
where
    S: StarredSource,
    F: FnOnce(&Config, String) -> Result<S, QueryError>,
{
    let source = connect(config, token)?;
    Ok(fetch_starred_repositories(&source, config.page_size).await?)
}

fn render_readme(
    config: &Config,
    title: &str,
    template: &str,
    repositories: &[RepositoryInfo],
) -> Result<String, AppError> {
    let context = ReadmeContext {
        title,
        repository_name: &config.repository_name,
        username: &config.username,
        repositories,
    };
    Ok(render_template("README template", template, &context)?)
}

fn render_index(
    config: &Config,
    title: &str,
    template: &str,
    readme: &str,
    repositories_count: usize,
) -> Result<String, AppError> {
    let readme_content = markdown_to_html(readme)?;
    let context = IndexContext {
        title,
        repository_name: &config.repository_name,
        readme_content: &readme_content,
        repositories_count,
    };
    Ok(render_template("index template", template, &context)?)
}
