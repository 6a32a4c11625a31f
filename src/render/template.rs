// src/render/template.rs
// =============================================================================
// Fills templates with data using the `minijinja` crate.
//
// Templates use Jinja syntax:
//   {{ title }}                      -> a value
//   {% for repo in repositories %}   -> a loop
//   {{ repo.name_with_owner }}       -> a field of the loop item
//
// The environment runs with strict undefined behaviour: referencing a value
// that is not in the context is a RenderError, never an empty string.
//
// Each template gets its own context struct instead of a loose map, so the
// set of names a template may use is fixed at compile time.
// =============================================================================

use crate::error::RenderError;
use crate::github::RepositoryInfo;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// Values available to the markdown document template.
#[derive(Debug, Serialize)]
pub struct ReadmeContext<'a> {
    pub title: &'a str,
    pub repository_name: &'a str,
    pub username: &'a str,
    pub repositories: &'a [RepositoryInfo],
}

/// Values available to the HTML page template.
#[derive(Debug, Serialize)]
pub struct IndexContext<'a> {
    pub title: &'a str,
    pub repository_name: &'a str,
    /// HTML fragment converted from the rendered README, embedded verbatim
    pub readme_content: &'a str,
    pub repositories_count: usize,
}

// Renders `template` with `context`
//
// Parameters:
//   name: label used in error messages (e.g. "README template")
//   template: the template text
//   context: any Serialize value; its fields become template variables
//
// Auto-escaping is off: templates are not named *.html, and the HTML
// fragment must be embedded as-is.
pub fn render_template<C: Serialize>(
    name: &'static str,
    template: &str,
    context: &C,
) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.render_str(template, context)
        .map_err(|source| RenderError { name, source })
}
