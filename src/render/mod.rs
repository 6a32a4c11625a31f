// src/render/mod.rs
// =============================================================================
// This module turns data into documents.
//
// Submodules:
// - template: fills README.tmpl and index.tmpl with typed contexts
// - markdown: converts the rendered README into an HTML fragment
// =============================================================================

mod markdown;
mod template;

pub use markdown::markdown_to_html;
pub use template::{render_template, IndexContext, ReadmeContext};
