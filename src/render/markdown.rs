// src/render/markdown.rs
// =============================================================================
// Converts Markdown text into an HTML fragment.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into a stream of events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Ships an HTML writer that turns those events back into HTML
//
// The output is a fragment: no <html>, <head> or <body>. It is meant to be
// dropped into the page template as {{ readme_content }}.
// =============================================================================

use crate::error::ConvertError;
use pulldown_cmark::{html, Options, Parser};

// Converts Markdown to an HTML fragment
//
// Tables and strikethrough (GitHub-flavoured extensions) are enabled, since
// README templates commonly lay repositories out as a table.
//
// Example:
//   "# Stars" -> "<h1>Stars</h1>\n"
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);

    let mut buffer = Vec::with_capacity(markdown.len() * 3 / 2);
    html::write_html(&mut buffer, parser)?;

    Ok(String::from_utf8(buffer)?)
}
