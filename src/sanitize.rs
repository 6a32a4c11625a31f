// src/sanitize.rs
// =============================================================================
// Small string cleanups.
//
// - title_from_name: "Starred-Repository-Monitor" -> "Starred Repository Monitor"
// - clean_description: strips emoji and symbols from the edges of a
//   repository description, e.g. "✨ Cool lib! ✨" -> "Cool lib"
//
// Both are pure functions with no I/O.
// =============================================================================

use regex::Regex;
use std::sync::OnceLock;

// One or more separator characters: underscore, vertical bar, hyphen
// (the hyphen is last so it is literal inside the class)
const SEPARATOR_PATTERN: &str = "[_|-]+";

// A run of anything outside the Letter (L) and Number (N) categories,
// anchored at either end of the text
const EDGE_SYMBOLS_PATTERN: &str = r"^[^\p{L}\p{N}]+|[^\p{L}\p{N}]+$";

static EDGE_SYMBOLS: OnceLock<Regex> = OnceLock::new();

// Derives a display title from a project name
//
// Every run of separators becomes a single space, then surrounding spaces
// are trimmed.
//
// Returns: the title, or regex::Error if the separator pattern does not
// compile. The pattern is a constant, so the error path only guards
// against a broken build.
pub fn title_from_name(name: &str) -> Result<String, regex::Error> {
    let separators = Regex::new(SEPARATOR_PATTERN)?;
    Ok(separators.replace_all(name, " ").trim_matches(' ').to_string())
}

// Strips every leading and trailing character that is neither a letter
// nor a digit
//
// "Letter" and "digit" are the Unicode general categories L and N. Symbols
// that merely look like letters (🅰, Ⓐ) and combining marks are stripped
// at the edges.
//
// Characters in the middle are kept, so "C++ / Rust bindings!" keeps its
// "+" and "/" but loses the trailing "!". A description that opens with a
// quotation mark loses it too.
pub fn clean_description(description: &str) -> String {
    let edges = EDGE_SYMBOLS
        .get_or_init(|| Regex::new(EDGE_SYMBOLS_PATTERN).expect("edge symbol pattern is valid"));
    edges.replace_all(description, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_name() {
        let title = title_from_name("Starred-Repository-Monitor").unwrap();
        assert_eq!(title, "Starred Repository Monitor");
    }

    #[test]
    fn test_title_collapses_separator_runs() {
        let title = title_from_name("__my_-|project--").unwrap();
        assert_eq!(title, "my project");
    }

    #[test]
    fn test_title_has_no_separators_or_edge_spaces() {
        for input in ["a_b", "-x-", "| | |", "plain", "", "a - b", "_ lead trail _"] {
            let title = title_from_name(input).unwrap();
            assert!(!title.contains(['_', '-', '|']), "{input:?} -> {title:?}");
            assert!(!title.starts_with(' ') && !title.ends_with(' '), "{input:?} -> {title:?}");
        }
    }

    #[test]
    fn test_clean_description_strips_emoji() {
        assert_eq!(clean_description("✨ Cool lib! ✨"), "Cool lib");
    }

    #[test]
    fn test_clean_description_strips_letter_like_symbols() {
        assert_eq!(clean_description("🅰 Awesome lib 🅰"), "Awesome lib");
        assert_eq!(clean_description("Ⓐ tool Ⓐ"), "tool");
    }

    #[test]
    fn test_clean_description_strips_trailing_combining_mark() {
        // U+0947 DEVANAGARI VOWEL SIGN E is a mark, not a letter
        assert_eq!(clean_description("tool \u{915}\u{947}"), "tool \u{915}");
    }

    #[test]
    fn test_clean_description_keeps_non_latin_text() {
        assert_eq!(clean_description("「日本語のツール」"), "日本語のツール");
        assert_eq!(clean_description("١٢٣ أداة"), "١٢٣ أداة");
    }

    #[test]
    fn test_clean_description_keeps_inner_symbols() {
        assert_eq!(clean_description("🚀 Fast, safe & 100% Rust 🦀"), "Fast, safe & 100% Rust");
    }

    #[test]
    fn test_clean_description_strips_leading_quote() {
        assert_eq!(clean_description("\"Quoted\" tool"), "Quoted\" tool");
    }

    #[test]
    fn test_clean_description_only_symbols() {
        assert_eq!(clean_description("🎉🎉 !!"), "");
        assert_eq!(clean_description(""), "");
    }

    #[test]
    fn test_clean_description_is_idempotent() {
        for input in ["✨ Cool lib! ✨", "...x...", "日本語のツール。", "  ", "abc", "🅰 a 🅰"] {
            let once = clean_description(input);
            assert_eq!(clean_description(&once), once);
        }
    }
}
