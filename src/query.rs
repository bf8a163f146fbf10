//! Non-interactive profile search.
//!
//! Joins the command-line terms into one query, runs the substring-or-word
//! matching variant, and prints up to five truncated matches. With no
//! matches (including an empty query) it falls through to a listing of the
//! available document types and their counts.

use anyhow::Result;

use crate::config::Config;
use crate::search;
use crate::store::ProfileStore;

/// Maximum content characters shown per match before an ellipsis.
const SNIPPET_CHARS: usize = 200;

/// Run the query command over the given search terms.
pub fn run_query(config: &Config, terms: &[String]) -> Result<()> {
    let query = terms.join(" ").to_lowercase();
    let store = ProfileStore::load(&config.store.path)?;

    println!();
    println!("Searching the profile for: '{}'", query);
    println!("{}", "=".repeat(70));

    let matches = search::match_documents(&query, store.documents(), config.retrieval.limit);

    if matches.is_empty() {
        println!();
        println!("No matches found. Try different keywords.");
        println!();
        println!("Available document types:");
        for (doc_type, count) in store.type_counts() {
            println!("  - {}: {} documents", doc_type, count);
        }
    } else {
        println!();
        println!("Found {} relevant documents:", matches.len());
        println!();
        for (i, doc) in matches.iter().enumerate() {
            println!("{}. [{}] {}", i + 1, doc.doc_type.label(), doc.title);
            println!("   {}", truncate_content(&doc.content, SNIPPET_CHARS));
            println!();
        }
    }

    println!("{}", "=".repeat(70));
    println!();
    println!("Total documents in the profile: {}", store.len());
    let types: Vec<&str> = store.type_counts().keys().copied().collect();
    println!("Types: {}", types.join(", "));
    println!();

    Ok(())
}

/// Truncate to at most `max_chars` characters, appending an ellipsis when
/// anything was cut. Counts characters, not bytes, so multi-byte text is
/// never split mid-character.
fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_content_unchanged() {
        assert_eq!(truncate_content("short text", 200), "short text");
    }

    #[test]
    fn test_truncate_long_content_gets_ellipsis() {
        let long = "x".repeat(250);
        let result = truncate_content(&long, 200);
        assert_eq!(result.chars().count(), 203);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_exact_boundary_unchanged() {
        let exact = "y".repeat(200);
        assert_eq!(truncate_content(&exact, 200), exact);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let result = truncate_content(&text, 5);
        assert_eq!(result, format!("{}...", "é".repeat(5)));
    }
}
