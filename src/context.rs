//! Context block rendering for chat turns.
//!
//! Runs the chat scorer over the store and renders the top matches as a
//! plain-text block that is either prepended to a completion request or
//! shown directly in basic mode.

use crate::models::Document;
use crate::search;

/// Returned verbatim when no document matches; the orchestrator compares
/// against this exact string to pick its no-information reply.
pub const NO_MATCH_SENTINEL: &str = "No specific information found in Catherine's profile.";

/// Render the top-`limit` matches for `query` as a context block.
///
/// Each match becomes `[TYPE] Title`, its content, and a blank separator
/// line, in scorer order.
pub fn build_context(query: &str, documents: &[Document], limit: usize) -> String {
    let matches = search::rank_documents(query, documents, limit);

    if matches.is_empty() {
        return NO_MATCH_SENTINEL.to_string();
    }

    let mut parts: Vec<String> = Vec::with_capacity(matches.len() * 3);
    for doc in matches {
        parts.push(format!("[{}] {}", doc.doc_type.label(), doc.title));
        parts.push(doc.content.clone());
        parts.push(String::new());
    }
    parts.join("\n")
}
