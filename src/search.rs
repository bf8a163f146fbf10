//! Keyword relevance scoring over the in-memory document list.
//!
//! Two deliberately separate matching rules live here:
//!
//! - [`rank_documents`] — the chat scorer. Per query word: 2 points per
//!   occurrence in the content, plus 5 points if the word appears anywhere
//!   in the title. Zero-score documents are dropped.
//! - [`match_documents`] — the query-CLI variant. A whole-query substring
//!   hit on content or title is an automatic match placed ahead of the
//!   word-scored matches; otherwise each query word present in content or
//!   title counts 1 point.
//!
//! The two rules rank the same document shape differently and are kept as
//! independent functions on purpose; callers pick one, never a merge of
//! both. Ties are broken by document order in the store (both sorts are
//! stable over a single accumulation pass).

use crate::models::Document;

/// Points per occurrence of a query word in document content.
const CONTENT_WEIGHT: usize = 2;
/// Points per query word found anywhere in the document title.
const TITLE_WEIGHT: usize = 5;

/// Rank documents for the chat path: weighted per-word scoring, highest
/// relevance first, at most `limit` results.
///
/// An empty or whitespace-only query scores every document zero and
/// returns nothing. Matching is case-insensitive; words are whitespace
/// tokens with no stemming or stop-word handling.
pub fn rank_documents<'a>(
    query: &str,
    documents: &'a [Document],
    limit: usize,
) -> Vec<&'a Document> {
    let query_lower = query.to_lowercase();
    let words: Vec<&str> = query_lower.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(usize, &Document)> = Vec::new();
    for doc in documents {
        let score = score_document(&words, doc);
        if score > 0 {
            matches.push((score, doc));
        }
    }

    // Stable sort: equal scores keep store order.
    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches.truncate(limit);
    matches.into_iter().map(|(_, doc)| doc).collect()
}

/// Weighted per-word score of one document against pre-lowercased words.
fn score_document(words: &[&str], doc: &Document) -> usize {
    let content = doc.content.to_lowercase();
    let title = doc.title.to_lowercase();

    let mut score = 0;
    for word in words {
        score += content.matches(word).count() * CONTENT_WEIGHT;
        if title.contains(word) {
            score += TITLE_WEIGHT;
        }
    }
    score
}

/// Match documents for the standalone query CLI.
///
/// Documents containing the whole query as a substring (content or title)
/// are included first, unscored, in store order. Remaining documents get
/// 1 point per query word present in content or title, sorted descending.
/// The combined list is cut to `limit`. An empty query matches nothing and
/// falls through to the caller's type-count listing.
pub fn match_documents<'a>(
    query: &str,
    documents: &'a [Document],
    limit: usize,
) -> Vec<&'a Document> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = query_lower.split_whitespace().collect();

    let mut direct: Vec<&Document> = Vec::new();
    let mut scored: Vec<(usize, &Document)> = Vec::new();

    for doc in documents {
        let content = doc.content.to_lowercase();
        let title = doc.title.to_lowercase();

        if content.contains(&query_lower) || title.contains(&query_lower) {
            direct.push(doc);
            continue;
        }

        let hits = words
            .iter()
            .filter(|word| content.contains(**word) || title.contains(**word))
            .count();
        if hits > 0 {
            scored.push((hits, doc));
        }
    }

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let mut results = direct;
    results.extend(scored.into_iter().map(|(_, doc)| doc));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocType;

    fn doc(id: &str, title: &str, content: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            doc_type: DocType::Experience,
            content: content.to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let docs = vec![doc("d1", "Python Developer", "Python everywhere")];
        assert!(rank_documents("", &docs, 5).is_empty());
        assert!(rank_documents("   \t ", &docs, 5).is_empty());
    }

    #[test]
    fn test_title_only_match_scores_five_per_word() {
        let docs = vec![doc(
            "d1",
            "Database Administrator",
            "managed servers and backups",
        )];
        // "database" appears in the title only: 5 points, regardless of
        // how long the content is.
        let query_lower = "database".to_lowercase();
        let words: Vec<&str> = query_lower.split_whitespace().collect();
        assert_eq!(score_document(&words, &docs[0]), 5);
    }

    #[test]
    fn test_content_match_scores_two_per_occurrence() {
        let d = doc("d1", "Summary", "python and more python plus python");
        let words = vec!["python"];
        assert_eq!(score_document(&words, &d), 2 * 3);
    }

    #[test]
    fn test_title_and_content_combined() {
        let d = doc("d1", "Python Developer", "python web services");
        let words = vec!["python"];
        // one content occurrence (2) + title hit (5)
        assert_eq!(score_document(&words, &d), 7);
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let docs = vec![
            doc("low", "Notes", "python"),
            doc("high", "Python Guide", "python python"),
        ];
        let results = rank_documents("python", &docs, 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "high");
        assert_eq!(results[1].id, "low");
    }

    #[test]
    fn test_rank_excludes_zero_score() {
        let docs = vec![
            doc("d1", "Gardening", "tomatoes and soil"),
            doc("d2", "Python Guide", "python basics"),
        ];
        let results = rank_documents("python", &docs, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "d2");
    }

    #[test]
    fn test_rank_respects_limit() {
        let docs: Vec<Document> = (0..10)
            .map(|i| doc(&format!("d{}", i), "Rust", "rust notes"))
            .collect();
        let results = rank_documents("rust", &docs, 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_rank_ties_keep_store_order() {
        let docs = vec![
            doc("first", "Rust", "alpha"),
            doc("second", "Rust", "beta"),
            doc("third", "Rust", "gamma"),
        ];
        let results = rank_documents("rust", &docs, 5);
        let ids: Vec<&str> = results.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_is_case_insensitive() {
        let docs = vec![doc("d1", "MySQL Administration", "Managed MySQL clusters")];
        let results = rank_documents("mysql", &docs, 5);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_match_whole_query_substring_comes_first() {
        let docs = vec![
            doc("worded", "Web Work", "web development with python"),
            doc("exact", "Summary", "experienced in web development work"),
        ];
        // "web development work" is a substring of `exact` only; `worded`
        // matches on individual words.
        let results = match_documents("web development work", &docs, 5);
        assert_eq!(results[0].id, "exact");
        assert_eq!(results[1].id, "worded");
    }

    #[test]
    fn test_match_word_hits_sorted_descending() {
        let docs = vec![
            doc("one", "Notes", "laravel only"),
            doc("two", "Notes", "laravel and nodejs together"),
        ];
        let results = match_documents("laravel nodejs", &docs, 5);
        assert_eq!(results[0].id, "two");
        assert_eq!(results[1].id, "one");
    }

    #[test]
    fn test_match_empty_query_matches_nothing() {
        let docs = vec![doc("d1", "Anything", "anything at all")];
        assert!(match_documents("", &docs, 5).is_empty());
        assert!(match_documents("  ", &docs, 5).is_empty());
    }

    #[test]
    fn test_match_respects_limit() {
        let docs: Vec<Document> = (0..8)
            .map(|i| doc(&format!("d{}", i), "Rust", "rust everywhere"))
            .collect();
        assert_eq!(match_documents("rust", &docs, 5).len(), 5);
    }

    #[test]
    fn test_match_no_hits_returns_empty() {
        let docs = vec![doc("d1", "Cooking", "recipes and spices")];
        assert!(match_documents("kubernetes", &docs, 5).is_empty());
    }
}
