//! The search predicate used by listings.
//!
//! A plain, case-insensitive substring test over title, description and language tag.
//! Input order is preserved; an empty query keeps everything.

use crate::model::Snippet;

pub fn matches(snippet: &Snippet, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    snippet.title.to_lowercase().contains(&needle)
        || snippet.description.to_lowercase().contains(&needle)
        || snippet.language.as_str().contains(&needle)
}

pub fn filter(snippets: &[Snippet], query: &str) -> Vec<Snippet> {
    snippets
        .iter()
        .filter(|s| matches(s, query))
        .cloned()
        .collect()
}
