//! Query tokenization: normalize raw text into a deduplicated term set.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common function words that carry no retrieval signal. Initialized
/// once, shared read-only across all requests.
fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        [
            "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has",
            "had", "do", "does", "did", "will", "would", "could", "should", "may", "might",
            "shall", "can", "need", "dare", "ought", "i", "me", "my", "you", "your", "he", "she",
            "it", "we", "they", "this", "that", "these", "those", "what", "which", "who", "how",
            "why", "when", "where", "and", "but", "or", "not", "no", "of", "in", "on", "at",
            "to", "for", "with", "from", "by", "as", "if", "then", "so", "than", "about",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Extract the deduplicated term set from a raw query.
///
/// Lowercases, strips punctuation, splits on whitespace, and drops
/// tokens of length <= 2 as well as stop words. A query made entirely
/// of such tokens yields an empty set.
pub fn extract_terms(query: &str) -> HashSet<String> {
    let lowered = query.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !stop_words().contains(w))
        .map(String::from)
        .collect()
}
