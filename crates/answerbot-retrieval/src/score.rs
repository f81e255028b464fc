//! Weighted substring-overlap scoring of one chunk against a term set.

use std::collections::HashSet;

use answerbot_core::types::KnowledgeChunk;

/// One scored chunk. Transient — built per query, dropped after the
/// context is assembled.
#[derive(Debug, Clone)]
pub struct RetrievalResult<'a> {
    pub chunk: &'a KnowledgeChunk,
    /// Relevance score. Only the ordering matters; the absolute value
    /// has no external meaning.
    pub score: f32,
    /// Distinct query terms that hit any tier.
    pub matched_terms: HashSet<String>,
}

/// Bidirectional substring containment: `term` inside `keyword` or
/// `keyword` inside `term`. Tolerates partial and plural forms cheaply.
/// Short terms can match unrelated longer keywords; that recall-over-
/// precision trade-off is intentional and ranking depends on it.
pub(crate) fn terms_overlap(term: &str, keyword: &str) -> bool {
    keyword.contains(term) || term.contains(keyword)
}

/// Score a chunk against a query term set.
///
/// Per term: +3 for a keyword hit (bidirectional containment), +2 for a
/// title substring, +1 for a content substring — each tier at most once
/// per term. A final +0.5 per distinct matched term rewards breadth of
/// coverage over a single repeated hit.
pub fn score_chunk<'a>(
    chunk: &'a KnowledgeChunk,
    terms: &HashSet<String>,
) -> RetrievalResult<'a> {
    let title = chunk.title.to_lowercase();
    let content = chunk.content.to_lowercase();

    let mut score = 0.0f32;
    let mut matched_terms: HashSet<String> = HashSet::new();

    for term in terms {
        if chunk.keywords.iter().any(|k| terms_overlap(term, k)) {
            score += 3.0;
            matched_terms.insert(term.clone());
        }
        if title.contains(term.as_str()) {
            score += 2.0;
            matched_terms.insert(term.clone());
        }
        if content.contains(term.as_str()) {
            score += 1.0;
            matched_terms.insert(term.clone());
        }
    }

    score += 0.5 * matched_terms.len() as f32;

    RetrievalResult { chunk, score, matched_terms }
}
