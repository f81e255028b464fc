//! Corpus ranking and question-category classification.

use std::collections::HashSet;

use answerbot_core::types::{Category, KnowledgeChunk};

use crate::score::{RetrievalResult, score_chunk, terms_overlap};
use crate::tokenize::extract_terms;

/// Indicator terms per category, in fixed evaluation order. The first
/// category keeps a tie under the strict `count > best` comparison.
const CATEGORY_INDICATORS: &[(Category, &[&str])] = &[
    (Category::Pricing, &["price", "cost", "pricing", "pay", "much", "money", "budget", "fee"]),
    (Category::Support, &["help", "support", "issue", "problem", "broken", "error", "fix", "bug"]),
    (Category::Services, &["service", "website", "design", "build", "develop", "offer", "app"]),
    (Category::Process, &["process", "timeline", "long", "step", "start", "work", "deliver"]),
    (Category::Security, &["secure", "security", "backup", "ssl", "data", "privacy", "hack"]),
    (Category::Legal, &["terms", "contract", "legal", "refund", "policy", "cancel"]),
    (Category::Contact, &["contact", "email", "phone", "reach", "talk", "call", "meet"]),
    (Category::Faq, &["faq", "question", "common", "often"]),
];

/// Read-only view over the static knowledge corpus, built once at
/// process start and shared across requests without locking.
pub struct KnowledgeBase {
    chunks: Vec<KnowledgeChunk>,
}

impl KnowledgeBase {
    pub fn new(chunks: Vec<KnowledgeChunk>) -> Self {
        debug_assert!(
            {
                let ids: HashSet<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
                ids.len() == chunks.len()
            },
            "corpus chunk IDs must be unique"
        );
        Self { chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Rank the corpus against a query.
    ///
    /// Results scoring strictly below `min_score` are dropped, the rest
    /// sorted descending (stable — corpus order breaks ties) and capped
    /// at `top_k`. A query with no usable terms short-circuits to empty
    /// without scoring anything.
    pub fn search(&self, query: &str, top_k: usize, min_score: f32) -> Vec<RetrievalResult<'_>> {
        let terms = extract_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<RetrievalResult<'_>> = self
            .chunks
            .iter()
            .map(|chunk| score_chunk(chunk, &terms))
            .filter(|r| r.score >= min_score)
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        tracing::debug!(
            "Retrieval: {} term(s), {} result(s) above floor {min_score}",
            terms.len(),
            results.len()
        );
        results
    }

    /// The production answer path: top 4 results, relevance floor 2.
    pub fn search_for_answer(&self, query: &str) -> Vec<RetrievalResult<'_>> {
        self.search(query, 4, 2.0)
    }

    /// Category-style lookup: top 3 results, same floor.
    pub fn lookup(&self, query: &str) -> Vec<RetrievalResult<'_>> {
        self.search(query, 3, 2.0)
    }
}

/// Guess which category a question is about by counting indicator-term
/// hits per category (same bidirectional containment rule the scorer
/// uses). Returns `None` when nothing matches.
pub fn classify_question_type(terms: &HashSet<String>) -> Option<Category> {
    let mut best: Option<Category> = None;
    let mut best_count = 0usize;

    for (category, indicators) in CATEGORY_INDICATORS {
        let count = terms
            .iter()
            .filter(|t| indicators.iter().any(|ind| terms_overlap(t, ind)))
            .count();
        if count > best_count {
            best_count = count;
            best = Some(*category);
        }
    }

    best
}
