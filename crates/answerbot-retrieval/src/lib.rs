//! # Answerbot Retrieval
//!
//! Lexical retrieval over a static knowledge corpus — no vector DB, no
//! embeddings. Query terms are matched against pre-extracted keywords,
//! titles, and content with a weighted substring-overlap heuristic.
//!
//! ```text
//! User: "how much does a website cost?"
//!   ↓
//! extract_terms → {"much", "website", "cost"}
//!   ↓ score every chunk, floor at min_score, cap at top_k
//! Top ranked chunks
//!   ↓
//! build_context → labeled document blocks for the system prompt
//! ```
//!
//! Everything here is pure and synchronous; an unanswerable query
//! degrades to empty results and an empty context, never an error.

pub mod context;
pub mod score;
pub mod search;
pub mod tokenize;

pub use context::build_context;
pub use score::{RetrievalResult, score_chunk};
pub use search::{KnowledgeBase, classify_question_type};
pub use tokenize::extract_terms;
