//! Serialize ranked results into the context block for the prompt.

use crate::score::RetrievalResult;

/// Render ranked results as labeled document blocks:
///
/// ```text
/// [Document 1: Project Pricing]
/// Website projects start at $2,500. ...
///
/// ---
///
/// [Document 2: ...]
/// ```
///
/// Empty input yields an empty string, which downstream reads as
/// "no relevant context".
pub fn build_context(results: &[RetrievalResult<'_>]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[Document {}: {}]\n{}", i + 1, r.chunk.title, r.chunk.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::score_chunk;
    use answerbot_core::types::{Category, KnowledgeChunk};
    use std::collections::HashSet;

    fn chunk(id: &str, title: &str, content: &str) -> KnowledgeChunk {
        KnowledgeChunk {
            id: id.into(),
            title: title.into(),
            category: Category::Faq,
            content: content.into(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_empty_results_yield_empty_string() {
        assert_eq!(build_context(&[]), "");
    }

    #[test]
    fn test_single_block() {
        let c = chunk("a", "Pricing", "Projects start at $2,500.");
        let results = vec![score_chunk(&c, &HashSet::new())];
        assert_eq!(
            build_context(&results),
            "[Document 1: Pricing]\nProjects start at $2,500."
        );
    }

    #[test]
    fn test_blocks_joined_with_separator_in_input_order() {
        let a = chunk("a", "First", "Alpha.");
        let b = chunk("b", "Second", "Beta.");
        let results = vec![
            score_chunk(&a, &HashSet::new()),
            score_chunk(&b, &HashSet::new()),
        ];
        let context = build_context(&results);
        assert_eq!(
            context,
            "[Document 1: First]\nAlpha.\n\n---\n\n[Document 2: Second]\nBeta."
        );
    }
}
