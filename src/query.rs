//! Query evaluation against either index structure.
//!
//! A query is one line of whitespace-separated words. Each word is normalized
//! the same way ingestion normalizes it, then looked up. The two paths differ
//! deliberately, matching their output contracts:
//!
//! - the AVL path reports outcomes per token in query order, including an
//!   explicit not-found outcome;
//! - the hash path aggregates counts through a transient word-to-document
//!   accumulator (so repeated tokens do not duplicate lines), emits them
//!   grouped by word then document, and stays silent about absent words.

use ahash::AHashMap;
use serde::Serialize;

use crate::analysis::WordTokenizer;
use crate::index::{AvlIndex, HashIndex};
use crate::posting::DocumentCount;

/// Result of looking up one query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The word is indexed; one entry per document it appears in.
    Found {
        word: String,
        documents: Vec<DocumentCount>,
    },
    /// The word is not indexed.
    NotFound { word: String },
}

impl QueryOutcome {
    /// Render this outcome into output lines, one per document.
    pub fn render(&self) -> Vec<String> {
        match self {
            QueryOutcome::Found { word, documents } => documents
                .iter()
                .map(|d| {
                    format!(
                        "in Document {}, {} found {} times.",
                        d.document, word, d.count
                    )
                })
                .collect(),
            QueryOutcome::NotFound { word } => vec![format!("{word} not found.")],
        }
    }
}

/// Render a sequence of outcomes into output lines.
pub fn render_lines(outcomes: &[QueryOutcome]) -> Vec<String> {
    outcomes.iter().flat_map(QueryOutcome::render).collect()
}

/// Evaluates word-frequency queries against a chosen index.
#[derive(Debug, Clone, Default)]
pub struct QueryEvaluator {
    tokenizer: WordTokenizer,
}

impl QueryEvaluator {
    /// Create a new evaluator.
    pub fn new() -> Self {
        QueryEvaluator {
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Evaluate against the AVL index: one outcome per query token, in query
    /// order, absent words reported as [`QueryOutcome::NotFound`].
    pub fn evaluate_avl(&self, index: &AvlIndex, query: &str) -> Vec<QueryOutcome> {
        self.tokenizer
            .tokenize(query)
            .into_iter()
            .map(|word| match index.search(&word) {
                Some(posting) => QueryOutcome::Found {
                    word,
                    documents: posting.documents.clone(),
                },
                None => QueryOutcome::NotFound { word },
            })
            .collect()
    }

    /// Evaluate against the hash index: counts aggregated per word and
    /// document, emitted sorted by word then document. Absent words produce
    /// no outcome at all.
    pub fn evaluate_hash(&self, index: &HashIndex, query: &str) -> Vec<QueryOutcome> {
        let mut counts: AHashMap<String, AHashMap<String, u64>> = AHashMap::new();

        for word in self.tokenizer.tokenize(query) {
            if let Some(posting) = index.find(&word) {
                let per_document = counts.entry(word).or_default();
                for doc in &posting.documents {
                    *per_document.entry(doc.document.clone()).or_insert(0) += doc.count;
                }
            }
        }

        let mut words: Vec<String> = counts.keys().cloned().collect();
        words.sort();

        words
            .into_iter()
            .map(|word| {
                let per_document = &counts[&word];
                let mut documents: Vec<DocumentCount> = per_document
                    .iter()
                    .map(|(document, count)| DocumentCount::new(document.clone(), *count))
                    .collect();
                documents.sort_by(|a, b| a.document.cmp(&b.document));
                QueryOutcome::Found { word, documents }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::Ingestor;

    fn build_indexes() -> (AvlIndex, HashIndex) {
        let ingestor = Ingestor::new();
        let mut avl = AvlIndex::new();
        let mut hash = HashIndex::new();
        ingestor.ingest_text("doc1", "cat cat dog", &mut avl, &mut hash);
        ingestor.ingest_text("doc2", "cat bird", &mut avl, &mut hash);
        (avl, hash)
    }

    #[test]
    fn test_avl_path_reports_found_and_not_found() {
        let (avl, _) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let outcomes = evaluator.evaluate_avl(&avl, "cat fish");
        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            outcomes[0],
            QueryOutcome::Found {
                word: "cat".to_string(),
                documents: vec![
                    DocumentCount::new("doc1", 2),
                    DocumentCount::new("doc2", 1),
                ],
            }
        );
        assert_eq!(
            outcomes[1],
            QueryOutcome::NotFound {
                word: "fish".to_string()
            }
        );
    }

    #[test]
    fn test_hash_path_silent_on_absent_words() {
        let (_, hash) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let outcomes = evaluator.evaluate_hash(&hash, "fish unicorn");
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_hash_path_aggregates_repeated_tokens() {
        let (_, hash) = build_indexes();
        let evaluator = QueryEvaluator::new();

        // "dog" twice produces a single line; each lookup's counts land in
        // the same accumulator slot.
        let outcomes = evaluator.evaluate_hash(&hash, "dog dog");
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0],
            QueryOutcome::Found {
                word: "dog".to_string(),
                documents: vec![DocumentCount::new("doc1", 4)],
            }
        );
    }

    #[test]
    fn test_hash_path_sorted_by_word_then_document() {
        let (_, hash) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let outcomes = evaluator.evaluate_hash(&hash, "dog cat bird");
        let words: Vec<&str> = outcomes
            .iter()
            .map(|o| match o {
                QueryOutcome::Found { word, .. } => word.as_str(),
                QueryOutcome::NotFound { word } => word.as_str(),
            })
            .collect();
        assert_eq!(words, ["bird", "cat", "dog"]);
    }

    #[test]
    fn test_query_tokens_case_folded() {
        let (avl, hash) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let avl_outcomes = evaluator.evaluate_avl(&avl, "CAT");
        assert!(matches!(avl_outcomes[0], QueryOutcome::Found { .. }));

        let hash_outcomes = evaluator.evaluate_hash(&hash, "Dog!");
        assert_eq!(hash_outcomes.len(), 1);
    }

    #[test]
    fn test_render_lines_exact_format() {
        let (avl, _) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let lines = render_lines(&evaluator.evaluate_avl(&avl, "cat fish"));
        assert_eq!(
            lines,
            [
                "in Document doc1, cat found 2 times.",
                "in Document doc2, cat found 1 times.",
                "fish not found.",
            ]
        );
    }

    #[test]
    fn test_both_paths_agree_on_counts() {
        let (avl, hash) = build_indexes();
        let evaluator = QueryEvaluator::new();

        let avl_lines = render_lines(&evaluator.evaluate_avl(&avl, "cat"));
        let hash_lines = render_lines(&evaluator.evaluate_hash(&hash, "cat"));
        assert_eq!(avl_lines, hash_lines);
    }
}
