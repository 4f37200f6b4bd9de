//! Vocabulary extraction from the frequency-ranked token list.

use crate::models::{TermComplexity, VocabularyTerm};

use super::tokenizer::TokenCounts;

/// How many top-frequency terms become vocabulary entries.
const VOCABULARY_TERM_COUNT: usize = 6;

const VOCABULARY_CONFIDENCE: f64 = 0.45;

/// The two highest-frequency terms are tagged grade-level, the rest
/// introductory.
pub fn extract_vocabulary_terms(counts: &TokenCounts) -> Vec<VocabularyTerm> {
    counts
        .top(VOCABULARY_TERM_COUNT)
        .into_iter()
        .enumerate()
        .map(|(index, term)| VocabularyTerm {
            term: term.to_string(),
            definition: None,
            complexity: if index <= 1 {
                TermComplexity::GradeLevel
            } else {
                TermComplexity::Introductory
            },
            confidence: VOCABULARY_CONFIDENCE,
            notes: Some("Heuristic extraction based on term frequency.".into()),
        })
        .collect()
}
