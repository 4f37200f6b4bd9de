//! Keyword extraction: frequency-ranked tokens with stop words filtered.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Words too common in instructional text to carry topical signal.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "from", "this", "have", "your", "about", "into", "page",
    "chapter", "lesson", "their", "there", "which", "would", "could", "should", "after", "before",
    "where", "when", "while", "they", "them", "each", "other", "also", "been", "than", "then",
    "over", "under", "using", "used", "such", "upon", "through", "these", "those", "will", "show",
    "because", "example", "question", "answer", "figure", "table", "activity",
];

/// Minimum token length kept after normalization.
const MIN_TOKEN_LEN: usize = 3;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern compiles"));

/// Token frequency counts preserving first-encounter order, which breaks
/// ties when ranking by count.
#[derive(Debug, Clone, Default)]
pub struct TokenCounts {
    entries: Vec<(String, usize)>,
}

impl TokenCounts {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, token: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Top `n` tokens by count, descending; stable sort keeps
    /// first-encounter order for equal counts.
    pub fn top(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(t, _)| t.as_str()).collect()
    }
}

/// Normalize text to lowercase alphanumeric tokens and count occurrences.
/// Empty or non-textual input yields empty counts — never an error.
pub fn tokenize(text: &str) -> TokenCounts {
    let lowered = text.to_lowercase();
    let cleaned = NON_ALPHANUMERIC.replace_all(&lowered, " ");

    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.len() < MIN_TOKEN_LEN || STOP_WORDS.contains(&token) {
            continue;
        }
        if let Some(&i) = index.get(token) {
            entries[i].1 += 1;
        } else {
            index.insert(token.to_string(), entries.len());
            entries.push((token.to_string(), 1));
        }
    }
    TokenCounts { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_token_frequencies() {
        let counts = tokenize("Energy flows. Energy transforms. Matter cycles.");
        assert_eq!(counts.count("energy"), 2);
        assert_eq!(counts.count("matter"), 1);
    }

    #[test]
    fn filters_stop_words_and_short_tokens() {
        let counts = tokenize("The cat sat on the mat with an ox");
        assert_eq!(counts.count("the"), 0);
        assert_eq!(counts.count("on"), 0, "two-letter tokens dropped");
        assert_eq!(counts.count("cat"), 1);
        assert_eq!(counts.count("mat"), 1);
    }

    #[test]
    fn strips_punctuation_keeps_digits() {
        let counts = tokenize("Solve: 2x+4=10, then 100 again; 100!");
        assert_eq!(counts.count("solve"), 1);
        assert_eq!(counts.count("100"), 2);
    }

    #[test]
    fn empty_text_yields_empty_counts() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
    }

    #[test]
    fn top_breaks_ties_by_first_encounter() {
        let counts = tokenize("alpha beta gamma beta");
        assert_eq!(counts.top(3), vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn top_caps_at_available_tokens() {
        let counts = tokenize("photosynthesis");
        assert_eq!(counts.top(5), vec!["photosynthesis"]);
    }
}
