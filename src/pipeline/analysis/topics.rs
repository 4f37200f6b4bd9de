//! Topic classification: frequency-ranked keywords mapped through a static
//! taxonomy table. Plain data, not dispatch — the table is the behavior.

use crate::models::Topic;

use super::tokenizer::TokenCounts;

/// Keyword → dotted taxonomy path.
const TOPIC_MAP: &[(&str, &str)] = &[
    ("algebra", "math.algebra"),
    ("equation", "math.algebra.linear_equations"),
    ("equations", "math.algebra.linear_equations"),
    ("fraction", "math.fractions"),
    ("fractions", "math.fractions"),
    ("geometry", "math.geometry"),
    ("triangle", "math.geometry.triangles"),
    ("biology", "science.biology"),
    ("chemistry", "science.chemistry"),
    ("physics", "science.physics"),
    ("history", "social.history"),
    ("grammar", "ela.grammar"),
    ("reading", "ela.reading_comprehension"),
    ("literature", "ela.literature"),
    ("ecosystem", "science.life.ecosystems"),
    ("energy", "science.physics.energy"),
    ("democracy", "social.civics"),
    ("geography", "social.geography"),
];

/// How many top-frequency keywords become topics.
const TOP_TOPIC_COUNT: usize = 5;

const KEYWORD_TOPIC_CONFIDENCE: f64 = 0.6;
const FALLBACK_TOPIC_CONFIDENCE: f64 = 0.3;

/// Classify the top keywords into topics, relevance-descending.
/// Guaranteed non-empty: zero surviving tokens yield the general fallback.
pub fn extract_topics(counts: &TokenCounts) -> Vec<Topic> {
    let top = counts.top(TOP_TOPIC_COUNT);
    if top.is_empty() {
        return vec![fallback_topic()];
    }
    top.into_iter().map(keyword_topic).collect()
}

fn keyword_topic(keyword: &str) -> Topic {
    let label = TOPIC_MAP
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, path)| (*path).to_string())
        .unwrap_or_else(|| format!("misc.{keyword}"));

    Topic {
        label,
        display_name: keyword.replace('_', " "),
        confidence: KEYWORD_TOPIC_CONFIDENCE,
        evidence: format!("Keyword frequency signal for “{keyword}”."),
    }
}

/// Single low-confidence topic used when the page has no usable tokens.
pub fn fallback_topic() -> Topic {
    Topic {
        label: "misc.general".into(),
        display_name: "General instructional content".into(),
        confidence: FALLBACK_TOPIC_CONFIDENCE,
        evidence: "Fallback topic due to limited textual signal.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::*;

    #[test]
    fn maps_known_keywords_to_taxonomy_paths() {
        let counts = tokenize("The equation balances. Another equation follows.");
        let topics = extract_topics(&counts);
        assert_eq!(topics[0].label, "math.algebra.linear_equations");
        assert!((topics[0].confidence - 0.6).abs() < f64::EPSILON);
        assert!(topics[0].evidence.contains("equation"));
    }

    #[test]
    fn unmapped_keywords_get_misc_labels() {
        let counts = tokenize("Volcanoes erupt. Volcanoes reshape coastlines.");
        let topics = extract_topics(&counts);
        assert_eq!(topics[0].label, "misc.volcanoes");
    }

    #[test]
    fn empty_input_falls_back_to_general_topic() {
        let topics = extract_topics(&tokenize(""));
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].label, "misc.general");
        assert!((topics[0].confidence - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn never_returns_more_than_five_topics() {
        let counts = tokenize("alpha beta gamma delta epsilon zeta eta theta");
        assert_eq!(extract_topics(&counts).len(), 5);
    }

    #[test]
    fn all_confidences_within_unit_interval() {
        for text in ["", "fractions and geometry", "zebra quagga okapi"] {
            for topic in extract_topics(&tokenize(text)) {
                assert!((0.0..=1.0).contains(&topic.confidence));
            }
        }
    }
}
