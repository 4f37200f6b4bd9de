//! Parsing of the agent's free-form reply into a partial record.
//!
//! The reply must contain exactly one JSON object (first `{` to last `}`).
//! Top-level parse failures are errors — the caller falls back to the
//! heuristic record. Individual fields and list items are parsed leniently:
//! an entry the model got wrong is skipped rather than sinking the rest of
//! an otherwise usable response.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{PartialMetadataRecord, PartialQaStatus};

use super::RefinementError;

/// Slice the single JSON object out of the reply.
pub fn extract_json_object(content: &str) -> Result<&str, RefinementError> {
    let start = content.find('{').ok_or_else(|| {
        RefinementError::MalformedResponse("no JSON object delimiters in response".into())
    })?;
    let end = content.rfind('}').ok_or_else(|| {
        RefinementError::MalformedResponse("no closing JSON delimiter in response".into())
    })?;
    if end <= start {
        return Err(RefinementError::MalformedResponse(
            "JSON delimiters out of order".into(),
        ));
    }
    Ok(&content[start..=end])
}

/// Parse the extracted object into a partial record overlay.
pub fn parse_partial_record(json: &str) -> Result<PartialMetadataRecord, RefinementError> {
    #[derive(Deserialize)]
    struct RawPartial {
        summary: Option<Value>,
        overview: Option<Value>,
        topics: Option<Vec<Value>>,
        instructional: Option<Value>,
        instructional_objectives: Option<Vec<Value>>,
        standards: Option<Vec<Value>>,
        assessment_profile: Option<Value>,
        instructional_strategy: Option<Value>,
        differentiation_supports: Option<Vec<Value>>,
        supplementary_resources: Option<Vec<Value>>,
        vocabulary_terms: Option<Vec<Value>>,
        equity_accessibility_flags: Option<Vec<Value>>,
        assets: Option<Value>,
        confidence_profile: Option<Value>,
        qa_status: Option<Value>,
        generated_at: Option<Value>,
        agent_versions: Option<Value>,
        processing_log: Option<Vec<Value>>,
    }

    let raw: RawPartial =
        serde_json::from_str(json).map_err(|e| RefinementError::JsonParsing(e.to_string()))?;

    Ok(PartialMetadataRecord {
        summary: raw.summary.and_then(from_value_lenient),
        overview: raw.overview.and_then(from_value_lenient),
        topics: raw.topics.map(|items| parse_items_lenient(&items)),
        instructional: raw.instructional.and_then(from_value_lenient),
        instructional_objectives: raw
            .instructional_objectives
            .map(|items| parse_items_lenient(&items)),
        standards: raw.standards.map(|items| parse_items_lenient(&items)),
        assessment_profile: raw.assessment_profile.and_then(from_value_lenient),
        instructional_strategy: raw.instructional_strategy.and_then(from_value_lenient),
        differentiation_supports: raw
            .differentiation_supports
            .map(|items| parse_items_lenient(&items)),
        supplementary_resources: raw
            .supplementary_resources
            .map(|items| parse_items_lenient(&items)),
        vocabulary_terms: raw.vocabulary_terms.map(|items| parse_items_lenient(&items)),
        equity_accessibility_flags: raw
            .equity_accessibility_flags
            .map(|items| parse_items_lenient(&items)),
        assets: raw.assets.and_then(from_value_lenient),
        confidence_profile: raw.confidence_profile.and_then(from_value_lenient),
        qa_status: raw
            .qa_status
            .and_then(from_value_lenient::<PartialQaStatus>),
        generated_at: raw.generated_at.and_then(from_value_lenient),
        agent_versions: raw.agent_versions.and_then(from_value_lenient),
        processing_log: raw.processing_log.map(|items| parse_items_lenient(&items)),
    })
}

/// A field the model shaped wrong is dropped, not fatal.
fn from_value_lenient<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value).ok()
}

/// Parse list items leniently — skip entries that fail to deserialize.
fn parse_items_lenient<T: DeserializeOwned>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QaState;

    #[test]
    fn extracts_object_between_first_and_last_brace() {
        let reply = "Here you go:\n{\"summary\": \"x\"}\nHope that helps!";
        assert_eq!(extract_json_object(reply).unwrap(), "{\"summary\": \"x\"}");
    }

    #[test]
    fn missing_delimiters_are_malformed() {
        assert!(matches!(
            extract_json_object("no json here"),
            Err(RefinementError::MalformedResponse(_))
        ));
        assert!(matches!(
            extract_json_object("} backwards {"),
            Err(RefinementError::MalformedResponse(_))
        ));
    }

    #[test]
    fn parses_partial_with_topics_and_summary() {
        let json = r#"{
            "summary": "Photosynthesis overview.",
            "topics": [
                {"label": "science.biology", "display_name": "biology", "confidence": 0.8, "evidence": "chloroplast terms"}
            ]
        }"#;
        let partial = parse_partial_record(json).unwrap();
        assert_eq!(partial.summary.as_deref(), Some("Photosynthesis overview."));
        let topics = partial.topics.unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].label, "science.biology");
        assert!(partial.standards.is_none());
    }

    #[test]
    fn invalid_top_level_json_is_an_error() {
        assert!(matches!(
            parse_partial_record("{not valid json"),
            Err(RefinementError::JsonParsing(_))
        ));
    }

    #[test]
    fn lenient_items_skip_malformed_entries() {
        let json = r#"{
            "topics": [
                {"label": "math.geometry", "display_name": "geometry", "confidence": 0.7, "evidence": "angles"},
                {"wrong_shape": true},
                {"label": "math.fractions", "display_name": "fractions", "confidence": 0.6, "evidence": "halves"}
            ]
        }"#;
        let partial = parse_partial_record(json).unwrap();
        let topics = partial.topics.unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[1].label, "math.fractions");
    }

    #[test]
    fn empty_list_stays_empty_not_absent() {
        let partial = parse_partial_record(r#"{"topics": []}"#).unwrap();
        assert_eq!(partial.topics.as_deref(), Some(&[][..]));
    }

    #[test]
    fn wrongly_shaped_scalar_is_dropped() {
        let partial = parse_partial_record(r#"{"summary": 42}"#).unwrap();
        assert!(partial.summary.is_none());
    }

    #[test]
    fn qa_status_parses_partially() {
        let json = r#"{"qa_status": {"status": "manual_review", "notes": ["Standards uncertain."]}}"#;
        let partial = parse_partial_record(json).unwrap();
        let qa = partial.qa_status.unwrap();
        assert_eq!(qa.status, Some(QaState::ManualReview));
        assert_eq!(qa.notes.as_deref(), Some(&["Standards uncertain.".to_string()][..]));
        assert!(qa.violations.is_none());
    }
}
