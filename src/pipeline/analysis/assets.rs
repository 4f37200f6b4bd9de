//! Structural cue detection: asset items and assessment question breakdown.

use std::collections::HashSet;

use crate::models::{AssetAssessment, AssetBundle, AssetItem, QuestionCount};

pub const NO_ASSET_WARNING: &str = "No explicit asset cues detected.";

/// Scan lowercased text for structural cues. Zero cues is not an error —
/// the bundle carries a warning and the record stays valid.
pub fn detect_assets(text: &str) -> AssetBundle {
    let lowered = text.to_lowercase();
    let mut items: Vec<AssetItem> = Vec::new();

    if lowered.contains("figure") {
        items.push(asset("diagram", "Figure referenced in text."));
    }
    if lowered.contains("table") {
        items.push(asset("table", "Table referenced in text."));
    }
    if lowered.contains("diagram") {
        items.push(asset("diagram", "Diagram referenced in text."));
    }
    if lowered.contains("exercise") || lowered.contains("practice") {
        items.push(asset("activity", "Practice exercise mentioned."));
    }
    if lowered.contains("lab") || lowered.contains("experiment") {
        items.push(asset("experiment", "Lab or experiment referenced."));
    }

    let warnings = if items.is_empty() {
        vec![NO_ASSET_WARNING.to_string()]
    } else {
        vec![]
    };

    AssetBundle {
        items: dedupe_items(items),
        assessment: AssetAssessment {
            has_assessment: lowered.contains("question") || lowered.contains("quiz"),
            items: infer_question_counts(&lowered),
        },
        warnings,
    }
}

fn asset(kind: &str, description: &str) -> AssetItem {
    AssetItem {
        kind: kind.into(),
        description: description.into(),
        bounding_box: None,
        notes: None,
    }
}

/// Dedupe key is the (type, description) pair.
fn dedupe_items(items: Vec<AssetItem>) -> Vec<AssetItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(format!("{}:{}", item.kind, item.description)))
        .collect()
}

/// Best-effort question-type breakdown when assessment cues exist.
fn infer_question_counts(lowered: &str) -> Vec<QuestionCount> {
    let mut items = Vec::new();
    if lowered.contains("multiple choice") {
        items.push(QuestionCount {
            question_type: "multiple_choice".into(),
            count: 3,
        });
    }
    if lowered.contains("short answer") {
        items.push(QuestionCount {
            question_type: "short_answer".into(),
            count: 2,
        });
    }
    if lowered.contains("essay") {
        items.push(QuestionCount {
            question_type: "open_response".into(),
            count: 1,
        });
    }
    if lowered.contains("true or false") || lowered.contains("true/false") {
        items.push(QuestionCount {
            question_type: "true_false".into(),
            count: 2,
        });
    }
    if items.is_empty() && (lowered.contains("question") || lowered.contains("quiz")) {
        items.push(QuestionCount {
            question_type: "other".into(),
            count: 3,
        });
    }
    items
}
