//! QA gate: the generated per-record verdict.

use crate::models::{ConfidenceProfile, QaState, QaStatus, QaViolation, ViolationSeverity};

/// Records whose overall confidence falls below this go to manual review.
pub const REVIEW_THRESHOLD: f64 = 0.35;

/// Evaluate a freshly composed record's confidence profile. Heuristic
/// records start approved with no violations; a weak overall score earns a
/// warning violation and a manual-review verdict. `retry` is never produced
/// here — it is reserved for agent-supplied statuses.
pub fn evaluate(confidence: &ConfidenceProfile) -> QaStatus {
    let mut status = QaState::Approved;
    let mut violations = Vec::new();

    if confidence.overall < REVIEW_THRESHOLD {
        violations.push(QaViolation {
            field: "confidence_profile".into(),
            issue: format!(
                "Overall confidence {:.2} is below the review threshold {REVIEW_THRESHOLD}.",
                confidence.overall
            ),
            severity: ViolationSeverity::Warning,
        });
        status = QaState::ManualReview;
    }

    QaStatus {
        status,
        violations,
        notes: Vec::new(),
    }
}
