//! Page summary and teacher-facing overview.

use crate::models::{InstructionalObjective, InstructionalProfile, PageOverview, Pedagogy};

pub const EMPTY_PAGE_SUMMARY: &str = "No textual content detected on this page.";
const NO_SUMMARY_KEY_POINT: &str = "No clear summary available; requires manual review.";

/// Split text into sentences: a boundary is `.`, `!` or `?` followed by
/// whitespace (the whitespace is consumed). Trailing text without a
/// terminator is its own sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > i + 1 {
                sentences.push(&text[start..i + 1]);
                start = j;
                i = j;
                continue;
            }
        }
        i += 1;
    }
    if start < bytes.len() {
        sentences.push(&text[start..]);
    }
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Truncate to at most `max` characters on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Two-sentence extractive summary; fixed message for empty pages.
pub fn generate_summary(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_PAGE_SUMMARY.to_string();
    }
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        let head = truncate_chars(text, 160);
        return if text.chars().count() > 160 {
            format!("{head}…")
        } else {
            head.to_string()
        };
    }
    sentences[..sentences.len().min(2)].join(" ")
}

/// Assemble the overview block from the summary, objectives and profile.
pub fn create_overview(
    summary: &str,
    text: &str,
    instructional: &InstructionalProfile,
    objectives: &[InstructionalObjective],
) -> PageOverview {
    let mut key_points: Vec<String> = split_sentences(summary)
        .into_iter()
        .map(|s| truncate_chars(s.trim(), 160).to_string())
        .collect();
    if key_points.is_empty() {
        key_points.push(NO_SUMMARY_KEY_POINT.to_string());
    }
    key_points.truncate(3);

    let learning_focus = objectives
        .first()
        .map(|o| o.description.clone())
        .unwrap_or_else(|| "Review primary concepts presented on this page.".to_string());

    let teacher_guidance = if instructional.pedagogy_type.value == Pedagogy::Reference {
        "Use this page to prime discussion or set context; add your own checks for understanding."
    } else {
        "Follow the suggested flow and monitor student responses at key checkpoints."
    }
    .to_string();

    let student_prerequisites = text
        .to_lowercase()
        .contains("review")
        .then(|| "Students should review prerequisite material mentioned on the page.".to_string());

    PageOverview {
        key_points,
        learning_focus,
        teacher_guidance,
        student_prerequisites,
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenizer::tokenize;
    use super::super::topics::extract_topics;
    use super::*;
    use crate::pipeline::analysis::instructional::infer_instructional_profile;

    fn profile_for(text: &str) -> InstructionalProfile {
        let topics = extract_topics(&tokenize(text));
        infer_instructional_profile(text, &topics)
    }

    #[test]
    fn splits_on_terminator_plus_whitespace() {
        let sentences = split_sentences("First point. Second point! Third?");
        assert_eq!(sentences, vec!["First point.", "Second point!", "Third?"]);
    }

    #[test]
    fn decimal_points_do_not_split() {
        let sentences = split_sentences("The value 3.14 appears. Next sentence.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The value 3.14 appears.");
    }

    #[test]
    fn trailing_text_without_terminator_is_kept() {
        let sentences = split_sentences("Done. And a fragment");
        assert_eq!(sentences, vec!["Done.", "And a fragment"]);
    }

    #[test]
    fn summary_for_empty_page_is_fixed_message() {
        assert_eq!(generate_summary(""), EMPTY_PAGE_SUMMARY);
    }

    #[test]
    fn summary_takes_first_two_sentences() {
        let summary = generate_summary("One. Two. Three. Four.");
        assert_eq!(summary, "One. Two.");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 120), "short");
    }

    #[test]
    fn overview_key_points_come_from_summary() {
        let text = "Cells divide constantly. Tissues grow from cells. Organs form from tissues.";
        let profile = profile_for(text);
        let summary = generate_summary(text);
        let overview = create_overview(&summary, text, &profile, &[]);
        assert_eq!(overview.key_points.len(), 2);
        assert_eq!(overview.key_points[0], "Cells divide constantly.");
    }

    #[test]
    fn overview_caps_key_points_at_three() {
        let summary = "A. B. C. D. E.";
        let profile = profile_for(summary);
        let overview = create_overview(summary, summary, &profile, &[]);
        assert_eq!(overview.key_points.len(), 3);
    }

    #[test]
    fn reference_pages_get_priming_guidance() {
        let text = "Rivers carve valleys.";
        let profile = profile_for(text);
        let overview = create_overview("Rivers carve valleys.", text, &profile, &[]);
        assert!(overview.teacher_guidance.contains("prime discussion"));
    }

    #[test]
    fn non_reference_pages_get_flow_guidance() {
        let text = "Practice the steps until fluent.";
        let profile = profile_for(text);
        let overview = create_overview("Practice the steps until fluent.", text, &profile, &[]);
        assert!(overview.teacher_guidance.contains("monitor student responses"));
    }

    #[test]
    fn review_cue_sets_prerequisites() {
        let text = "Review last week's vocabulary first.";
        let profile = profile_for(text);
        let overview = create_overview("Review last week's vocabulary first.", text, &profile, &[]);
        assert!(overview.student_prerequisites.is_some());

        let text = "Fresh material today.";
        let profile = profile_for(text);
        let overview = create_overview("Fresh material today.", text, &profile, &[]);
        assert!(overview.student_prerequisites.is_none());
    }

    #[test]
    fn learning_focus_prefers_first_objective() {
        let text = "Plants make food.";
        let profile = profile_for(text);
        let objective = InstructionalObjective {
            description: "Students will trace energy through a food web.".into(),
            confidence: 0.5,
            evidence: None,
            related_standards: None,
        };
        let overview = create_overview("Plants make food.", text, &profile, &[objective]);
        assert!(overview.learning_focus.contains("food web"));
    }
}
