//! Instructional objectives and the assessment profile.

use crate::models::{
    AssessmentProfile, AssessmentPurpose, AssetBundle, InstructionalObjective, StandardsAlignment,
    Topic,
};

use super::overview::{split_sentences, truncate_chars};

/// Derive objectives from the opening sentence and the topic focus.
/// Always yields at least one objective.
pub fn generate_objectives(
    text: &str,
    topics: &[Topic],
    standards: &[StandardsAlignment],
) -> Vec<InstructionalObjective> {
    let mut objectives = Vec::new();

    let first_topic = topics
        .first()
        .map(|t| t.display_name.clone())
        .unwrap_or_else(|| "content".to_string());
    let second_topic = topics.get(1).map(|t| t.display_name.clone());

    let sentences: Vec<&str> = split_sentences(text).into_iter().take(3).collect();
    if let Some(first) = sentences.first() {
        objectives.push(InstructionalObjective {
            description: format!(
                "Students will be able to explain the main idea: {}",
                truncate_chars(first, 120).trim()
            ),
            confidence: 0.55,
            evidence: Some(first.trim().to_string()),
            related_standards: Some(
                standards
                    .iter()
                    .take(1)
                    .map(|s| s.standard_id.clone())
                    .collect(),
            ),
        });
    }

    let scope = match &second_topic {
        Some(second) => format!("{first_topic} and {second}"),
        None => first_topic.clone(),
    };
    objectives.push(InstructionalObjective {
        description: format!(
            "Students will apply knowledge of {scope} to solve or discuss real-world situations."
        ),
        confidence: 0.5,
        evidence: Some(format!("Derived from topic focus on {first_topic}.")),
        related_standards: Some(standards.iter().map(|s| s.standard_id.clone()).collect()),
    });

    if objectives.is_empty() {
        objectives.push(InstructionalObjective {
            description: "Students will engage with the primary concept presented on this page."
                .into(),
            confidence: 0.4,
            evidence: None,
            related_standards: None,
        });
    }

    objectives
}

/// Classify assessment purpose from detector cues plus secondary keywords.
/// Later checks override earlier ones: quiz/test beats review/practice, and
/// explicit formative language beats both.
pub fn build_assessment_profile(text: &str, assets: &AssetBundle) -> AssessmentProfile {
    let lowered = text.to_lowercase();
    let mut purpose = AssessmentPurpose::None;
    if assets.assessment.has_assessment {
        if lowered.contains("review") || lowered.contains("practice") {
            purpose = AssessmentPurpose::Informal;
        }
        if lowered.contains("quiz") || lowered.contains("test") {
            purpose = AssessmentPurpose::Summative;
        }
        if lowered.contains("check for understanding") || lowered.contains("monitor") {
            purpose = AssessmentPurpose::Formative;
        }
    }

    let differentiation_notes = lowered
        .contains("support")
        .then(|| "Text references support or scaffolds around the assessment items.".to_string());

    let no_purpose = purpose == AssessmentPurpose::None;
    AssessmentProfile {
        purpose,
        question_summary: assets.assessment.items.clone(),
        differentiation_notes,
        confidence: if no_purpose { 0.3 } else { 0.55 },
        notes: no_purpose
            .then(|| "No explicit assessment cues detected; treat as informational page.".into()),
    }
}
