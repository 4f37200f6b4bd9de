//! Instructional strategy resolution.
//!
//! Priority-ordered checks against the already-computed pedagogy and the
//! page text; first branch wins. Group-work cues add a supporting strategy
//! regardless of which branch fired.

use std::collections::HashSet;

use crate::models::{InstructionalProfile, InstructionalStrategy, Pedagogy, PrimaryStrategy};

pub fn determine_strategy(
    text: &str,
    instructional: &InstructionalProfile,
) -> InstructionalStrategy {
    let lowered = text.to_lowercase();
    let mut supporting: Vec<String> = Vec::new();

    let (primary, confidence, rationale) =
        if instructional.pedagogy_type.value == Pedagogy::WorkedExample {
            supporting.push("guided_practice".into());
            (
                PrimaryStrategy::DirectInstruction,
                0.6,
                "Worked example language detected.",
            )
        } else if instructional.pedagogy_type.value == Pedagogy::IndependentPractice {
            (
                PrimaryStrategy::IndependentPractice,
                0.6,
                "Practice directives detected.",
            )
        } else if lowered.contains("project") || lowered.contains("investigation") {
            supporting.push("exploratory".into());
            (
                PrimaryStrategy::ProjectBased,
                0.55,
                "Project or investigation keywords present.",
            )
        } else if lowered.contains("discussion") || lowered.contains("debate") {
            supporting.push("collaborative_learning".into());
            (
                PrimaryStrategy::Discussion,
                0.55,
                "Discussion cues detected.",
            )
        } else {
            (
                PrimaryStrategy::Reference,
                0.5,
                "Defaulted to reference content.",
            )
        };

    if lowered.contains("group") || lowered.contains("partner") {
        supporting.push("collaborative_learning".into());
    }

    let mut seen = HashSet::new();
    supporting.retain(|s| seen.insert(s.clone()));

    InstructionalStrategy {
        primary,
        supporting,
        confidence,
        rationale: Some(rationale.to_string()),
    }
}
