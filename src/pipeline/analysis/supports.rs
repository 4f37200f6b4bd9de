//! Differentiation supports, supplementary resources, and
//! equity/accessibility flags — independent keyword passes.

use crate::models::{
    AssessmentProfile, AssessmentPurpose, DifferentiationSupport, EquityAccessibilityFlag,
    FlagCategory, FlagSeverity, InstructionalProfile, ResourceAvailability, ResourceType,
    SupplementaryResource, SupportType,
};

pub fn identify_differentiation_supports(text: &str) -> Vec<DifferentiationSupport> {
    let lowered = text.to_lowercase();
    let mut supports = Vec::new();

    if lowered.contains("english learner") || lowered.contains("ell") {
        supports.push(DifferentiationSupport {
            kind: SupportType::Ell,
            description: "Mentions support for English learners.".into(),
            confidence: 0.65,
        });
    }
    if lowered.contains("challenge") || lowered.contains("enrichment") {
        supports.push(DifferentiationSupport {
            kind: SupportType::Enrichment,
            description: "Includes challenge or enrichment prompts.".into(),
            confidence: 0.55,
        });
    }
    if lowered.contains("support") || lowered.contains("scaffold") {
        supports.push(DifferentiationSupport {
            kind: SupportType::Scaffolding,
            description: "General scaffolding language detected.".into(),
            confidence: 0.5,
        });
    }

    supports
}

pub fn identify_resources(text: &str) -> Vec<SupplementaryResource> {
    let lowered = text.to_lowercase();
    let mut resources = Vec::new();

    if lowered.contains("worksheet") {
        resources.push(SupplementaryResource {
            kind: ResourceType::Worksheet,
            description: "Worksheet referenced on page.".into(),
            availability: ResourceAvailability::Included,
            link: None,
        });
    }
    if lowered.contains("online") || lowered.contains("digital") {
        resources.push(SupplementaryResource {
            kind: ResourceType::DigitalTool,
            description: "Digital resource or platform mentioned.".into(),
            availability: ResourceAvailability::External,
            link: None,
        });
    }
    if lowered.contains("video") {
        resources.push(SupplementaryResource {
            kind: ResourceType::Video,
            description: "Video resource referenced.".into(),
            availability: ResourceAvailability::External,
            link: None,
        });
    }
    if lowered.contains("manipulative") {
        resources.push(SupplementaryResource {
            kind: ResourceType::Manipulative,
            description: "Physical manipulative referenced.".into(),
            availability: ResourceAvailability::Optional,
            link: None,
        });
    }

    resources
}

pub fn flag_equity_accessibility(
    text: &str,
    instructional: &InstructionalProfile,
    assessment: &AssessmentProfile,
) -> Vec<EquityAccessibilityFlag> {
    let lowered = text.to_lowercase();
    let mut flags = Vec::new();

    if instructional.grade_band == "unspecified" {
        flags.push(EquityAccessibilityFlag {
            category: FlagCategory::ReadingLevel,
            description: "Grade band unclear; requires human verification.".into(),
            severity: FlagSeverity::Medium,
            confidence: 0.4,
            action: Some("Confirm target grade level.".into()),
        });
    }

    if assessment.purpose == AssessmentPurpose::Summative
        && assessment.differentiation_notes.is_none()
    {
        flags.push(EquityAccessibilityFlag {
            category: FlagCategory::Accessibility,
            description: "Summative assessment detected without differentiation notes.".into(),
            severity: FlagSeverity::Medium,
            confidence: 0.45,
            action: Some("Ensure accommodations are provided for assessment.".into()),
        });
    }

    if lowered.contains("device required") || lowered.contains("online access") {
        flags.push(EquityAccessibilityFlag {
            category: FlagCategory::TechnologyRequirement,
            description: "Page references required technology access.".into(),
            severity: FlagSeverity::Low,
            confidence: 0.5,
            action: Some("Verify tech availability for students.".into()),
        });
    }

    flags
}
