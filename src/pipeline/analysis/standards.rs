//! Standards alignment: topics mapped through a static curriculum table.

use crate::models::{AlignmentType, StandardsAlignment, Topic};

/// One entry of the static topic → curriculum-standard table.
struct StandardEntry {
    topic_label: &'static str,
    standard_id: &'static str,
    name: &'static str,
    description: &'static str,
    grade_band: &'static str,
}

const STANDARD_MAP: &[StandardEntry] = &[
    StandardEntry {
        topic_label: "math.fractions",
        standard_id: "CCSS.MATH.CONTENT.4.NF.B.3",
        name: "Understand addition and subtraction of fractions",
        description: "Apply and extend previous understandings of addition and subtraction to add and subtract fractions.",
        grade_band: "3-5",
    },
    StandardEntry {
        topic_label: "math.algebra.linear_equations",
        standard_id: "CCSS.MATH.CONTENT.8.EE.C.7",
        name: "Solve linear equations in one variable",
        description: "Give examples of linear equations in one variable and solve them.",
        grade_band: "6-8",
    },
    StandardEntry {
        topic_label: "science.biology",
        standard_id: "NGSS.MS-LS1-1",
        name: "Structure and function in organisms",
        description: "Conduct investigations to provide evidence that living things are made of cells.",
        grade_band: "6-8",
    },
    StandardEntry {
        topic_label: "science.chemistry",
        standard_id: "NGSS.HS-PS1-1",
        name: "Structure and properties of matter",
        description: "Use the periodic table as a model to predict properties of elements.",
        grade_band: "9-12",
    },
    StandardEntry {
        topic_label: "ela.reading_comprehension",
        standard_id: "CCSS.ELA-LITERACY.RL.5.1",
        name: "Quote accurately from a text",
        description: "Quote accurately from a text when explaining what the text says explicitly.",
        grade_band: "3-5",
    },
    StandardEntry {
        topic_label: "social.civics",
        standard_id: "NCSS.CIV.2.3",
        name: "Understand democratic principles",
        description: "Explain how democratic ideals are reflected in government.",
        grade_band: "6-8",
    },
];

const MAX_ALIGNMENT_CONFIDENCE: f64 = 0.9;

/// Map topics (in relevance order) to standards alignments. The first topic
/// with a table entry becomes the `primary` alignment, every later mapped
/// topic `supporting`. Unmapped topics are skipped, so the result may be
/// legitimately empty.
pub fn map_standards(topics: &[Topic]) -> Vec<StandardsAlignment> {
    let mut results: Vec<StandardsAlignment> = Vec::new();

    for topic in topics {
        let Some(entry) = STANDARD_MAP.iter().find(|e| e.topic_label == topic.label) else {
            continue;
        };
        let alignment_type = if results.is_empty() {
            AlignmentType::Primary
        } else {
            AlignmentType::Supporting
        };
        let review_action = match alignment_type {
            AlignmentType::Primary => "auto_approve",
            _ => "confirm_as_supporting",
        };
        results.push(StandardsAlignment {
            topic_label: Some(entry.topic_label.to_string()),
            standard_id: entry.standard_id.to_string(),
            name: entry.name.to_string(),
            description: Some(entry.description.to_string()),
            grade_band: Some(entry.grade_band.to_string()),
            alignment_type: Some(alignment_type),
            alignment_confidence: MAX_ALIGNMENT_CONFIDENCE.min(topic.confidence + 0.1),
            evidence: Some(format!("Mapped heuristically from topic {}.", topic.label)),
            review_action: Some(review_action.to_string()),
        });
    }

    results
}
