//! Instructional profiling: grade band, pedagogy, Bloom level, primary skill.
//!
//! Every classifier is an ordered rule list evaluated top to bottom, first
//! match wins. Keeping the rules as data keeps the priority order auditable:
//! co-occurring cues resolve to whichever rule appears first.

use crate::models::{
    AgeRange, BloomLevel, InstructionalProfile, Pedagogy, PrimarySkill, Rated, Topic,
};

use super::topics::fallback_topic;

/// Cue over lowercased page text. `All` requires every keyword.
enum Cue {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Cue {
    fn matches(&self, text: &str) -> bool {
        match self {
            Cue::Any(keywords) => keywords.iter().any(|k| text.contains(k)),
            Cue::All(keywords) => keywords.iter().all(|k| text.contains(k)),
        }
    }
}

struct GradeBandRule {
    value: &'static str,
    age: (u8, u8),
    confidence: f64,
    keywords: &'static [&'static str],
}

/// Priority order: youngest band first.
const GRADE_BAND_RULES: &[GradeBandRule] = &[
    GradeBandRule {
        value: "K-2",
        age: (5, 7),
        confidence: 0.55,
        keywords: &["alphabet", "phonics", "counting", "shapes"],
    },
    GradeBandRule {
        value: "3-5",
        age: (8, 11),
        confidence: 0.6,
        keywords: &["fraction", "fractions", "paragraph", "story", "region"],
    },
    GradeBandRule {
        value: "6-8",
        age: (11, 14),
        confidence: 0.65,
        keywords: &["algebra", "equation", "ratio", "cells", "ecosystem"],
    },
    GradeBandRule {
        value: "9-12",
        age: (14, 18),
        confidence: 0.7,
        keywords: &[
            "derivative",
            "molecule",
            "constitution",
            "trigonometry",
            "stoichiometry",
        ],
    },
    GradeBandRule {
        value: "higher-ed",
        age: (18, 99),
        confidence: 0.6,
        keywords: &["theorem", "thermodynamics", "quantum", "essay"],
    },
];

struct PedagogyRule {
    cue: Cue,
    value: Pedagogy,
    confidence: f64,
    rationale: &'static str,
}

const PEDAGOGY_RULES: &[PedagogyRule] = &[
    PedagogyRule {
        cue: Cue::Any(&["multiple choice", "answer the questions"]),
        value: Pedagogy::Assessment,
        confidence: 0.65,
        rationale: "Instructions to answer questions detected.",
    },
    PedagogyRule {
        cue: Cue::All(&["step", "example"]),
        value: Pedagogy::WorkedExample,
        confidence: 0.6,
        rationale: "Mentions of step-by-step example.",
    },
    PedagogyRule {
        cue: Cue::Any(&["practice", "try it"]),
        value: Pedagogy::IndependentPractice,
        confidence: 0.55,
        rationale: "Practice directives detected.",
    },
    PedagogyRule {
        cue: Cue::Any(&["discussion", "investigate"]),
        value: Pedagogy::Discussion,
        confidence: 0.5,
        rationale: "Collaborative cues detected.",
    },
    PedagogyRule {
        cue: Cue::Any(&["lab", "experiment"]),
        value: Pedagogy::LabActivity,
        confidence: 0.55,
        rationale: "Hands-on lab language detected.",
    },
];

struct BloomRule {
    keywords: &'static [&'static str],
    value: BloomLevel,
    confidence: f64,
    rationale: &'static str,
}

const BLOOM_RULES: &[BloomRule] = &[
    BloomRule {
        keywords: &["define", "list"],
        value: BloomLevel::Remember,
        confidence: 0.55,
        rationale: "Recall verbs detected.",
    },
    BloomRule {
        keywords: &["explain", "describe"],
        value: BloomLevel::Understand,
        confidence: 0.6,
        rationale: "Explanation verbs detected.",
    },
    BloomRule {
        keywords: &["solve", "apply"],
        value: BloomLevel::Apply,
        confidence: 0.6,
        rationale: "Applied practice cues detected.",
    },
    BloomRule {
        keywords: &["analyze", "compare"],
        value: BloomLevel::Analyze,
        confidence: 0.55,
        rationale: "Analysis verbs detected.",
    },
    BloomRule {
        keywords: &["design", "construct"],
        value: BloomLevel::Create,
        confidence: 0.5,
        rationale: "Creation verbs detected.",
    },
];

/// Floor for the primary-skill confidence discount.
const PRIMARY_SKILL_FLOOR: f64 = 0.4;

/// Infer the full instructional profile for one page. State-free per call.
pub fn infer_instructional_profile(text: &str, topics: &[Topic]) -> InstructionalProfile {
    let lowered = text.to_lowercase();
    let grade = pick_grade_band(&lowered, topics);
    let pedagogy = detect_pedagogy(&lowered);
    let bloom = detect_bloom_level(&lowered);
    let primary = topics.first().cloned().unwrap_or_else(fallback_topic);

    InstructionalProfile {
        grade_band: grade.value.to_string(),
        age_range: AgeRange {
            min: grade.age.0,
            max: grade.age.1,
            confidence: grade.confidence,
        },
        pedagogy_type: pedagogy,
        bloom_level: bloom,
        primary_skill: PrimarySkill {
            label: primary.label,
            confidence: PRIMARY_SKILL_FLOOR.max(primary.confidence - 0.1),
            rationale: Some(primary.evidence),
        },
    }
}

struct GradeBandMatch {
    value: &'static str,
    age: (u8, u8),
    confidence: f64,
}

fn pick_grade_band(text: &str, topics: &[Topic]) -> GradeBandMatch {
    for rule in GRADE_BAND_RULES {
        if rule.keywords.iter().any(|k| text.contains(k)) {
            return GradeBandMatch {
                value: rule.value,
                age: rule.age,
                confidence: rule.confidence,
            };
        }
    }

    // Quantitative subject without explicit grade cues: middle-school guess.
    if topics
        .iter()
        .any(|t| t.label.starts_with("math.") || t.label.starts_with("science."))
    {
        return GradeBandMatch {
            value: "6-8",
            age: (11, 14),
            confidence: 0.45,
        };
    }

    GradeBandMatch {
        value: "unspecified",
        age: (10, 18),
        confidence: 0.3,
    }
}

fn detect_pedagogy(text: &str) -> Rated<Pedagogy> {
    for rule in PEDAGOGY_RULES {
        if rule.cue.matches(text) {
            return Rated {
                value: rule.value,
                confidence: rule.confidence,
                rationale: Some(rule.rationale.to_string()),
            };
        }
    }
    Rated {
        value: Pedagogy::Reference,
        confidence: 0.4,
        rationale: Some("Default classification for informational content.".into()),
    }
}

fn detect_bloom_level(text: &str) -> Rated<BloomLevel> {
    for rule in BLOOM_RULES {
        if rule.keywords.iter().any(|k| text.contains(k)) {
            return Rated {
                value: rule.value,
                confidence: rule.confidence,
                rationale: Some(rule.rationale.to_string()),
            };
        }
    }
    Rated {
        value: BloomLevel::Unspecified,
        confidence: 0.3,
        rationale: Some("No Bloom verbs detected.".into()),
    }
}
