use thiserror::Error;

/// Raised when a wire string does not match any variant of a contract enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} value: {value}")]
pub struct EnumParseError {
    pub field: &'static str,
    pub value: String,
}

/// Macro to generate a contract enum with exact wire names.
/// Serialization goes through `as_str` so the JSON form always matches the
/// published schema, independent of Rust variant naming.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EnumParseError {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(AlignmentType {
    Primary => "primary",
    Supporting => "supporting",
    Extension => "extension",
    Review => "review",
});

str_enum!(AssessmentPurpose {
    None => "none",
    Informal => "informal",
    Formative => "formative",
    Summative => "summative",
    Diagnostic => "diagnostic",
});

str_enum!(Pedagogy {
    Lecture => "lecture",
    WorkedExample => "worked_example",
    GuidedPractice => "guided_practice",
    IndependentPractice => "independent_practice",
    Assessment => "assessment",
    LabActivity => "lab_activity",
    Project => "project",
    Reference => "reference",
    Discussion => "discussion",
    Other => "other",
});

str_enum!(BloomLevel {
    Remember => "remember",
    Understand => "understand",
    Apply => "apply",
    Analyze => "analyze",
    Evaluate => "evaluate",
    Create => "create",
    Unspecified => "unspecified",
});

str_enum!(PrimaryStrategy {
    DirectInstruction => "direct_instruction",
    GuidedPractice => "guided_practice",
    IndependentPractice => "independent_practice",
    CollaborativeLearning => "collaborative_learning",
    ProjectBased => "project_based",
    Exploratory => "exploratory",
    Reference => "reference",
    Discussion => "discussion",
    Other => "other",
});

str_enum!(SupportType {
    Ell => "ELL",
    Intervention => "intervention",
    Enrichment => "enrichment",
    Scaffolding => "scaffolding",
    Extension => "extension",
    Other => "other",
});

str_enum!(ResourceType {
    Worksheet => "worksheet",
    DigitalTool => "digital_tool",
    Manipulative => "manipulative",
    Video => "video",
    Assessment => "assessment",
    Other => "other",
});

str_enum!(ResourceAvailability {
    Included => "included",
    External => "external",
    Optional => "optional",
});

str_enum!(TermComplexity {
    Introductory => "introductory",
    GradeLevel => "grade_level",
    Advanced => "advanced",
    RequiresSupport => "requires_support",
});

str_enum!(FlagCategory {
    ReadingLevel => "reading_level",
    CulturalRelevance => "cultural_relevance",
    Accessibility => "accessibility",
    LanguageSupport => "language_support",
    TechnologyRequirement => "technology_requirement",
    Other => "other",
});

str_enum!(FlagSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(QaState {
    Approved => "approved",
    Retry => "retry",
    ManualReview => "manual_review",
});

str_enum!(ViolationSeverity {
    Info => "info",
    Warning => "warning",
    Error => "error",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn alignment_type_round_trip() {
        for (variant, s) in [
            (AlignmentType::Primary, "primary"),
            (AlignmentType::Supporting, "supporting"),
            (AlignmentType::Extension, "extension"),
            (AlignmentType::Review, "review"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AlignmentType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn assessment_purpose_round_trip() {
        for (variant, s) in [
            (AssessmentPurpose::None, "none"),
            (AssessmentPurpose::Informal, "informal"),
            (AssessmentPurpose::Formative, "formative"),
            (AssessmentPurpose::Summative, "summative"),
            (AssessmentPurpose::Diagnostic, "diagnostic"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AssessmentPurpose::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn qa_state_round_trip() {
        for (variant, s) in [
            (QaState::Approved, "approved"),
            (QaState::Retry, "retry"),
            (QaState::ManualReview, "manual_review"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(QaState::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn support_type_ell_keeps_uppercase_wire_name() {
        assert_eq!(SupportType::Ell.as_str(), "ELL");
        assert_eq!(SupportType::from_str("ELL").unwrap(), SupportType::Ell);
        assert!(SupportType::from_str("ell").is_err());
    }

    #[test]
    fn serializes_through_wire_name() {
        let json = serde_json::to_string(&Pedagogy::WorkedExample).unwrap();
        assert_eq!(json, "\"worked_example\"");
        let json = serde_json::to_string(&PrimaryStrategy::ProjectBased).unwrap();
        assert_eq!(json, "\"project_based\"");
    }

    #[test]
    fn deserializes_from_wire_name() {
        let value: BloomLevel = serde_json::from_str("\"analyze\"").unwrap();
        assert_eq!(value, BloomLevel::Analyze);
        assert!(serde_json::from_str::<BloomLevel>("\"Analyze\"").is_err());
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(AlignmentType::from_str("tangential").is_err());
        assert!(QaState::from_str("").is_err());
        let err = Pedagogy::from_str("chalk_talk").unwrap_err();
        assert_eq!(err.field, "Pedagogy");
        assert_eq!(err.value, "chalk_talk");
    }
}
