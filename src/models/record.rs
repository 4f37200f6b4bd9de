//! Per-page metadata contract types.
//!
//! Field names and enum wire values mirror the published page-metadata
//! schema exactly; downstream viewers and graders deserialize these records
//! directly. A record is immutable once composed — refinement produces a new
//! value, never an in-place mutation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{
    AlignmentType, AssessmentPurpose, BloomLevel, FlagCategory, FlagSeverity, Pedagogy,
    PrimaryStrategy, QaState, ResourceAvailability, ResourceType, SupportType, TermComplexity,
    ViolationSeverity,
};

/// A classified topic, ordered by relevance within a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Dotted taxonomy path, e.g. `math.algebra.linear_equations`.
    pub label: String,
    pub display_name: String,
    pub confidence: f64,
    pub evidence: String,
}

/// A value judged by a heuristic rule, with the rule's confidence and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rated<T> {
    pub value: T,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimarySkill {
    pub label: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionalProfile {
    /// Grade band label ("K-2", "3-5", "6-8", "9-12", "higher-ed", "unspecified").
    pub grade_band: String,
    pub age_range: AgeRange,
    pub pedagogy_type: Rated<Pedagogy>,
    pub bloom_level: Rated<BloomLevel>,
    pub primary_skill: PrimarySkill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsAlignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_label: Option<String>,
    pub standard_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_band: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment_type: Option<AlignmentType>,
    pub alignment_confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCount {
    pub question_type: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAssessment {
    pub has_assessment: bool,
    pub items: Vec<QuestionCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetBundle {
    pub items: Vec<AssetItem>,
    pub assessment: AssetAssessment,
    /// Non-fatal notices, e.g. when no asset cues were found at all.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionalObjective {
    pub description: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_standards: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    pub purpose: AssessmentPurpose,
    pub question_summary: Vec<QuestionCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differentiation_notes: Option<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionalStrategy {
    pub primary: PrimaryStrategy,
    pub supporting: Vec<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentiationSupport {
    #[serde(rename = "type")]
    pub kind: SupportType,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryResource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub description: String,
    pub availability: ResourceAvailability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyTerm {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    pub complexity: TermComplexity,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityAccessibilityFlag {
    pub category: FlagCategory,
    pub description: String,
    pub severity: FlagSeverity,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Derived confidence summary. `overall` is always the rounded mean of the
/// three dimension means — never independently assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceProfile {
    pub overall: f64,
    pub topics_mean: f64,
    pub standards_mean: f64,
    pub instructional_mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaViolation {
    pub field: String,
    pub issue: String,
    pub severity: ViolationSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaStatus {
    pub status: QaState,
    pub violations: Vec<QaViolation>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOverview {
    pub key_points: Vec<String>,
    pub learning_focus: String,
    pub teacher_guidance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_prerequisites: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub agent: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// One schema-bound metadata record per page, keyed by
/// (book id, page number, source checksum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadataRecord {
    pub book_id: String,
    pub page_number: u32,
    /// Lowercase hex SHA-256 of the source document bytes.
    pub source_checksum: String,
    pub summary: String,
    pub overview: PageOverview,
    /// Relevance-ordered; never empty (falls back to a single general topic).
    pub topics: Vec<Topic>,
    pub instructional: InstructionalProfile,
    pub instructional_objectives: Vec<InstructionalObjective>,
    /// May be legitimately empty when no topic maps to a standard.
    pub standards: Vec<StandardsAlignment>,
    pub assessment_profile: AssessmentProfile,
    pub instructional_strategy: InstructionalStrategy,
    pub differentiation_supports: Vec<DifferentiationSupport>,
    pub supplementary_resources: Vec<SupplementaryResource>,
    pub vocabulary_terms: Vec<VocabularyTerm>,
    pub equity_accessibility_flags: Vec<EquityAccessibilityFlag>,
    pub assets: AssetBundle,
    pub confidence_profile: ConfidenceProfile,
    pub qa_status: QaStatus,
    pub generated_at: DateTime<Utc>,
    pub agent_versions: BTreeMap<String, String>,
    /// Append-only audit trail.
    pub processing_log: Vec<LogEntry>,
}

/// The refinement agent's overlay: shaped like the full record with every
/// field optional. Identity fields are deliberately absent so an agent
/// response can never relabel the record it refines.
#[derive(Debug, Clone, Default)]
pub struct PartialMetadataRecord {
    pub summary: Option<String>,
    pub overview: Option<PageOverview>,
    pub topics: Option<Vec<Topic>>,
    pub instructional: Option<InstructionalProfile>,
    pub instructional_objectives: Option<Vec<InstructionalObjective>>,
    pub standards: Option<Vec<StandardsAlignment>>,
    pub assessment_profile: Option<AssessmentProfile>,
    pub instructional_strategy: Option<InstructionalStrategy>,
    pub differentiation_supports: Option<Vec<DifferentiationSupport>>,
    pub supplementary_resources: Option<Vec<SupplementaryResource>>,
    pub vocabulary_terms: Option<Vec<VocabularyTerm>>,
    pub equity_accessibility_flags: Option<Vec<EquityAccessibilityFlag>>,
    pub assets: Option<AssetBundle>,
    pub confidence_profile: Option<ConfidenceProfile>,
    pub qa_status: Option<PartialQaStatus>,
    pub generated_at: Option<DateTime<Utc>>,
    pub agent_versions: Option<BTreeMap<String, String>>,
    pub processing_log: Option<Vec<LogEntry>>,
}

/// QA status overlay, merged field-by-field (non-empty wins).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialQaStatus {
    pub status: Option<QaState>,
    pub violations: Option<Vec<QaViolation>>,
    pub notes: Option<Vec<String>>,
}
