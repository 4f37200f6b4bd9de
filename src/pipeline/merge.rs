//! Reconciliation of the heuristic baseline with an agent overlay.
//!
//! The merge is deliberately asymmetric: scalar/object fields are replaced
//! whenever the agent supplied a value, but list fields are replaced only by
//! a *non-empty* agent list — an empty or absent list is not evidence of
//! "no items" and must not erase heuristic findings. Provenance (agent
//! versions, processing log) is appended, never dropped.

use crate::models::{PageMetadataRecord, PartialMetadataRecord, PartialQaStatus, QaStatus};

/// Pure merge: base record + agent overlay → new record. The base is never
/// mutated; identity fields always come from the base.
pub fn merge_records(
    base: &PageMetadataRecord,
    agent: &PartialMetadataRecord,
) -> PageMetadataRecord {
    let mut merged = base.clone();

    if let Some(summary) = &agent.summary {
        merged.summary = summary.clone();
    }
    if let Some(overview) = &agent.overview {
        merged.overview = overview.clone();
    }
    if let Some(instructional) = &agent.instructional {
        merged.instructional = instructional.clone();
    }
    if let Some(assessment) = &agent.assessment_profile {
        merged.assessment_profile = assessment.clone();
    }
    if let Some(strategy) = &agent.instructional_strategy {
        merged.instructional_strategy = strategy.clone();
    }
    if let Some(assets) = &agent.assets {
        merged.assets = assets.clone();
    }
    if let Some(confidence) = &agent.confidence_profile {
        merged.confidence_profile = confidence.clone();
    }
    if let Some(generated_at) = agent.generated_at {
        merged.generated_at = generated_at;
    }

    merged.topics = use_agent_list(&agent.topics, &base.topics);
    merged.instructional_objectives =
        use_agent_list(&agent.instructional_objectives, &base.instructional_objectives);
    merged.standards = use_agent_list(&agent.standards, &base.standards);
    merged.differentiation_supports = use_agent_list(
        &agent.differentiation_supports,
        &base.differentiation_supports,
    );
    merged.supplementary_resources = use_agent_list(
        &agent.supplementary_resources,
        &base.supplementary_resources,
    );
    merged.vocabulary_terms = use_agent_list(&agent.vocabulary_terms, &base.vocabulary_terms);
    merged.equity_accessibility_flags = use_agent_list(
        &agent.equity_accessibility_flags,
        &base.equity_accessibility_flags,
    );

    merged.qa_status = merge_qa_status(&base.qa_status, agent.qa_status.as_ref());

    if let Some(versions) = &agent.agent_versions {
        merged
            .agent_versions
            .extend(versions.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    if let Some(log) = &agent.processing_log {
        merged.processing_log.extend(log.iter().cloned());
    }

    merged
}

/// Non-empty agent list wins; anything else keeps the base.
fn use_agent_list<T: Clone>(agent: &Option<Vec<T>>, base: &[T]) -> Vec<T> {
    match agent {
        Some(list) if !list.is_empty() => list.clone(),
        _ => base.to_vec(),
    }
}

/// Field-by-field QA merge with the same non-empty-wins rule.
fn merge_qa_status(base: &QaStatus, agent: Option<&PartialQaStatus>) -> QaStatus {
    let Some(agent) = agent else {
        return base.clone();
    };
    QaStatus {
        status: agent.status.unwrap_or(base.status),
        violations: match &agent.violations {
            Some(v) if !v.is_empty() => v.clone(),
            _ => base.violations.clone(),
        },
        notes: match &agent.notes {
            Some(n) if !n.is_empty() => n.clone(),
            _ => base.notes.clone(),
        },
    }
}
