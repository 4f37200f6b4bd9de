//! Run orchestration: checksum → per-page compose/refine/merge → summary →
//! optional persistence.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::WorkflowConfig;
use crate::models::{LogEntry, PageMetadataRecord};
use crate::source::PageTextSource;

use super::composer::{compose_heuristic_record, PageInput};
use super::merge::merge_records;
use super::persist::{resolve_output_dir, write_outputs, OutputPaths};
use super::refine::{PageContext, PageIntelligenceAgent};
use super::WorkflowError;

/// QA note recorded when refinement degrades to heuristics.
const FALLBACK_NOTE: &str = "Page intelligence agent unavailable; using heuristic metadata.";

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit book id; otherwise inferred from `source_path`, otherwise a
    /// timestamped fallback.
    pub book_id: Option<String>,
    pub source_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub persist: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub book_id: String,
    pub total_pages: usize,
    pub generated_at: DateTime<Utc>,
    pub source_checksum: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct WorkflowResult {
    /// Per-page records, index = page number - 1.
    pub records: Vec<PageMetadataRecord>,
    pub summary: WorkflowSummary,
    pub output_paths: Option<OutputPaths>,
}

/// The metadata workflow. Pages are processed independently from their own
/// text and static tables — no shared mutable state between pages.
pub struct MetadataWorkflow {
    agent: Option<PageIntelligenceAgent>,
}

impl MetadataWorkflow {
    /// Heuristic-only workflow; no external calls at all.
    pub fn heuristic_only() -> Self {
        Self { agent: None }
    }

    /// Refinement activates only when the config carries credentials;
    /// otherwise the agent is skipped silently.
    pub fn new(config: &WorkflowConfig) -> Self {
        Self {
            agent: config.refinement.as_ref().map(PageIntelligenceAgent::new),
        }
    }

    /// Inject a pre-built agent (tests, custom clients).
    pub fn with_agent(agent: PageIntelligenceAgent) -> Self {
        Self { agent: Some(agent) }
    }

    /// Process a whole document. Fails only on input errors (zero pages,
    /// unreadable source) and, when persistence was requested, on I/O —
    /// refinement failures degrade single pages and never abort the run.
    pub fn run(
        &self,
        source: &dyn PageTextSource,
        document: &[u8],
        options: &RunOptions,
    ) -> Result<WorkflowResult, WorkflowError> {
        let checksum = source_checksum(document);
        let book_id = resolve_book_id(options);

        let pages = source.extract_pages(document)?;
        if pages.is_empty() {
            return Err(WorkflowError::EmptyDocument);
        }

        tracing::info!(book_id = %book_id, pages = pages.len(), "metadata workflow started");

        let mut records = Vec::with_capacity(pages.len());
        for (index, text) in pages.iter().enumerate() {
            let page_number = (index + 1) as u32;
            records.push(self.build_page_record(&book_id, page_number, text, &checksum));
        }

        let output_dir = options
            .persist
            .then(|| resolve_output_dir(&book_id, options.output_dir.as_deref()));

        let summary = WorkflowSummary {
            book_id,
            total_pages: records.len(),
            generated_at: Utc::now(),
            source_checksum: checksum,
            output_dir: output_dir.clone(),
        };

        let output_paths = match &output_dir {
            Some(dir) => Some(write_outputs(&records, &summary, dir)?),
            None => None,
        };

        tracing::info!(
            book_id = %summary.book_id,
            records = records.len(),
            "metadata workflow finished"
        );

        Ok(WorkflowResult {
            records,
            summary,
            output_paths,
        })
    }

    fn build_page_record(
        &self,
        book_id: &str,
        page_number: u32,
        text: &str,
        checksum: &str,
    ) -> PageMetadataRecord {
        let _span = tracing::info_span!("page_metadata", book_id, page = page_number).entered();

        let heuristic = compose_heuristic_record(&PageInput {
            book_id,
            page_number,
            text,
            source_checksum: checksum,
        });

        let Some(agent) = &self.agent else {
            return heuristic;
        };

        let ctx = PageContext {
            book_id,
            page_number,
            source_checksum: checksum,
            page_text: text,
        };

        match agent.refine(&ctx) {
            Ok(partial) => {
                let mut merged = merge_records(&heuristic, &partial);
                merged.processing_log.push(LogEntry {
                    agent: "page_intelligence".into(),
                    message: "Merged page intelligence response.".into(),
                    timestamp: Utc::now(),
                });
                merged
                    .agent_versions
                    .insert("page_intelligence".into(), agent.version().to_string());
                merged
            }
            Err(error) => {
                tracing::warn!(
                    book_id,
                    page = page_number,
                    error = %error,
                    "refinement failed; keeping heuristic record"
                );
                let mut record = heuristic;
                record.processing_log.push(LogEntry {
                    agent: "page_intelligence".into(),
                    message: format!("Fell back to heuristics: {error}"),
                    timestamp: Utc::now(),
                });
                record.qa_status.notes.push(FALLBACK_NOTE.into());
                record
            }
        }
    }
}

/// Lowercase hex SHA-256 of the source document bytes — the stable
/// fingerprint used for idempotence and cache keys.
pub fn source_checksum(document: &[u8]) -> String {
    use std::fmt::Write;

    let digest = Sha256::digest(document);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

/// Derive a URL-safe book id from a source file path: basename without
/// extension, lowercased, non-alphanumeric runs collapsed to dashes.
pub fn infer_book_id(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("book");

    let mut id = String::with_capacity(stem.len());
    let mut last_dash = false;
    for ch in stem.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            id.push(ch);
            last_dash = false;
        } else if !last_dash {
            id.push('-');
            last_dash = true;
        }
    }
    id.trim_matches('-').to_string()
}

fn resolve_book_id(options: &RunOptions) -> String {
    if let Some(book_id) = &options.book_id {
        return book_id.clone();
    }
    if let Some(path) = &options.source_path {
        return infer_book_id(path);
    }
    format!("book-{}", Utc::now().timestamp_millis())
}
