//! Run output: newline-delimited records plus a small audit summary.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::PageMetadataRecord;

use super::workflow::WorkflowSummary;
use super::WorkflowError;

pub const METADATA_FILE: &str = "page-metadata.jsonl";
pub const AUDIT_DIR: &str = "audit";
pub const AUDIT_SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub metadata_jsonl: PathBuf,
    pub audit_summary: PathBuf,
}

/// Default output directory for a book when none is configured.
pub fn resolve_output_dir(book_id: &str, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from("out").join(book_id),
    }
}

/// The audit file carries run identity only, not the output location.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditSummary<'a> {
    book_id: &'a str,
    total_pages: usize,
    generated_at: &'a DateTime<Utc>,
    source_checksum: &'a str,
}

/// Write one record per line in page order, then the audit summary.
/// A single writer owns the stream, so lines never interleave.
pub fn write_outputs(
    records: &[PageMetadataRecord],
    summary: &WorkflowSummary,
    dir: &Path,
) -> Result<OutputPaths, WorkflowError> {
    let audit_dir = dir.join(AUDIT_DIR);
    fs::create_dir_all(&audit_dir)?;

    let metadata_path = dir.join(METADATA_FILE);
    let file = fs::File::create(&metadata_path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let audit_path = audit_dir.join(AUDIT_SUMMARY_FILE);
    let audit = AuditSummary {
        book_id: &summary.book_id,
        total_pages: summary.total_pages,
        generated_at: &summary.generated_at,
        source_checksum: &summary.source_checksum,
    };
    fs::write(&audit_path, serde_json::to_vec_pretty(&audit)?)?;

    Ok(OutputPaths {
        metadata_jsonl: metadata_path,
        audit_summary: audit_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::composer::{compose_heuristic_record, PageInput};

    fn sample_run() -> (Vec<PageMetadataRecord>, WorkflowSummary) {
        let records: Vec<PageMetadataRecord> = (1..=2)
            .map(|page| {
                compose_heuristic_record(&PageInput {
                    book_id: "geo-1",
                    page_number: page,
                    text: "Maps model the world.",
                    source_checksum: "c0ffee",
                })
            })
            .collect();
        let summary = WorkflowSummary {
            book_id: "geo-1".into(),
            total_pages: records.len(),
            generated_at: Utc::now(),
            source_checksum: "c0ffee".into(),
            output_dir: None,
        };
        (records, summary)
    }

    #[test]
    fn resolve_prefers_explicit_directory() {
        let dir = resolve_output_dir("geo-1", Some(Path::new("/tmp/custom")));
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn resolve_defaults_to_out_book_id() {
        let dir = resolve_output_dir("geo-1", None);
        assert_eq!(dir, PathBuf::from("out").join("geo-1"));
    }

    #[test]
    fn writes_one_record_per_line_in_page_order() {
        let tmp = tempfile::tempdir().unwrap();
        let (records, summary) = sample_run();
        let paths = write_outputs(&records, &summary, tmp.path()).unwrap();

        let contents = fs::read_to_string(&paths.metadata_jsonl).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["page_number"], (i + 1) as u64);
            assert_eq!(value["book_id"], "geo-1");
        }
    }

    #[test]
    fn audit_summary_has_camel_case_run_identity() {
        let tmp = tempfile::tempdir().unwrap();
        let (records, summary) = sample_run();
        let paths = write_outputs(&records, &summary, tmp.path()).unwrap();

        let audit: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&paths.audit_summary).unwrap()).unwrap();
        assert_eq!(audit["bookId"], "geo-1");
        assert_eq!(audit["totalPages"], 2);
        assert_eq!(audit["sourceChecksum"], "c0ffee");
        assert!(audit.get("outputDir").is_none());
    }

    #[test]
    fn unwritable_directory_propagates_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where the directory should be.
        let blocked = tmp.path().join("blocked");
        fs::write(&blocked, b"occupied").unwrap();

        let (records, summary) = sample_run();
        let result = write_outputs(&records, &summary, &blocked);
        assert!(matches!(result, Err(WorkflowError::Io(_))));
    }
}
