//! LessonLens: structured pedagogical metadata for textbook pages.
//!
//! Raw per-page text (from an external PDF extraction collaborator) flows
//! through independent heuristic analyzers into one schema-bound
//! [`PageMetadataRecord`](models::PageMetadataRecord) per page. An optional
//! language-model refinement pass overlays richer metadata; the merge keeps
//! heuristic findings whenever the model's answer is partial, and any
//! refinement failure degrades that page to heuristics-only instead of
//! failing the run.

pub mod config;
pub mod models;
pub mod pipeline;
pub mod source;

pub use config::{RefinementConfig, WorkflowConfig};
pub use models::PageMetadataRecord;
pub use pipeline::workflow::{MetadataWorkflow, RunOptions, WorkflowResult, WorkflowSummary};
pub use pipeline::WorkflowError;
pub use source::{PageTextSource, PlainTextSource, SourceError};
