pub mod analysis;
pub mod composer;
pub mod merge;
pub mod persist;
pub mod quality;
pub mod refine;
pub mod workflow;

use thiserror::Error;

use crate::source::SourceError;

/// Run-level failures. Only input errors and requested-persistence I/O
/// failures surface here; per-page refinement problems degrade the page's
/// record instead.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("no pages extracted from source document")]
    EmptyDocument,

    #[error("source extraction failed: {0}")]
    Source(#[from] SourceError),

    #[error("failed to write workflow output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}
