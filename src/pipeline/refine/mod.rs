pub mod agent;
pub mod client;
pub mod parser;
pub mod prompt;

pub use agent::*;
pub use client::*;
pub use parser::*;
pub use prompt::*;

use thiserror::Error;

/// Refinement failures are always recovered locally: the caller keeps the
/// heuristic record and annotates it. None of these variants ever fails a
/// workflow run.
#[derive(Error, Debug)]
pub enum RefinementError {
    #[error("refinement credentials are not configured")]
    MissingCredentials,

    #[error("cannot reach the refinement service at {0}")]
    Connection(String),

    #[error("refinement service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("malformed refinement response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("metadata schema unavailable at {path}: {reason}")]
    SchemaUnavailable { path: String, reason: String },
}
