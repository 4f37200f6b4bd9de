//! Workflow and refinement configuration.
//!
//! Explicit configuration objects passed into components at construction —
//! there is no process-wide mutable state. Refinement activates only when a
//! credential is present, so runs without one skip the agent silently.

use std::path::PathBuf;

/// Environment variable holding the refinement service credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Environment variable overriding the refinement model.
pub const MODEL_ENV: &str = "CLAUDE_MODEL";

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-latest";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Maximum page text length (characters) embedded in a refinement prompt.
pub const DEFAULT_MAX_TEXT_LEN: usize = 12_000;

#[derive(Debug, Clone)]
pub struct RefinementConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_text_len: usize,
    /// Override for the schema document embedded in prompts.
    /// The bundled copy is used when unset.
    pub schema_path: Option<PathBuf>,
}

impl RefinementConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            schema_path: None,
        }
    }

    /// Read configuration from the environment. Returns `None` when the
    /// credential is absent — callers skip refinement in that case.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())?;
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.is_empty() {
                config.model = model;
            }
        }
        Some(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkflowConfig {
    /// `None` disables refinement; records stay heuristic-only.
    pub refinement: Option<RefinementConfig>,
}

impl WorkflowConfig {
    pub fn from_env() -> Self {
        Self {
            refinement: RefinementConfig::from_env(),
        }
    }
}
