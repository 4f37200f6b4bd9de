//! The page intelligence agent: owns its configuration, client, and a
//! lazily-cached schema document. No process-wide state — every run builds
//! its own agent from an explicit [`RefinementConfig`].

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::config::RefinementConfig;
use crate::models::PartialMetadataRecord;

use super::client::{AnthropicClient, LlmClient};
use super::parser::{extract_json_object, parse_partial_record};
use super::prompt::{
    build_refinement_prompt, truncate_page_text, PageContext, PAGE_INTELLIGENCE_SYSTEM_PROMPT,
};
use super::RefinementError;

/// Extra attempts for transport-class failures. Parse failures are not
/// retried — the prompt is deterministic, so a fresh call rarely helps and
/// fallback is cheap.
const MAX_TRANSPORT_RETRIES: usize = 2;

/// Schema document shipped with the crate; overridable via config.
const BUNDLED_SCHEMA: &str = include_str!("../../../docs/schema/page-metadata.json");

pub struct PageIntelligenceAgent {
    client: Box<dyn LlmClient + Send + Sync>,
    model: String,
    max_text_len: usize,
    schema_path: Option<PathBuf>,
    schema: OnceLock<String>,
}

impl PageIntelligenceAgent {
    pub fn new(config: &RefinementConfig) -> Self {
        Self::with_client(Box::new(AnthropicClient::new(config)), config)
    }

    /// Inject a custom client (tests, alternative backends).
    pub fn with_client(
        client: Box<dyn LlmClient + Send + Sync>,
        config: &RefinementConfig,
    ) -> Self {
        Self {
            client,
            model: config.model.clone(),
            max_text_len: config.max_text_len,
            schema_path: config.schema_path.clone(),
            schema: OnceLock::new(),
        }
    }

    /// Model identifier, recorded in merged records' agent versions.
    pub fn version(&self) -> &str {
        &self.model
    }

    /// Load the schema on first use and cache it for the agent's lifetime.
    fn schema(&self) -> Result<&str, RefinementError> {
        if let Some(cached) = self.schema.get() {
            return Ok(cached);
        }
        let loaded = match &self.schema_path {
            Some(path) => std::fs::read_to_string(path).map_err(|e| {
                RefinementError::SchemaUnavailable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => BUNDLED_SCHEMA.to_string(),
        };
        Ok(self.schema.get_or_init(|| loaded))
    }

    /// Ask the model for a partial record overlay for one page. Any error
    /// here is recovered by the caller — the heuristic record stands.
    pub fn refine(&self, ctx: &PageContext<'_>) -> Result<PartialMetadataRecord, RefinementError> {
        let schema = self.schema()?;
        let page_text = truncate_page_text(ctx.page_text, self.max_text_len);
        let prompt = build_refinement_prompt(ctx, schema, &page_text);

        let response = self.complete_with_retry(&prompt, ctx)?;
        let json = extract_json_object(&response)?;
        parse_partial_record(json)
    }

    fn complete_with_retry(
        &self,
        prompt: &str,
        ctx: &PageContext<'_>,
    ) -> Result<String, RefinementError> {
        let mut last_error: Option<RefinementError> = None;

        for attempt in 0..=MAX_TRANSPORT_RETRIES {
            match self
                .client
                .complete(&self.model, PAGE_INTELLIGENCE_SYSTEM_PROMPT, prompt)
            {
                Ok(response) => return Ok(response),
                Err(e) if is_retryable(&e) && attempt < MAX_TRANSPORT_RETRIES => {
                    tracing::warn!(
                        book_id = ctx.book_id,
                        page = ctx.page_number,
                        attempt = attempt + 1,
                        error = %e,
                        "refinement call failed, retrying"
                    );
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| RefinementError::HttpClient("all retry attempts exhausted".into())))
    }
}

/// Transport failures may be transient; everything else fails fast.
fn is_retryable(e: &RefinementError) -> bool {
    matches!(
        e,
        RefinementError::Connection(_)
            | RefinementError::HttpClient(_)
            | RefinementError::Api { .. }
    )
}
