//! Schema-constrained prompt for the page intelligence agent.

pub const PAGE_INTELLIGENCE_SYSTEM_PROMPT: &str = "You are the Page Intelligence Agent for curriculum reviewers. You produce concise, factual metadata aligned with the provided JSON schema. Always respond with valid JSON only, no additional commentary.";

/// Identity and text of the page being refined.
pub struct PageContext<'a> {
    pub book_id: &'a str,
    pub page_number: u32,
    pub source_checksum: &'a str,
    pub page_text: &'a str,
}

/// Cap page text to `max_len` characters with an explicit truncation marker
/// so the model knows the excerpt is incomplete.
pub fn truncate_page_text(text: &str, max_len: usize) -> String {
    let total = text.chars().count();
    if total <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{head}\n...[truncated {} chars]", total - max_len)
}

/// Build the full refinement prompt: schema, output rules, page context.
/// `page_text` must already be truncated.
pub fn build_refinement_prompt(ctx: &PageContext<'_>, schema: &str, page_text: &str) -> String {
    format!(
        "Schema:\n{schema}\n\n\
         Instructions:\n\
         - Output must be valid JSON matching the schema above.\n\
         - Populate every required field. If data not available, use an empty array and include an explanatory note in qa_status.notes.\n\
         - Use concise language. Cite evidence snippets up to 150 characters when possible.\n\
         - Provide confidence scores between 0 and 1.\n\
         - Keep arrays ordered by importance (most relevant first).\n\
         - Do not invent links or resources that are not mentioned in the page text.\n\
         - If standards are unknown, return an empty array and note why in qa_status.notes.\n\n\
         Context:\n\
         Book ID: {}\n\
         Page Number: {}\n\
         Source Checksum: {}\n\
         Page Text:\n\"\"\"\n{}\n\"\"\"",
        ctx.book_id, ctx.page_number, ctx.source_checksum, page_text
    )
}
