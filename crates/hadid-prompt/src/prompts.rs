//! The built-in prompt texts.
//!
//! Each prompt string is defined **once** in this module. The [`Prompts`]
//! collection and the top-level `hadid` re-export both alias these constants,
//! so the two public access paths can never drift apart.

use crate::builder::PromptBuilder;

/// System prompt applied when the caller supplies no override: convert the
/// supplied document to markdown, nothing else.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
Convert the following document to markdown.
Return only the markdown with no explanation text.
Do not exclude any content from the page.";

/// System prompt base for structured extraction calls. The caller appends
/// the concrete output shape to this.
pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
You are an assistant that extracts information from uploaded user documents.
Return ONLY the extracted result. Do not include any text, explanations, \
markdown formatting, or code blocks before or after it.";

/// Named access to every built-in prompt.
///
/// Associated constants rather than fields, so the collection stays a pure
/// namespace with no construction story.
pub struct Prompts;

impl Prompts {
    pub const DEFAULT_SYSTEM_PROMPT: &'static str = DEFAULT_SYSTEM_PROMPT;
    pub const EXTRACTION: &'static str = EXTRACTION_SYSTEM_PROMPT;
}

/// Build the page-consistency prompt: instructs the model to keep markdown
/// formatting consistent with an already-converted prior page.
pub fn consistency_prompt(prior_page: &str) -> String {
    PromptBuilder::new()
        .add_line("Markdown must maintain consistent formatting with the following page:")
        .add_blank_line()
        .add_quoted_block(prior_page)
        .finalize()
}
