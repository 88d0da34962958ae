//! Instruction prompt for name extraction.
//!
//! Callers can override the default via [`crate::config::ExtractionConfig::prompt`];
//! the constant here is used only when no override is provided.

/// Default instruction sent ahead of the page text.
///
/// The reply format it asks for (a flat comma-separated list) is what
/// [`crate::pipeline::parse`] expects.
pub const DEFAULT_PROMPT: &str = "Extract all the person names from the given text. \
Focus on mentor names, student names, and any other human names mentioned. \
Return only a list of names in a clean comma-separated format. \
Exclude organization names, project names, and other non-person entities. \
If the text is from a Google Summer of Code page, pay special attention to mentor and student names.";

/// Combine the instruction and the page text into the single request blob.
pub fn build_prompt(instruction: &str, text: &str) -> String {
    format!("{}\n\n{}", instruction, text)
}
