pub mod care;

/// A prompt knows how to build the text sent to the model
/// and how to parse the model's reply.
pub trait Prompt {
    type Response;

    fn build_prompt(&self) -> String;
    fn parse_response(&self, raw_response: &str) -> anyhow::Result<Self::Response>;
}

/// Models like to wrap json in a markdown code fence even when told not to.
/// Removes every "```json" and "```" marker, wherever it appears.
pub fn strip_code_fences(raw_response: &str) -> String {
    raw_response
        .trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
