use self::gemini::Gemini;
use mockall::automock;

pub mod gemini;
pub mod prompts;

/// The one place the service talks to the language model.  Controllers hold
/// an `Ai` and tests swap in `MockAi`.
pub struct Ai {
    pub gemini: Gemini,
}

#[automock]
impl Ai {
    pub fn new(gemini: Gemini) -> Self {
        Self { gemini }
    }

    // Sends the prompt as-is, returns the raw reply text.
    pub async fn generate(&self, prompt: String) -> anyhow::Result<String> {
        self.gemini.call_model(&prompt).await
    }
}
