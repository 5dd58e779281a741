use anyhow::{anyhow, Context};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

pub struct Gemini {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl Gemini {
    pub fn new(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build gemini http client")?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    // Calls the model with a single text prompt, gets the text of the first candidate back.
    pub async fn call_model(&self, prompt: &str) -> anyhow::Result<String> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        // The key goes in a header so it never ends up in a logged url
        let response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .with_context(|| "Failed to call gemini generateContent endpoint")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| "Failed to extract text from gemini response")?;

        if status != StatusCode::OK {
            return Err(anyhow!("Error calling gemini ({status}): {body}"));
        }

        extract_text(&body)
    }
}

/// Pulls the reply text out of a generateContent response body.  The model
/// may split its answer across several parts, they are joined in order.
fn extract_text(body: &str) -> anyhow::Result<String> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).with_context(|| "Failed to parse gemini response")?;

    let candidate = match parsed.candidates.first() {
        Some(candidate) => candidate,
        None => return Err(anyhow!("no candidates in response")),
    };

    let content = match &candidate.content {
        Some(content) => content,
        None => return Err(anyhow!("no content in candidate")),
    };

    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    if text.is_empty() {
        return Err(anyhow!("no text in candidate content"));
    }

    Ok(text)
}
