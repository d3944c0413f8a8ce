//! Client for the Gemini generateContent endpoint.

use std::time::Duration as StdDuration;

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::constants::generation;
use crate::error::{Error, Result};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-pro";

/// Client for the Gemini text generation API.
#[derive(Clone)]
pub struct GeminiClient {
    key: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client from config
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            key: config.gemini_key.clone(),
            client: Client::builder()
                .timeout(StdDuration::from_secs(120))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Check if credentials are configured
    fn is_configured(&self) -> bool {
        !self.key.is_empty()
    }

    /// Generate text for a prompt, returning the raw model output.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(Error::config(
                "Gemini client not configured",
                "Set the GEMINI_API_KEY environment variable",
            ));
        }

        let url = format!("{BASE_URL}/models/{MODEL}:generateContent");
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": generation::TEMPERATURE,
                "topP": generation::TOP_P,
                "topK": generation::TOP_K,
                "maxOutputTokens": generation::MAX_OUTPUT_TOKENS,
            },
        });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Generation request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Generation(format!(
                "Generation request returned {status}"
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| Error::parse("generation response", format!("Invalid JSON: {e}")))?;

        extract_text(&json)
            .ok_or_else(|| Error::Generation("No candidate text in response".to_string()))
    }
}

/// Pull the first candidate's text out of a generateContent response.
fn extract_text(json: &Value) -> Option<String> {
    json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
}
