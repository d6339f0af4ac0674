use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::Provider;

const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini provider. The credential is resolved once at construction;
/// each call is a single blocking-until-resolved request with no retry and
/// no streaming.
pub struct GeminiProvider {
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            model,
            api_key,
            client,
        })
    }

    /// Build a provider from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(model: String, timeout_secs: u64) -> Result<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| anyhow!("{GEMINI_API_KEY_ENV} env var is not set"))?;
        Self::new(api_key, model, timeout_secs)
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Error body shape for non-2xx responses.
#[derive(Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate_json(&self, prompt: &str, schema: &Value, debug: bool) -> Result<String> {
        let url = format!("{API_BASE_URL}/models/{}:generateContent", self.model);

        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        if debug {
            eprintln!("debug[gemini]: POST {url}");
            eprintln!(
                "debug[gemini]: request body:\n{}",
                serde_json::to_string_pretty(&body)?
            );
        }

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("Gemini read body failed")?;

        if debug {
            eprintln!("debug[gemini]: raw status: {status}");
            eprintln!("debug[gemini]: raw response:\n{text}");
        }

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&text) {
                return Err(anyhow!("Gemini API error ({status}): {}", err.error.message));
            }
            return Err(anyhow!("Gemini API error ({status}): {text}"));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse Gemini response: {e}"))?;

        if let Some(err) = parsed.error {
            return Err(anyhow!("Gemini API error: {}", err.message));
        }

        let content = parsed
            .candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .into_iter()
            .flatten()
            .find_map(|p| p.text)
            .ok_or_else(|| anyhow!("Gemini response contained no text candidate"))?;

        Ok(content.trim().to_owned())
    }
}
