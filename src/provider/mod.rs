use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::cli::ProviderKind;

pub mod fake;
pub mod gemini;

/// A handle to the generation service: configured once, invoked per request,
/// never mutated between calls. Passed explicitly so tests can substitute a
/// scripted double.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a prompt constrained by `schema` and return the raw response
    /// text, expected to be a single JSON document.
    async fn generate_json(&self, prompt: &str, schema: &Value, debug: bool) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(kind: ProviderKind, model: String, timeout_secs: u64) -> Result<DynProvider> {
    match kind {
        ProviderKind::Gemini => Ok(Box::new(gemini::GeminiProvider::from_env(
            model,
            timeout_secs,
        )?)),
        ProviderKind::Fake => Ok(Box::new(fake::FakeProvider::default())),
    }
}
