use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::Provider;

/// Canned response served by the default fake provider, so the tool can be
/// driven end to end without a network or an API key.
const SAMPLE_RESPONSE: &str = r#"{
  "name": "Golden Pantry Omelette",
  "ingredients": [
    "3 large eggs",
    "1 tablespoon butter",
    "1 pinch of salt",
    "1 pinch of black pepper"
  ],
  "instructions": [
    "Crack the eggs into a bowl, season with salt and pepper, and whisk until uniform.",
    "Melt the butter in a non-stick pan over medium heat.",
    "Pour in the eggs and let them set for 30 seconds, then gently stir the center.",
    "When the surface is just set, fold the omelette in half and slide it onto a plate."
  ],
  "prep_time": "5 minutes",
  "cook_time": "5 minutes",
  "servings": "1 serving",
  "nutrition": {
    "calories": "320 kcal",
    "protein": "19g",
    "carbohydrates": "2g",
    "fat": "26g"
  }
}"#;

/// Offline stand-in for the generation service. Returns a fixed response for
/// every prompt; tests script it with `with_response`.
pub struct FakeProvider {
    response: String,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            response: SAMPLE_RESPONSE.to_owned(),
        }
    }
}

impl FakeProvider {
    #[allow(dead_code)]
    pub fn with_response(response: &str) -> Self {
        Self {
            response: response.to_owned(),
        }
    }
}

#[async_trait]
impl Provider for FakeProvider {
    async fn generate_json(&self, prompt: &str, _schema: &Value, debug: bool) -> Result<String> {
        if debug {
            eprintln!("debug[fake]: prompt ({} chars) answered offline", prompt.len());
        }
        Ok(self.response.clone())
    }
}
