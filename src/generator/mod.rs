use chrono::Utc;

use crate::errors::ChefError;
use crate::prompt::build_prompt;
use crate::provider::Provider;
use crate::wire::{Recipe, RecipeFields, RecipeRequest};

/// Derive a recipe id from its name and a creation timestamp: whitespace
/// runs collapse to a single hyphen, then the milliseconds are appended.
/// Two same-named recipes in the same millisecond would collide; intended
/// uniqueness is "negligible collision odds", not a guarantee.
pub fn derive_id(name: &str, at_millis: i64) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{slug}-{at_millis}")
}

/// Run one generation attempt: assemble the prompt, call the service against
/// the recipe schema, parse the response as a single JSON document, and
/// attach a freshly derived id. No retry and no partial result on failure;
/// the only side effect is the network call itself.
pub async fn generate_recipe(
    provider: &dyn Provider,
    req: &RecipeRequest,
    debug: bool,
) -> Result<Recipe, ChefError> {
    let prompt = build_prompt(req);
    let schema = crate::wire::recipe_schema();

    let text = provider
        .generate_json(&prompt, &schema, debug)
        .await
        .map_err(|e| ChefError::Generation(describe(&e)))?;

    let fields: RecipeFields = serde_json::from_str(text.trim())
        .map_err(|e| ChefError::Malformed(e.to_string()))?;

    let id = derive_id(&fields.name, Utc::now().timestamp_millis());
    Ok(Recipe::from_fields(id, fields))
}

fn describe(e: &anyhow::Error) -> String {
    let msg = e.to_string();
    if msg.trim().is_empty() {
        "An unknown error occurred while generating the recipe.".to_owned()
    } else {
        msg
    }
}
