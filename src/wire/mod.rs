use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// ========================================
/// Request/response wire types
/// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Ingredients,
    Dish,
}

/// A validated generation request. Mode-specific non-emptiness (ingredient
/// list, dish name) is checked by the CLI layer before this is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub mode: GenerationMode,
    pub ingredients: Vec<String>,
    pub dish_name: String,
    pub equipment: Vec<String>,
    pub meal_type: String,
    pub dietary_restrictions: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbohydrates: String,
    pub fat: String,
}

/// The recipe fields exactly as the generation service returns them.
/// `nutrition` is required by the schema we send, but upstream compliance is
/// not guaranteed, so it stays optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeFields {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub nutrition: Option<Nutrition>,
}

/// A generated recipe. The `id` is assigned once at construction and never
/// mutated; ratings live in the store's own map keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    pub fn from_fields(id: String, fields: RecipeFields) -> Self {
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            prep_time: fields.prep_time,
            cook_time: fields.cook_time,
            servings: fields.servings,
            nutrition: fields.nutrition,
        }
    }
}

/// Schema descriptor sent alongside the prompt so the service returns one
/// parseable JSON document instead of prose.
pub fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "The name of the recipe." },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of ingredients with quantities."
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Step-by-step cooking instructions."
            },
            "prep_time": { "type": "STRING", "description": "Preparation time, e.g., '15 minutes'." },
            "cook_time": { "type": "STRING", "description": "Cooking time, e.g., '30 minutes'." },
            "servings": { "type": "STRING", "description": "Number of servings, e.g., '4 servings'." },
            "nutrition": {
                "type": "OBJECT",
                "properties": {
                    "calories": { "type": "STRING", "description": "Estimated calories per serving." },
                    "protein": { "type": "STRING", "description": "Estimated protein per serving in grams." },
                    "carbohydrates": { "type": "STRING", "description": "Estimated carbohydrates per serving in grams." },
                    "fat": { "type": "STRING", "description": "Estimated fat per serving in grams." }
                },
                "required": ["calories", "protein", "carbohydrates", "fat"]
            }
        },
        "required": ["name", "ingredients", "instructions", "prep_time", "cook_time", "servings", "nutrition"]
    })
}
