use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[value(alias = "google")]
    Gemini,
    Fake,
}

#[derive(Parser, Debug)]
#[command(name = "souschef", version, about = "AI recipe generator for your terminal")]
pub struct Cli {
    /// TOML config file; CLI flags override it.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub data_dir: Option<String>,

    /// Language code for both the UI strings and the generated recipe.
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a recipe from ingredients (default) or a dish name.
    Generate(GenerateArgs),

    /// Print a stored recipe by id.
    Show { id: String },

    /// List the most recent recipes, or wipe them.
    History {
        #[arg(long, default_value_t = false)]
        clear: bool,
    },

    /// Toggle a stored recipe in or out of the favorites list.
    Favorite { id: String },

    /// List favorite recipes.
    Favorites,

    /// Rate a stored recipe from 1 to 5.
    Rate { id: String, stars: u8 },

    /// Write a stored recipe to a Markdown file.
    Export {
        id: String,
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Ingredient with quantity, repeatable (e.g. -i "2 eggs" -i flour).
    #[arg(short = 'i', long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    /// Request this exact dish instead of cooking from ingredients.
    #[arg(long)]
    pub dish: Option<String>,

    /// Kitchen equipment the recipe is allowed to use, repeatable.
    #[arg(short = 'e', long = "equipment", value_name = "ITEM")]
    pub equipment: Vec<String>,

    /// Breakfast, Lunch, Dinner, Snack, Dessert; "Any" adds no constraint.
    #[arg(long, default_value = "Any")]
    pub meal_type: String,

    /// Free-text dietary restrictions, passed to the model verbatim.
    #[arg(long, default_value = "")]
    pub diet: String,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,
}
