use anyhow::Result;
use fs_err as fs;
use std::path::{Path, PathBuf};

use crate::i18n::Translations;
use crate::wire::Recipe;

/// Render a recipe as a Markdown document with localized section headings.
pub fn to_markdown(recipe: &Recipe, t: &Translations) -> String {
    let mut out = format!("# {}\n\n", recipe.name);
    out.push_str(&format!("- {}: {}\n", t.t("prepTime"), recipe.prep_time));
    out.push_str(&format!("- {}: {}\n", t.t("cookTime"), recipe.cook_time));
    out.push_str(&format!("- {}: {}\n", t.t("servings"), recipe.servings));

    out.push_str(&format!("\n## {}\n\n", t.t("ingredients")));
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("- {ingredient}\n"));
    }

    out.push_str(&format!("\n## {}\n\n", t.t("instructions")));
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", i + 1));
    }

    if let Some(nutrition) = &recipe.nutrition {
        out.push_str(&format!("\n## {}\n\n", t.t("nutrition")));
        out.push_str(&format!("- {}: {}\n", t.t("calories"), nutrition.calories));
        out.push_str(&format!("- {}: {}\n", t.t("protein"), nutrition.protein));
        out.push_str(&format!("- {}: {}\n", t.t("carbohydrates"), nutrition.carbohydrates));
        out.push_str(&format!("- {}: {}\n", t.t("fat"), nutrition.fat));
    }

    out
}

/// File name derived from the recipe name, whitespace runs as underscores.
pub fn default_file_name(recipe: &Recipe) -> String {
    format!(
        "{}.md",
        recipe.name.split_whitespace().collect::<Vec<_>>().join("_")
    )
}

pub fn write_markdown(recipe: &Recipe, t: &Translations, out: Option<&Path>) -> Result<PathBuf> {
    let path = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_file_name(recipe)));
    fs::write(&path, to_markdown(recipe, t))?;
    Ok(path)
}
