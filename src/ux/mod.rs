use colored::Colorize;

use crate::i18n::Translations;
use crate::store::Store;
use crate::wire::Recipe;

pub fn show_recipe(recipe: &Recipe, rating: Option<u8>, is_favorite: bool, t: &Translations) {
    println!("\n=== {} ===", recipe.name.bold());
    println!(
        "{}",
        format!(
            "{}: {}   {}: {}   {}: {}",
            t.t("prepTime"),
            recipe.prep_time,
            t.t("cookTime"),
            recipe.cook_time,
            t.t("servings"),
            recipe.servings
        )
        .dimmed()
    );

    if is_favorite {
        println!("{}", format!("★ {}", t.t("favorite")).yellow());
    }
    if let Some(stars) = rating {
        println!("{}: {}", t.t("yourRating"), star_bar(stars).yellow());
    }

    println!("\n{}", t.t("ingredients").green().bold());
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }

    println!("\n{}", t.t("instructions").cyan().bold());
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }

    // May be absent when the service skipped it; render nothing in that case.
    if let Some(nutrition) = &recipe.nutrition {
        println!("\n{}", t.t("nutrition").magenta().bold());
        println!("  {}: {}", t.t("calories"), nutrition.calories);
        println!("  {}: {}", t.t("protein"), nutrition.protein);
        println!("  {}: {}", t.t("carbohydrates"), nutrition.carbohydrates);
        println!("  {}: {}", t.t("fat"), nutrition.fat);
    }

    println!("\n{}", format!("id: {}", recipe.id).dimmed());
}

pub fn show_list(title: &str, empty_message: &str, recipes: &[Recipe], store: &Store) {
    println!("\n=== {} ===", title.bold());
    if recipes.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }
    for (i, recipe) in recipes.iter().enumerate() {
        let mut line = format!("{}. {}", i + 1, recipe.name.bold());
        if store.is_favorite(&recipe.id) {
            line.push_str(&format!("  {}", "★".yellow()));
        }
        if let Some(stars) = store.rating(&recipe.id) {
            line.push_str(&format!("  {}", star_bar(stars).yellow()));
        }
        line.push_str(&format!("  {}", format!("({})", recipe.id).dimmed()));
        println!("{line}");
    }
}

fn star_bar(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
