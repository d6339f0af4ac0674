use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use uuid::Uuid;

mod cli;
mod config;
mod errors;
mod export;
mod generator;
mod i18n;
mod log;
mod prompt;
mod provider;
mod store;
mod ux;
mod wire;

use wire::GenerationMode;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let mut cfg = config::Config::load(args.config.as_deref())?;
    if let Some(dir) = &args.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(lang) = &args.language {
        cfg.language = lang.clone();
    }

    let t = i18n::Translations::load(&cfg.language, cfg.locales_dir.as_deref().map(Path::new));
    let mut store = store::Store::open(Path::new(&cfg.data_dir), cfg.history_cap)?;

    match args.command {
        cli::Command::Generate(gen) => run_generate(gen, &cfg, &t, &mut store, args.debug).await?,

        cli::Command::Show { id } => match store.find(&id) {
            Some(recipe) => ux::show_recipe(recipe, store.rating(&id), store.is_favorite(&id), &t),
            None => println!("{}", t.t("recipeNotFound").red()),
        },

        cli::Command::History { clear } => {
            if clear {
                store.clear_history()?;
                println!("{}", t.t("historyCleared"));
            } else {
                ux::show_list(&t.t("history"), &t.t("noHistory"), store.history(), &store);
            }
        }

        cli::Command::Favorites => {
            ux::show_list(&t.t("favorites"), &t.t("noFavorites"), store.favorites(), &store);
        }

        cli::Command::Favorite { id } => match store.find(&id).cloned() {
            Some(recipe) => {
                let now_favorite = store.toggle_favorite(&recipe)?;
                if now_favorite {
                    println!("{}", t.t("addedToFavorites").green());
                } else {
                    println!("{}", t.t("removedFromFavorites").yellow());
                }
            }
            None => println!("{}", t.t("recipeNotFound").red()),
        },

        cli::Command::Rate { id, stars } => {
            if store.find(&id).is_none() {
                println!("{}", t.t("recipeNotFound").red());
            } else {
                store.rate(&id, stars)?;
                println!("{}", t.t("ratingSaved").green());
            }
        }

        cli::Command::Export { id, out } => match store.find(&id) {
            Some(recipe) => {
                let path = export::write_markdown(recipe, &t, out.as_deref().map(Path::new))?;
                println!("{} {}", t.t("exportedTo").green(), path.display());
            }
            None => println!("{}", t.t("recipeNotFound").red()),
        },
    }

    Ok(())
}

async fn run_generate(
    gen: cli::GenerateArgs,
    cfg: &config::Config,
    t: &i18n::Translations,
    store: &mut store::Store,
    debug: bool,
) -> anyhow::Result<()> {
    let mode = if gen.dish.is_some() {
        GenerationMode::Dish
    } else {
        GenerationMode::Ingredients
    };
    let dish_name = gen.dish.unwrap_or_default().trim().to_owned();

    // Mode preconditions live here, in the caller layer; the generator
    // assumes they already hold.
    if mode == GenerationMode::Ingredients && gen.ingredients.is_empty() {
        println!("{}", t.t("errorNoIngredients").red());
        return Ok(());
    }
    if mode == GenerationMode::Dish && dish_name.is_empty() {
        println!("{}", t.t("errorNoDishName").red());
        return Ok(());
    }

    let req = wire::RecipeRequest {
        mode,
        ingredients: gen.ingredients,
        dish_name,
        equipment: gen.equipment,
        meal_type: gen.meal_type,
        dietary_restrictions: gen.diet,
        language: t.language().to_owned(),
    };

    let kind = gen.provider.unwrap_or(cfg.provider);
    let model = gen.model.unwrap_or_else(|| cfg.model.clone());
    let timeout_secs = gen.timeout_secs.unwrap_or(cfg.timeout_secs);
    let prov = provider::make_provider(kind, model, timeout_secs)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(t.t("cooking"));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = generator::generate_recipe(prov.as_ref(), &req, debug).await;
    spinner.finish_and_clear();

    let recipe = match result {
        Ok(recipe) => recipe,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };

    if gen.save_request || gen.save_response {
        let tx = Uuid::new_v4();
        let request_artifact = serde_json::json!({
            "request": &req,
            "prompt": prompt::build_prompt(&req),
        });
        let saved = log::save_stage(
            "generate",
            &request_artifact,
            &recipe,
            tx,
            Path::new(&cfg.data_dir),
            gen.save_request,
            gen.save_response,
        )?;
        if debug {
            log::print_saved_paths("generate", &saved);
        }
    }

    ux::show_recipe(&recipe, store.rating(&recipe.id), store.is_favorite(&recipe.id), t);
    store.push_history(&recipe)?;
    Ok(())
}
