use anyhow::{ensure, Result};
use fs_err as fs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::wire::Recipe;

const HISTORY_FILE: &str = "recipe_history.json";
const FAVORITES_FILE: &str = "recipe_favorites.json";
const RATINGS_FILE: &str = "recipe_ratings.json";

/// Local persistence for generated recipes: a bounded history, unbounded
/// favorites, and a ratings map keyed by recipe id. Each list is one JSON
/// file under the data dir, loaded once at startup and rewritten on every
/// change.
pub struct Store {
    dir: PathBuf,
    history_cap: usize,
    history: Vec<Recipe>,
    favorites: Vec<Recipe>,
    ratings: HashMap<String, u8>,
}

impl Store {
    pub fn open(dir: &Path, history_cap: usize) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            history_cap,
            history: load_or_discard(&dir.join(HISTORY_FILE))?,
            favorites: load_or_discard(&dir.join(FAVORITES_FILE))?,
            ratings: load_or_discard(&dir.join(RATINGS_FILE))?,
        })
    }

    pub fn history(&self) -> &[Recipe] {
        &self.history
    }

    pub fn favorites(&self) -> &[Recipe] {
        &self.favorites
    }

    pub fn rating(&self, id: &str) -> Option<u8> {
        self.ratings.get(id).copied()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|r| r.id == id)
    }

    /// Look a recipe up by id, in history first, then favorites.
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.history
            .iter()
            .chain(self.favorites.iter())
            .find(|r| r.id == id)
    }

    /// Prepend a recipe to the history, deduplicating by id and keeping only
    /// the most recent `history_cap` entries.
    pub fn push_history(&mut self, recipe: &Recipe) -> Result<()> {
        self.history.retain(|r| r.id != recipe.id);
        self.history.insert(0, recipe.clone());
        self.history.truncate(self.history_cap);
        self.write(HISTORY_FILE, &self.history)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.write(HISTORY_FILE, &self.history)
    }

    /// Add the recipe to favorites, or remove it if already present.
    /// Returns true when the recipe is a favorite afterwards.
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> Result<bool> {
        let was_favorite = self.is_favorite(&recipe.id);
        if was_favorite {
            self.favorites.retain(|r| r.id != recipe.id);
        } else {
            self.favorites.insert(0, recipe.clone());
        }
        self.write(FAVORITES_FILE, &self.favorites)?;
        Ok(!was_favorite)
    }

    pub fn rate(&mut self, id: &str, stars: u8) -> Result<()> {
        ensure!((1..=5).contains(&stars), "rating must be between 1 and 5");
        self.ratings.insert(id.to_owned(), stars);
        self.write(RATINGS_FILE, &self.ratings)
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        fs::write(self.dir.join(file), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

/// Read one persisted list; a file that no longer parses is discarded and
/// treated as empty rather than poisoning startup.
fn load_or_discard<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let raw = fs::read_to_string(path)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            eprintln!("warning: discarding unreadable {}: {e}", path.display());
            let _ = fs::remove_file(path);
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Nutrition;
    use tempfile::tempdir;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_owned(),
            name: name.to_owned(),
            ingredients: vec!["1 thing".into()],
            instructions: vec!["Cook it.".into()],
            prep_time: "5 minutes".into(),
            cook_time: "10 minutes".into(),
            servings: "2 servings".into(),
            nutrition: Some(Nutrition {
                calories: "100 kcal".into(),
                protein: "5g".into(),
                carbohydrates: "10g".into(),
                fat: "4g".into(),
            }),
        }
    }

    #[test]
    fn history_dedupes_by_id_and_keeps_newest_first() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path(), 10).unwrap();

        store.push_history(&recipe("a-1", "A")).unwrap();
        store.push_history(&recipe("b-2", "B")).unwrap();
        store.push_history(&recipe("a-1", "A")).unwrap();

        let ids: Vec<&str> = store.history().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "b-2"]);
    }

    #[test]
    fn history_is_capped_at_the_most_recent_entries() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path(), 10).unwrap();

        for i in 0..12 {
            store
                .push_history(&recipe(&format!("r-{i}"), &format!("R{i}")))
                .unwrap();
        }

        assert_eq!(store.history().len(), 10);
        assert_eq!(store.history()[0].id, "r-11");
        assert_eq!(store.history()[9].id, "r-2");
    }

    #[test]
    fn lists_survive_a_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = Store::open(dir.path(), 10).unwrap();
            store.push_history(&recipe("a-1", "A")).unwrap();
            store.toggle_favorite(&recipe("a-1", "A")).unwrap();
            store.rate("a-1", 4).unwrap();
        }

        let store = Store::open(dir.path(), 10).unwrap();
        assert_eq!(store.history().len(), 1);
        assert!(store.is_favorite("a-1"));
        assert_eq!(store.rating("a-1"), Some(4));
    }

    #[test]
    fn corrupt_file_is_discarded_and_treated_as_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(HISTORY_FILE), "{not json").unwrap();

        let store = Store::open(dir.path(), 10).unwrap();
        assert!(store.history().is_empty());
        assert!(!dir.path().join(HISTORY_FILE).exists());
    }

    #[test]
    fn favorite_toggles_on_and_off() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path(), 10).unwrap();
        let r = recipe("a-1", "A");

        assert!(store.toggle_favorite(&r).unwrap());
        assert!(store.is_favorite("a-1"));
        assert!(!store.toggle_favorite(&r).unwrap());
        assert!(!store.is_favorite("a-1"));
    }

    #[test]
    fn ratings_are_bounded_one_to_five() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path(), 10).unwrap();

        assert!(store.rate("a-1", 0).is_err());
        assert!(store.rate("a-1", 6).is_err());
        store.rate("a-1", 5).unwrap();
        assert_eq!(store.rating("a-1"), Some(5));
    }

    #[test]
    fn find_checks_history_then_favorites() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path(), 1).unwrap();

        store.toggle_favorite(&recipe("fav-1", "Fav")).unwrap();
        store.push_history(&recipe("hist-1", "Hist")).unwrap();

        assert!(store.find("hist-1").is_some());
        assert!(store.find("fav-1").is_some());
        assert!(store.find("nope").is_none());
    }
}
