use anyhow::Result;
use fs_err as fs;
use std::collections::HashMap;
use std::path::Path;

const EN: &str = include_str!("../../locales/en.json");
const ES: &str = include_str!("../../locales/es.json");

type Catalog = HashMap<String, String>;

/// Message-key lookup for the active language. English and Spanish ship
/// embedded; a locales directory can override either or add more languages.
/// Lookup falls back to the English set, then to the literal key.
pub struct Translations {
    language: String,
    active: Catalog,
    english: Catalog,
}

impl Translations {
    pub fn load(language: &str, locales_dir: Option<&Path>) -> Self {
        let english = parse_catalog(EN).unwrap_or_else(|e| {
            eprintln!("warning: built-in English catalog failed to parse: {e}");
            Catalog::new()
        });
        let active = load_catalog(language, locales_dir).unwrap_or_else(|| english.clone());
        Self {
            language: language.to_owned(),
            active,
            english,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.active
            .get(key)
            .or_else(|| self.english.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}

fn load_catalog(language: &str, locales_dir: Option<&Path>) -> Option<Catalog> {
    if let Some(dir) = locales_dir {
        let path = dir.join(format!("{language}.json"));
        if path.exists() {
            match fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|raw| parse_catalog(&raw))
            {
                Ok(catalog) => return Some(catalog),
                Err(e) => eprintln!(
                    "warning: failed to load {}, falling back: {e}",
                    path.display()
                ),
            }
        }
    }

    match language {
        "en" => parse_catalog(EN).ok(),
        "es" => parse_catalog(ES).ok(),
        _ => None,
    }
}

fn parse_catalog(raw: &str) -> Result<Catalog> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn english_keys_resolve() {
        let t = Translations::load("en", None);
        assert_eq!(t.t("ingredients"), "Ingredients");
    }

    #[test]
    fn spanish_keys_resolve() {
        let t = Translations::load("es", None);
        assert_eq!(t.t("ingredients"), "Ingredientes");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let t = Translations::load("hi", None);
        assert_eq!(t.t("ingredients"), "Ingredients");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        let t = Translations::load("en", None);
        assert_eq!(t.t("notARealKey"), "notARealKey");
    }

    #[test]
    fn locales_dir_overrides_the_embedded_catalog() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("fr.json"),
            r#"{ "ingredients": "Ingrédients" }"#,
        )
        .unwrap();

        let t = Translations::load("fr", Some(dir.path()));
        assert_eq!(t.t("ingredients"), "Ingrédients");
        // keys missing from the override fall back to English
        assert_eq!(t.t("instructions"), "Instructions");
    }

    #[test]
    fn unreadable_locale_file_falls_back_to_english() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("de.json"), "{broken").unwrap();

        let t = Translations::load("de", Some(dir.path()));
        assert_eq!(t.t("ingredients"), "Ingredients");
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let en = parse_catalog(EN).unwrap();
        let es = parse_catalog(ES).unwrap();
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut es_keys: Vec<_> = es.keys().collect();
        en_keys.sort();
        es_keys.sort();
        assert_eq!(en_keys, es_keys);
    }
}
