use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::cli::ProviderKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: String,
    pub locales_dir: Option<String>,
    pub provider: ProviderKind,
    pub model: String,
    pub language: String,
    pub timeout_secs: u64,
    pub history_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".souschef".into(),
            locales_dir: None,
            provider: ProviderKind::Gemini,
            model: "gemini-2.5-flash".into(),
            language: "en".into(),
            timeout_secs: 120,
            history_cap: 10,
        }
    }
}

impl Config {
    /// Defaults, optionally overridden by a TOML file. CLI flags override
    /// both, in main.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = fs::read_to_string(p).with_context(|| format!("reading config {p}"))?;
                toml::from_str(&raw).with_context(|| format!("parsing config {p}"))
            }
            None => Ok(Self::default()),
        }
    }
}
