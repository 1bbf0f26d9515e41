use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::i18n::Language;
use crate::meat::Meat;

const DEFAULT_CONFIG: &str = include_str!("../assets/config.json");

/// On-disk layout of the store file: one JSON document with the meat list
/// and the chosen language. Each entry is optional, so a file that carries
/// only one of them behaves like a fresh store for the other.
#[derive(Debug, Serialize, Deserialize, Default)]
struct StoreFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    meats: Option<Vec<Meat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language>,
}

/// The application state one command invocation works on. Loaded fresh,
/// passed explicitly into the command handlers, saved back afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub meats: Vec<Meat>,
    /// `None` until a language has been pinned; detection from the
    /// environment then decides the display language.
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
struct BundledConfig {
    #[serde(rename = "defaultMeats")]
    default_meats: Vec<Meat>,
}

/// The compiled-in default meat list, used whenever no stored list exists.
pub fn default_meats() -> Result<Vec<Meat>> {
    let config: BundledConfig = serde_json::from_str(DEFAULT_CONFIG)
        .context("Bundled default configuration is not valid JSON")?;
    Ok(config.default_meats)
}

/// Loads the state from `path`. A missing file is not an error: it yields
/// the bundled default meats and no pinned language. A present but
/// unreadable or corrupt file is a hard error, never silent data loss.
pub fn load_state(path: &Path) -> Result<AppState> {
    if !path.exists() {
        return Ok(AppState {
            meats: default_meats()?,
            language: None,
        });
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read store file {:?}", path))?;
    let file: StoreFile = serde_json::from_str(&raw)
        .with_context(|| format!("Store file {:?} is not valid JSON", path))?;

    // An empty stored list is a real (emptied) list; only a missing entry
    // falls back to the defaults.
    let meats = match file.meats {
        Some(meats) => meats,
        None => default_meats()?,
    };

    Ok(AppState {
        meats,
        language: file.language,
    })
}

/// Writes the whole state back to `path` as pretty-printed JSON.
pub fn save_state(path: &Path, state: &AppState) -> Result<()> {
    let file = StoreFile {
        meats: Some(state.meats.clone()),
        language: state.language,
    };
    let raw = serde_json::to_string_pretty(&file).context("Failed to serialize store")?;
    fs::write(path, raw).with_context(|| format!("Failed to write store file {:?}", path))?;
    Ok(())
}
