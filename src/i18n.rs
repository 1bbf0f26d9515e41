use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

const DE_TABLE: &str = include_str!("../assets/lang/de.json");
const EN_TABLE: &str = include_str!("../assets/lang/en.json");

/// The two shipped display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }

    /// The other shipped language; a bare `lang` command flips between the two.
    pub fn toggled(self) -> Language {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// Picks the startup language from a locale value such as `LANG`:
    /// German locales ("de", "de_DE.UTF-8", ...) get the German table,
    /// everything else English.
    pub fn detect(locale: Option<&str>) -> Language {
        match locale {
            Some(value) if value.starts_with("de") => Language::De,
            _ => Language::En,
        }
    }
}

/// Translation table for one language. Tables are nested JSON objects and
/// values are looked up by dotted key path, e.g. "alerts.inputMissing".
#[derive(Debug)]
pub struct Translator {
    table: Value,
}

impl Translator {
    /// Loads the compiled-in table for `lang`.
    pub fn bundled(lang: Language) -> Result<Self> {
        let raw = match lang {
            Language::De => DE_TABLE,
            Language::En => EN_TABLE,
        };
        let table = serde_json::from_str(raw).with_context(|| {
            format!("Bundled translation table '{}' is not valid JSON", lang.code())
        })?;
        Ok(Translator { table })
    }

    /// Loads `<dir>/<lang>.json` when an override directory is given,
    /// otherwise the bundled table. An override that is missing or broken
    /// is a hard error since the caller asked for it explicitly.
    pub fn load(lang: Language, override_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = override_dir else {
            return Self::bundled(lang);
        };
        let path = dir.join(format!("{}.json", lang.code()));
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read translation file {:?}", path))?;
        let table = serde_json::from_str(&raw)
            .with_context(|| format!("Translation file {:?} is not valid JSON", path))?;
        Ok(Translator { table })
    }

    /// Resolves a dotted key path against the nested table. Unknown keys
    /// (and keys that stop at a non-string node) come back as the key
    /// itself, so a missing entry stays visible instead of vanishing.
    pub fn text(&self, key: &str) -> String {
        let mut node = &self.table;
        for part in key.split('.') {
            match node.get(part) {
                Some(child) => node = child,
                None => return key.to_string(),
            }
        }
        match node.as_str() {
            Some(value) => value.to_string(),
            None => key.to_string(),
        }
    }

    /// `text` plus `{name}` placeholder substitution from the given pairs.
    pub fn text_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut out = self.text(key);
        for (name, value) in args {
            out = out.replace(&format!("{{{}}}", name), value);
        }
        out
    }
}
