use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::i18n::Language;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON store holding the meat list and language choice
    #[arg(long, global = true, default_value = "fatmix.json")]
    pub store: PathBuf,

    /// Directory with <lang>.json files overriding the bundled translations
    #[arg(long, global = true)]
    pub lang_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a meat to the list
    Add {
        /// Display name; may be left empty and filled in later with `set`
        #[arg(long, default_value = "")]
        name: String,
        /// Fat content in percent, 0 to 100
        #[arg(long, default_value_t = 0.0)]
        fat: f64,
    },
    /// Update name and/or fat of one meat (index as shown by `list`)
    Set {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        fat: Option<f64>,
    },
    /// Flip a meat's active flag
    Toggle { index: usize },
    /// Remove a meat from the list
    Remove { index: usize },
    /// Show the stored meat list
    List,
    /// Replace the list with the bundled default meats
    Reset,
    /// Split a total weight across the active meats toward a target fat
    Calc {
        /// Total weight of the mix in grams
        #[arg(long)]
        total: f64,
        /// Desired average fat content in percent
        #[arg(long)]
        target_fat: f64,
    },
    /// Switch the display language; without a value, toggles de/en
    Lang {
        #[arg(value_enum)]
        language: Option<Language>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
