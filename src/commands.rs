use anyhow::Result;
use std::env;
use std::path::Path;

use crate::cli::Command;
use crate::i18n::{Language, Translator};
use crate::meat::{active_meats, Meat};
use crate::mix::{allocate, validate_request, InvalidInput};
use crate::presenter;
use crate::storage::AppState;

/// How a dispatched command ended. A rejected input is not a program
/// error: the notice has already been printed and the state must not be
/// saved, but nothing else went wrong.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

/// Maps one user command to its handler. All handlers work on the state
/// they are given and print through the translator; none of them touches
/// anything global.
pub fn dispatch(command: Command, state: &mut AppState, lang_dir: Option<&Path>) -> Result<Outcome> {
    let lang = apply_language(&command, state);
    let tr = Translator::load(lang, lang_dir)?;

    let outcome = match command {
        Command::Add { name, fat } => add_meat(state, name, fat, &tr),
        Command::Set { index, name, fat } => set_meat(state, index, name, fat, &tr),
        Command::Toggle { index } => toggle_meat(state, index, &tr),
        Command::Remove { index } => remove_meat(state, index, &tr),
        Command::List => {
            println!("{}", presenter::render_meat_list(&tr, &state.meats));
            Ok(())
        }
        Command::Reset => reset_meats(state, &tr),
        Command::Calc { total, target_fat } => run_calculation(state, total, target_fat, &tr),
        Command::Lang { .. } => {
            println!(
                "{}",
                tr.text_with("notices.language", &[("lang", lang.native_name().to_string())])
            );
            Ok(())
        }
    };

    match outcome {
        Ok(()) => Ok(Outcome::Done),
        Err(err) if err.is::<InvalidInput>() => {
            // One generic notice for every rejected input, localized.
            eprintln!("{}", tr.text("alerts.inputMissing"));
            Ok(Outcome::Rejected)
        }
        Err(err) => Err(err),
    }
}

/// Resolves the display language for this invocation and pins it in the
/// state: a `lang` command switches (the bare form toggles), every other
/// command keeps the stored choice or falls back to locale detection.
fn apply_language(command: &Command, state: &mut AppState) -> Language {
    let current = state
        .language
        .unwrap_or_else(|| Language::detect(env::var("LANG").ok().as_deref()));
    let lang = match command {
        Command::Lang { language } => language.unwrap_or_else(|| current.toggled()),
        _ => current,
    };
    state.language = Some(lang);
    lang
}

fn add_meat(state: &mut AppState, name: String, fat: f64, tr: &Translator) -> Result<()> {
    check_fat(fat)?;
    state.meats.push(Meat::new(name, fat));
    println!("{}", presenter::render_meat_list(tr, &state.meats));
    Ok(())
}

fn set_meat(
    state: &mut AppState,
    index: usize,
    name: Option<String>,
    fat: Option<f64>,
    tr: &Translator,
) -> Result<()> {
    if let Some(fat) = fat {
        check_fat(fat)?;
    }
    let meat = lookup_mut(&mut state.meats, index)?;
    if let Some(name) = name {
        meat.name = name;
    }
    if let Some(fat) = fat {
        meat.fat = fat;
    }
    println!("{}", presenter::render_meat_list(tr, &state.meats));
    Ok(())
}

fn toggle_meat(state: &mut AppState, index: usize, tr: &Translator) -> Result<()> {
    let meat = lookup_mut(&mut state.meats, index)?;
    meat.active = !meat.active;
    println!("{}", presenter::render_meat_list(tr, &state.meats));
    Ok(())
}

fn remove_meat(state: &mut AppState, index: usize, tr: &Translator) -> Result<()> {
    lookup_mut(&mut state.meats, index)?;
    state.meats.remove(index - 1);
    println!("{}", presenter::render_meat_list(tr, &state.meats));
    Ok(())
}

fn reset_meats(state: &mut AppState, tr: &Translator) -> Result<()> {
    state.meats = crate::storage::default_meats()?;
    println!("{}", presenter::render_meat_list(tr, &state.meats));
    Ok(())
}

fn run_calculation(state: &AppState, total: f64, target_fat: f64, tr: &Translator) -> Result<()> {
    let active = active_meats(&state.meats);
    validate_request(&active, total, target_fat)?;
    let result = allocate(&active, total, target_fat);
    if !result.feasible {
        eprintln!("{}", presenter::render_infeasible_warning(tr, &active));
    }
    println!("{}", presenter::render_result(tr, &active, &result, target_fat));
    Ok(())
}

fn check_fat(fat: f64) -> Result<(), InvalidInput> {
    if (0.0..=100.0).contains(&fat) {
        Ok(())
    } else {
        Err(InvalidInput)
    }
}

/// 1-based index as shown by `list`; anything out of range is the usual
/// generic rejection.
fn lookup_mut(meats: &mut [Meat], index: usize) -> Result<&mut Meat, InvalidInput> {
    if index == 0 || index > meats.len() {
        return Err(InvalidInput);
    }
    Ok(&mut meats[index - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(meats: Vec<Meat>) -> AppState {
        AppState {
            meats,
            // Pinned so the tests never consult the ambient locale.
            language: Some(Language::En),
        }
    }

    #[test]
    fn test_add_appends_an_active_meat() -> Result<()> {
        let mut state = state_with(vec![]);
        let outcome = dispatch(
            Command::Add {
                name: "Schweinebauch".to_string(),
                fat: 30.0,
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(state.meats.len(), 1);
        assert!(state.meats[0].active);
        Ok(())
    }

    #[test]
    fn test_add_rejects_fat_outside_domain() -> Result<()> {
        let mut state = state_with(vec![]);
        let outcome = dispatch(
            Command::Add {
                name: "Bad".to_string(),
                fat: 101.0,
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Rejected);
        assert!(state.meats.is_empty());

        let outcome = dispatch(
            Command::Add {
                name: "Bad".to_string(),
                fat: -1.0,
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Rejected);
        Ok(())
    }

    #[test]
    fn test_set_updates_name_and_fat_by_one_based_index() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 10.0), Meat::new("B", 20.0)]);
        let outcome = dispatch(
            Command::Set {
                index: 2,
                name: Some("Rückenspeck".to_string()),
                fat: Some(80.0),
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(state.meats[1].name, "Rückenspeck");
        assert_eq!(state.meats[1].fat, 80.0);
        // the untouched entry stays as it was
        assert_eq!(state.meats[0].name, "A");
        Ok(())
    }

    #[test]
    fn test_index_zero_and_out_of_range_are_rejected() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 10.0)]);
        for index in [0, 2] {
            let outcome = dispatch(Command::Toggle { index }, &mut state, None)?;
            assert_eq!(outcome, Outcome::Rejected);
        }
        assert!(state.meats[0].active);
        Ok(())
    }

    #[test]
    fn test_toggle_flips_the_active_flag() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 10.0)]);
        dispatch(Command::Toggle { index: 1 }, &mut state, None)?;
        assert!(!state.meats[0].active);
        dispatch(Command::Toggle { index: 1 }, &mut state, None)?;
        assert!(state.meats[0].active);
        Ok(())
    }

    #[test]
    fn test_remove_deletes_the_entry() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 10.0), Meat::new("B", 20.0)]);
        let outcome = dispatch(Command::Remove { index: 1 }, &mut state, None)?;
        assert_eq!(outcome, Outcome::Done);
        assert_eq!(state.meats.len(), 1);
        assert_eq!(state.meats[0].name, "B");
        Ok(())
    }

    #[test]
    fn test_reset_restores_the_bundled_defaults() -> Result<()> {
        let mut state = state_with(vec![Meat::new("Custom", 42.0)]);
        dispatch(Command::Reset, &mut state, None)?;
        assert_eq!(state.meats, crate::storage::default_meats()?);
        Ok(())
    }

    #[test]
    fn test_calc_needs_two_active_meats() -> Result<()> {
        // Two meats stored, but only one active.
        let mut state = state_with(vec![
            Meat::new("A", 10.0),
            Meat {
                name: "B".to_string(),
                fat: 20.0,
                active: false,
            },
        ]);
        let outcome = dispatch(
            Command::Calc {
                total: 1000.0,
                target_fat: 15.0,
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Rejected);
        Ok(())
    }

    #[test]
    fn test_calc_with_valid_input_completes() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 5.0), Meat::new("B", 25.0)]);
        let outcome = dispatch(
            Command::Calc {
                total: 1000.0,
                target_fat: 15.0,
            },
            &mut state,
            None,
        )?;
        assert_eq!(outcome, Outcome::Done);
        // calc never mutates the list
        assert_eq!(state.meats.len(), 2);
        Ok(())
    }

    #[test]
    fn test_calc_rejects_non_positive_scalars() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 5.0), Meat::new("B", 25.0)]);
        for (total, target) in [(0.0, 15.0), (-1.0, 15.0), (1000.0, 0.0), (1000.0, -2.0)] {
            let outcome = dispatch(
                Command::Calc {
                    total,
                    target_fat: target,
                },
                &mut state,
                None,
            )?;
            assert_eq!(outcome, Outcome::Rejected);
        }
        Ok(())
    }

    #[test]
    fn test_bare_lang_toggles_and_pins_the_language() -> Result<()> {
        let mut state = state_with(vec![]);
        dispatch(Command::Lang { language: None }, &mut state, None)?;
        assert_eq!(state.language, Some(Language::De));
        dispatch(Command::Lang { language: None }, &mut state, None)?;
        assert_eq!(state.language, Some(Language::En));
        Ok(())
    }

    #[test]
    fn test_explicit_lang_sets_the_language() -> Result<()> {
        let mut state = state_with(vec![]);
        dispatch(
            Command::Lang {
                language: Some(Language::De),
            },
            &mut state,
            None,
        )?;
        assert_eq!(state.language, Some(Language::De));
        Ok(())
    }

    #[test]
    fn test_other_commands_keep_the_stored_language() -> Result<()> {
        let mut state = state_with(vec![Meat::new("A", 10.0)]);
        state.language = Some(Language::De);
        dispatch(Command::List, &mut state, None)?;
        assert_eq!(state.language, Some(Language::De));
        Ok(())
    }
}
