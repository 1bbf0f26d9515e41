use crate::i18n::Translator;
use crate::meat::Meat;
use crate::mix::{fat_range, AllocationResult};

/// The two summary lines plus the per-meat table for one calculation.
/// Formatting lives here and only here: the target fat prints as entered,
/// the achieved average with two decimals, portions with one decimal.
pub fn render_result(
    tr: &Translator,
    meats: &[Meat],
    result: &AllocationResult,
    target_fat: f64,
) -> String {
    let mut lines = vec![
        format!("{}: {}%", tr.text("resultText.targetFat"), target_fat),
        format!("{}: {:.2}%", tr.text("resultText.avgFat"), result.achieved_fat),
        String::new(),
    ];

    let name_header = tr.text("table.name");
    let name_width = meats
        .iter()
        .map(|m| display_name(tr, m).chars().count())
        .chain(std::iter::once(name_header.chars().count()))
        .max()
        .unwrap_or(0);

    lines.push(format!(
        "{:<width$}  {:>6}  {:>10}",
        name_header,
        tr.text("table.fat"),
        tr.text("table.portion"),
        width = name_width
    ));
    for (meat, portion) in meats.iter().zip(&result.portions) {
        lines.push(format!(
            "{:<width$}  {:>5}%  {:>8.1} g",
            display_name(tr, meat),
            meat.fat,
            portion,
            width = name_width
        ));
    }

    lines.join("\n")
}

/// Warning line for a target outside the reachable fat range, with the
/// range filled in via placeholders.
pub fn render_infeasible_warning(tr: &Translator, meats: &[Meat]) -> String {
    let (min, max) = fat_range(meats);
    tr.text_with(
        "alerts.infeasible",
        &[("min", format!("{}", min)), ("max", format!("{}", max))],
    )
}

/// The numbered meat list, with an `[x]` marker on active entries. The
/// numbers are what `set`, `toggle` and `remove` take as index.
pub fn render_meat_list(tr: &Translator, meats: &[Meat]) -> String {
    if meats.is_empty() {
        return tr.text("list.empty");
    }
    let name_width = meats
        .iter()
        .map(|m| display_name(tr, m).chars().count())
        .max()
        .unwrap_or(0);
    meats
        .iter()
        .enumerate()
        .map(|(idx, meat)| {
            format!(
                "{:>2}. [{}] {:<width$}  {:>5}%",
                idx + 1,
                if meat.active { 'x' } else { ' ' },
                display_name(tr, meat),
                meat.fat,
                width = name_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Unnamed meats show the localized placeholder instead of a blank cell.
fn display_name(tr: &Translator, meat: &Meat) -> String {
    if meat.name.is_empty() {
        tr.text("labels.namePlaceholder")
    } else {
        meat.name.clone()
    }
}
