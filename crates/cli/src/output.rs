//! Text shown on the terminal: family listings, option descriptions, the
//! history and the rendered command.
//!
//! Every formatter returns a `String` so output can be checked in tests.
//! Colours are only added when `styled` is set, which the binary derives from
//! whether stdout is a terminal.

use std::io::{stdout, IsTerminal};

use crossterm::style::{Color, Stylize};
use itertools::Itertools;

use cmdsheet_core::families::{aliases, describe, Family};
use cmdsheet_core::history::RecentHistory;
use cmdsheet_core::option_model::{FieldKind, OptionModel};

pub fn stdout_is_styled() -> bool {
    stdout().is_terminal()
}

fn paint(text: &str, color: Color, styled: bool) -> String {
    if styled {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

fn bold(text: &str, styled: bool) -> String {
    if styled {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// One line per family with its title and the tool names it answers to.
pub fn format_family_list(styled: bool) -> String {
    let width = Family::ALL
        .iter()
        .map(|family| family.name().len())
        .max()
        .unwrap_or_default();

    Family::ALL
        .iter()
        .map(|family| {
            let name = format!("{:width$}", family.name());
            let tools = aliases(*family);
            let line = format!("{}  {}", paint(&name, Color::Cyan, styled), family.title());
            if tools.is_empty() {
                line
            } else {
                format!("{line} (also: {})", tools.join(", "))
            }
        })
        .join("\n")
}

/// The family's fields with their current values, then every choice label
/// grouped by field.
pub fn format_description(model: &OptionModel, styled: bool) -> String {
    let family = model.family();
    let mut lines = vec![bold(&format!("{family}: {}", family.title()), styled)];

    for spec in family.schema() {
        let kind = match spec.kind {
            FieldKind::Choice { .. } => "choice",
            FieldKind::Toggle { .. } => "toggle",
            FieldKind::Text => "text",
        };
        let current = model
            .get(spec.name)
            .map(ToString::to_string)
            .unwrap_or_default();

        lines.push(format!(
            "  {} ({kind}) = `{current}`: {}",
            paint(spec.name, Color::Cyan, styled),
            spec.description
        ));
    }

    for (field, tips) in &describe(family).into_iter().chunk_by(|tip| tip.field) {
        lines.push(String::new());
        lines.push(bold(&format!("{field}:"), styled));
        for tip in tips {
            lines.push(format!(
                "  {}  {}",
                paint(tip.label, Color::Yellow, styled),
                tip.description
            ));
        }
    }

    lines.join("\n")
}

/// Numbered history entries, newest first.
pub fn format_history(history: &RecentHistory, styled: bool) -> String {
    if history.is_empty() {
        return "No recent commands".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{} {entry}", paint(&format!("[{index}]"), Color::DarkGrey, styled)))
        .join("\n")
}

pub fn format_command(rendered: &str, styled: bool) -> String {
    if styled {
        rendered.with(Color::Green).bold().to_string()
    } else {
        rendered.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_list_names_every_family() {
        let listing = format_family_list(false);

        assert_eq!(listing.lines().count(), Family::ALL.len());
        assert!(listing.lines().any(|line| line.starts_with("socket")
            && line.ends_with("(also: ss, netstat)")));
        assert!(listing.lines().any(|line| line.starts_with("git ")
            && !line.contains("also")));
    }

    #[test]
    fn test_description_shows_current_values_and_tips() {
        let mut model = OptionModel::new(Family::Archive);
        model.set("compression", "xz");

        let description = format_description(&model, false);

        assert!(description.starts_with("archive: tar archives"));
        assert!(description.contains("  compression (choice) = `xz`: Compression filter"));
        assert!(description.contains("  verbose (toggle) = `true`"));
        assert!(description.contains("\nmode:\n"));
        assert!(description.contains("\ncompression:\n"));
        assert_eq!(description.matches("\nmode:").count(), 1);
    }

    #[test]
    fn test_history_is_numbered_from_newest() {
        let mut history = RecentHistory::new();
        history.push("git status");
        history.push("top");

        assert_eq!(format_history(&history, false), "[0] top\n[1] git status");
        assert_eq!(format_history(&RecentHistory::new(), false), "No recent commands");
    }

    #[test]
    fn test_unstyled_output_has_no_escape_codes() {
        assert_eq!(format_command("ss -t -l -n", false), "ss -t -l -n");
        assert!(!format_family_list(false).contains('\u{1b}'));
        assert!(format_command("ss -t -l -n", true).contains('\u{1b}'));
    }
}
