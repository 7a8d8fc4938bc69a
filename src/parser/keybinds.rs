//! Keybind listing importer.
//!
//! Parses free-text keybind listings of the form `Name <separator> Key`
//! where the separator is one of `=`, `:`, `->`, or a tab. Lines without a
//! recognized separator fall back to splitting at the last space, so clean
//! two-column listings like "Reload R" still import.

use crate::models::Action;
use regex::Regex;

/// Separators tried in order on each line.
const SEPARATORS: [&str; 4] = ["=", ":", "->", "\t"];

/// Parses a keybind listing into actions.
///
/// Empty lines and `//`, `#`, `;` comments are skipped. Surrounding quotes
/// on either column are stripped. Every imported action gets a fresh id.
#[must_use]
pub fn parse_keybinds(text: &str) -> Vec<Action> {
    // strips one leading and one trailing quote character
    let quotes = Regex::new(r#"^["']|["']$"#).unwrap_or_else(|_| unreachable!("static pattern"));
    let mut actions = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with("//")
            || trimmed.starts_with('#')
            || trimmed.starts_with(';')
        {
            continue;
        }

        let Some((name, key)) = split_line(trimmed) else {
            continue;
        };

        let name = quotes.replace_all(name.trim(), "");
        let key = quotes.replace_all(key.trim(), "");
        if !name.is_empty() && !key.is_empty() {
            actions.push(Action::new(name, key));
        }
    }

    actions
}

/// Splits a line at the first matching separator, falling back to the last
/// space. The key side keeps any further separator occurrences intact.
fn split_line(line: &str) -> Option<(&str, &str)> {
    for sep in SEPARATORS {
        if let Some((name, key)) = line.split_once(sep) {
            return Some((name, key));
        }
    }

    line.rsplit_once(' ')
        .filter(|(name, key)| !name.trim().is_empty() && !key.trim().is_empty())
}
