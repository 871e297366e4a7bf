//! Parsing of `-p key=value` option edits.

use cmdsheet_core::error::Error::{OptionFormat, UnknownOption};
use cmdsheet_core::error::Result;
use cmdsheet_core::families::Family;

/// Splits one `key=value` edit.
///
/// Only the first `=` separates the key, so values may contain `=` themselves
/// (`-p argument=--depth=1`). The value may be empty, which clears a text
/// field back to its fallback.
///
/// # Errors
///
/// Returns [`OptionFormat`] if there is no `=` or the key is empty.
pub fn parse_edit(edit: &str) -> Result<(String, String)> {
    match edit.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(OptionFormat(edit.to_string())),
    }
}

/// Parses every edit and checks that each key is an option of `family`.
///
/// Values are not checked here: an illegal choice is reported by the session
/// and leaves the option unchanged.
///
/// # Errors
///
/// Returns [`OptionFormat`] for a malformed edit or [`UnknownOption`] for a
/// key the family does not have.
pub fn parse_edits(family: Family, edits: &[String]) -> Result<Vec<(String, String)>> {
    let schema = family.schema();

    edits
        .iter()
        .map(|edit| {
            let (key, value) = parse_edit(edit)?;
            if !schema.iter().any(|spec| spec.name == key) {
                return Err(UnknownOption {
                    family: family.to_string(),
                    option: key,
                });
            }
            Ok((key, value))
        })
        .collect()
}
