//! Reading and writing the files cmdsheet keeps between runs.
//!
//! Both files are optional: a missing history is an empty history and a
//! missing defaults file means the built-in defaults apply.

use std::fs::{self, File};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::history::RecentHistory;
use crate::option_defaults::OptionDefaults;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn get_optional_reader(file_description: &str, path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(path)) {
        debug!("No {file_description} file at `{path}`");
        return Ok(None);
    }

    get_reader(file_description, path).map(Some)
}

/// Reads the recent command history.
///
/// Stored entries are normalized on the way in, so a hand-edited file with
/// duplicates or too many entries still yields a valid history.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a YAML
/// list of strings.
pub fn get_history(history_path: &str) -> Result<RecentHistory> {
    let Some(reader) = get_optional_reader("history", history_path)? else {
        return Ok(RecentHistory::new());
    };

    let entries: Vec<String> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )
    })?;

    Ok(RecentHistory::from_entries(entries))
}

/// Reads the recent command history, treating a broken file as empty.
///
/// The history is a convenience, so a file that cannot be read or parsed is
/// logged and replaced on the next save instead of stopping the run.
pub fn get_history_or_empty(history_path: &str) -> RecentHistory {
    get_history(history_path).unwrap_or_else(|e| {
        warn!("{e}, starting with an empty history");
        RecentHistory::new()
    })
}

/// Writes the recent command history, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or the
/// history cannot be serialized.
pub fn write_history(history_path: &str, history: &RecentHistory) -> Result<()> {
    if let Some(parent) = Path::new(history_path).parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io_error(
                "history directory".to_string(),
                parent.display().to_string(),
                e,
            )
        })?;
    }

    let writer = File::create(history_path)
        .map_err(|e| Error::io_error("history".to_string(), history_path.to_string(), e))?;

    serde_yaml::to_writer(writer, history).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "history".to_string(),
            history_path.to_string(),
            e,
        )
    })
}

/// Loads and validates the per-family option defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, is malformed, or
/// names a family or option that does not exist.
pub fn get_option_defaults(defaults_path: &str) -> Result<Option<OptionDefaults>> {
    let Some(reader) = get_optional_reader("defaults", defaults_path)? else {
        return Ok(None);
    };

    let defaults: OptionDefaults = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "defaults".to_string(),
            defaults_path.to_string(),
            e,
        )
    })?;

    defaults.validate()?;

    Ok(Some(defaults))
}
