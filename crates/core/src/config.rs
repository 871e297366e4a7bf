//! Configuration path utilities for cmdsheet.
//!
//! This module provides functions for resolving the paths of the option
//! defaults file and the recent command history, expanding `~` in both.

/// Default path for the per-family option defaults
const DEFAULT_DEFAULTS_PATH: &str = "~/.cmdsheet/defaults.yml";
/// Default path for the recent command history
const DEFAULT_HISTORY_PATH: &str = "~/.cmdsheet/recent.yml";

/// Resolves the option defaults file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// defaults path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use cmdsheet_core::config::get_defaults_path;
///
/// let default_path = get_defaults_path(&None);
/// let custom_path = get_defaults_path(&Some("/path/to/defaults.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/defaults.yml");
/// ```
pub fn get_defaults_path(defaults_path_arg: &Option<String>) -> String {
    let defaults_path = match defaults_path_arg {
        Some(defaults_path) => defaults_path,
        None => DEFAULT_DEFAULTS_PATH,
    };

    shellexpand::tilde(defaults_path).to_string()
}

/// Resolves the recent command history path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// history path. Shell expansions like `~` are resolved.
pub fn get_history_path(history_path_arg: &Option<String>) -> String {
    let history_path = match history_path_arg {
        Some(history_path) => history_path,
        None => DEFAULT_HISTORY_PATH,
    };

    shellexpand::tilde(history_path).to_string()
}
