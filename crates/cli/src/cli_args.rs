//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `cmdsheet` binary.
///
/// A family (or a tool alias such as `htop`) is selected positionally and its
/// options are edited with repeated `-p key=value` flags. The rendered command
/// is printed and pushed to the recent history.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdsheet_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmdsheet", "archive", "-p", "compression=xz"]);
/// assert_eq!(args.family.as_deref(), Some("archive"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// The tool family or tool name to build a command for.
    ///
    /// Either a family (`archive`, `socket`, `git`, ...) or one of its tools
    /// (`tar`, `netstat`, `htop`, ...), which also preselects that tool.
    #[arg(num_args(1))]
    pub family: Option<String>,

    /// Option edits in the format key=value.
    ///
    /// Multiple edits can be provided with repeated `-p` flags and are
    /// applied in order.
    ///
    /// # Examples
    /// ```bash
    /// cmdsheet archive -p mode=extract -p archive=backup.tar.gz
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub edits: Vec<String>,

    /// Walk through every option of the family and prompt for a value.
    #[arg(long, short = 'i', action)]
    pub interactive: bool,

    /// Copy the rendered command to the clipboard.
    #[arg(long, short = 'c', action)]
    pub copy: bool,

    /// Show the family's options and the meaning of every choice instead of
    /// rendering a command.
    #[arg(long, short = 'd', action)]
    pub describe: bool,

    /// List the available tool families.
    #[arg(long, short = 'L', action)]
    pub list: bool,

    /// Show the recent command history.
    #[arg(long = "history", short = 'H', action)]
    pub show_history: bool,

    /// Reload a history entry by its index in `--history`.
    ///
    /// Recognised `git` entries become editable again and accept `-p` edits;
    /// anything else is printed as is.
    #[arg(long, short = 'r', conflicts_with = "family")]
    pub restore: Option<usize>,

    /// Skip saving of this command to the recent history.
    #[arg(long, short = 's', action)]
    pub skip_history_save: bool,

    /// Path to the per-family option defaults YAML.
    ///
    /// If not provided, defaults to `~/.cmdsheet/defaults.yml`.
    #[arg(long, short = 'D')]
    pub defaults_path: Option<String>,

    /// Path to the file that stores the recent command history.
    ///
    /// If not provided, defaults to `~/.cmdsheet/recent.yml`.
    #[arg(long, short = 'l')]
    pub history_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cmdsheet"]);

        assert!(args.family.is_none());
        assert!(args.edits.is_empty());
        assert!(!args.interactive);
        assert!(!args.copy);
        assert!(!args.describe);
        assert!(!args.list);
        assert!(!args.show_history);
        assert!(args.restore.is_none());
        assert!(!args.skip_history_save);
        assert!(args.defaults_path.is_none());
        assert!(args.history_path.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "cmdsheet",
            "git",
            "-i",
            "-c",
            "-d",
            "-s",
            "-D",
            "/custom/defaults.yml",
            "-l",
            "/custom/recent.yml",
        ]);

        assert_eq!(args.family, Some("git".to_string()));
        assert!(args.interactive);
        assert!(args.copy);
        assert!(args.describe);
        assert!(args.skip_history_save);
        assert_eq!(args.defaults_path, Some("/custom/defaults.yml".to_string()));
        assert_eq!(args.history_path, Some("/custom/recent.yml".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "cmdsheet",
            "--list",
            "--history",
            "--copy",
            "--skip-history-save",
            "--defaults-path",
            "/custom/defaults.yml",
            "--history-path",
            "/custom/recent.yml",
        ]);

        assert!(args.list);
        assert!(args.show_history);
        assert!(args.copy);
        assert!(args.skip_history_save);
        assert_eq!(args.defaults_path, Some("/custom/defaults.yml".to_string()));
        assert_eq!(args.history_path, Some("/custom/recent.yml".to_string()));
    }

    #[test]
    fn test_args_edits_keep_order() {
        let args = Args::parse_from([
            "cmdsheet",
            "tar",
            "-p",
            "mode=extract",
            "--param",
            "archive=backup.tar.gz",
        ]);

        assert_eq!(args.family, Some("tar".to_string()));
        assert_eq!(args.edits, ["mode=extract", "archive=backup.tar.gz"]);
    }

    #[test]
    fn test_args_restore_index() {
        let args = Args::parse_from(["cmdsheet", "-r", "2", "-p", "argument=dev"]);

        assert_eq!(args.restore, Some(2));
        assert_eq!(args.edits, ["argument=dev"]);
    }

    #[test]
    fn test_args_restore_conflicts_with_family() {
        let result = Args::try_parse_from(["cmdsheet", "git", "--restore", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_restore_rejects_non_index() {
        let result = Args::try_parse_from(["cmdsheet", "--restore", "latest"]);
        assert!(result.is_err());
    }
}
