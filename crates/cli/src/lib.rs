//! cmdsheet CLI Library
//!
//! This crate provides the command-line front end for cmdsheet. It selects a
//! tool family, applies option edits from flags, a defaults file or an
//! interactive prompt, prints the synthesized command and keeps the recent
//! history on disk.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`edits`]: Parsing and checking of `key=value` option edits
//! - [`prompt`]: Field-by-field interactive editing
//! - [`output`]: Formatting of listings, descriptions and the command
//! - [`clipboard`]: The system clipboard behind the core `Clipboard` trait
//!
//! # Examples
//!
//! ```bash
//! # Default archive command
//! cmdsheet archive
//!
//! # Extract into a directory
//! cmdsheet tar -p mode=extract -p archive=backup.tar.gz -p directory=/opt
//!
//! # Prompt for every option, then copy the result
//! cmdsheet htop --interactive --copy
//!
//! # Show the history and reload an entry for editing
//! cmdsheet --history
//! cmdsheet --restore 1 -p argument=main
//! ```

pub mod cli_args;
pub mod clipboard;
pub mod edits;
pub mod output;
pub mod prompt;
