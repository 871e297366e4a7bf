//! `grep` content search and `find` filename search.
//!
//! A non-recursive content search is not a plain `grep`: it walks the tree
//! with `find -print0` and hands the names to `xargs -0 grep` so that file
//! names with spaces survive. The search path itself is quoted when it holds
//! spaces or shell metacharacters.

use crate::families::{non_empty, or_default};
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::{operand, quote, CommandTokens};

const DEFAULT_PATTERN: &str = "pattern";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Content,
    Filename,
}

impl Choice for Mode {
    const ALL: &'static [Self] = &[Mode::Content, Mode::Filename];

    fn label(self) -> &'static str {
        match self {
            Mode::Content => "content",
            Mode::Filename => "filename",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Mode::Content => "Search inside files with grep",
            Mode::Filename => "Search file names with find",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    #[default]
    Any,
    File,
    Directory,
}

impl FileType {
    fn find_type(self) -> Option<&'static str> {
        match self {
            FileType::Any => None,
            FileType::File => Some("f"),
            FileType::Directory => Some("d"),
        }
    }
}

impl Choice for FileType {
    const ALL: &'static [Self] = &[FileType::Any, FileType::File, FileType::Directory];

    fn label(self) -> &'static str {
        match self {
            FileType::Any => "any",
            FileType::File => "file",
            FileType::Directory => "directory",
        }
    }

    fn description(self) -> &'static str {
        match self {
            FileType::Any => "Match files and directories",
            FileType::File => "-type f: regular files only",
            FileType::Directory => "-type d: directories only",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("mode", Mode::Content, "Search inside files or by name"),
        FieldSpec::text("pattern", "Text or name pattern to look for"),
        FieldSpec::text("path", "Where to start searching"),
        FieldSpec::toggle("recursive", true, "Let grep descend into directories"),
        FieldSpec::toggle("ignore_case", false, "Case-insensitive match"),
        FieldSpec::toggle("invert_match", false, "Show lines that do not match"),
        FieldSpec::toggle("line_numbers", false, "Prefix matches with line numbers"),
        FieldSpec::choice("file_type", FileType::Any, "Kind of entry find reports"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Options {
    Content {
        pattern: String,
        path: String,
        recursive: bool,
        ignore_case: bool,
        invert_match: bool,
        line_numbers: bool,
    },
    Filename {
        pattern: Option<String>,
        path: String,
        file_type: FileType,
    },
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        let path = or_default(model.text("path"), ".");

        match model.choice::<Mode>("mode") {
            Mode::Content => Options::Content {
                pattern: or_default(model.text("pattern"), DEFAULT_PATTERN),
                path,
                recursive: model.toggle("recursive"),
                ignore_case: model.toggle("ignore_case"),
                invert_match: model.toggle("invert_match"),
                line_numbers: model.toggle("line_numbers"),
            },
            Mode::Filename => Options::Filename {
                pattern: non_empty(model.text("pattern")),
                path,
                file_type: model.choice("file_type"),
            },
        }
    }
}

/// Bundles the selected letters into one short-option group.
fn short_flags(letters: &[(bool, char)]) -> Option<String> {
    let bundled: String = letters
        .iter()
        .filter_map(|(selected, letter)| selected.then_some(*letter))
        .collect();

    (!bundled.is_empty()).then(|| format!("-{bundled}"))
}

pub fn compose(options: &Options) -> CommandTokens {
    match options {
        Options::Content {
            pattern,
            path,
            recursive,
            ignore_case,
            invert_match,
            line_numbers,
        } => {
            let match_flags = [(*ignore_case, 'i'), (*invert_match, 'v'), (*line_numbers, 'n')];

            if *recursive {
                let mut letters = vec![(true, 'r')];
                letters.extend(match_flags);

                let mut tokens = CommandTokens::new("grep");
                tokens
                    .push_opt(short_flags(&letters))
                    .push(quote(pattern))
                    .push(operand(path));
                tokens
            } else {
                let mut tokens = CommandTokens::new("find");
                tokens
                    .push(operand(path))
                    .extend(["-type", "f", "-print0", "|", "xargs", "-0", "grep"])
                    .push_opt(short_flags(&match_flags))
                    .push(quote(pattern));
                tokens
            }
        }
        Options::Filename {
            pattern,
            path,
            file_type,
        } => {
            let mut tokens = CommandTokens::new("find");
            tokens.push(operand(path));
            if let Some(find_type) = file_type.find_type() {
                tokens.extend(["-type", find_type]);
            }
            if let Some(pattern) = pattern {
                tokens.push("-name").push(quote(pattern));
            }
            tokens
        }
    }
}
