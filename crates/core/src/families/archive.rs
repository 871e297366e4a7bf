//! `tar` archive creation, extraction and listing.
//!
//! All single-letter options are bundled into one old-style key (`cvzf`): the
//! mode letter, `v`, the compression letter and finally `f`, which must stay
//! last because the archive name follows it directly.
//!
//! The archive name, the exclude pattern and the extract directory are quoted
//! when they hold spaces or shell metacharacters. `targets` is a
//! space-separated list of operands and goes in as typed.

use crate::families::{non_empty, or_default};
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::{operand, CommandTokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Extract,
    List,
}

impl Mode {
    fn letter(self) -> char {
        match self {
            Mode::Create => 'c',
            Mode::Extract => 'x',
            Mode::List => 't',
        }
    }
}

impl Choice for Mode {
    const ALL: &'static [Self] = &[Mode::Create, Mode::Extract, Mode::List];

    fn label(self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Extract => "extract",
            Mode::List => "list",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Mode::Create => "Pack files and directories into a new archive",
            Mode::Extract => "Unpack an archive into the current or a given directory",
            Mode::List => "Show the archive contents without unpacking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    Gzip,
    Bzip2,
    Xz,
    None,
}

impl Compression {
    fn letter(self) -> Option<char> {
        match self {
            Compression::Gzip => Some('z'),
            Compression::Bzip2 => Some('j'),
            Compression::Xz => Some('J'),
            Compression::None => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Compression::Gzip => ".tar.gz",
            Compression::Bzip2 => ".tar.bz2",
            Compression::Xz => ".tar.xz",
            Compression::None => ".tar",
        }
    }
}

impl Choice for Compression {
    const ALL: &'static [Self] = &[
        Compression::Gzip,
        Compression::Bzip2,
        Compression::Xz,
        Compression::None,
    ];

    fn label(self) -> &'static str {
        match self {
            Compression::Gzip => "gzip",
            Compression::Bzip2 => "bzip2",
            Compression::Xz => "xz",
            Compression::None => "none",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Compression::Gzip => "Fast and universally available (.tar.gz)",
            Compression::Bzip2 => "Smaller than gzip, slower (.tar.bz2)",
            Compression::Xz => "Best ratio, slowest to create (.tar.xz)",
            Compression::None => "Plain uncompressed archive (.tar)",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("mode", Mode::Create, "What tar should do"),
        FieldSpec::choice("compression", Compression::Gzip, "Compression filter"),
        FieldSpec::toggle("verbose", true, "List files as they are processed"),
        FieldSpec::text("archive", "Archive file name"),
        FieldSpec::text("targets", "Files or directories to pack"),
        FieldSpec::text("exclude", "Pattern to leave out when creating"),
        FieldSpec::text("directory", "Directory to extract into"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub compression: Compression,
    pub verbose: bool,
    pub archive: String,
    pub targets: String,
    pub exclude: Option<String>,
    pub directory: Option<String>,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        let compression: Compression = model.choice("compression");
        let default_archive = format!("archive{}", compression.extension());

        Self {
            mode: model.choice("mode"),
            compression,
            verbose: model.toggle("verbose"),
            archive: or_default(model.text("archive"), &default_archive),
            targets: or_default(model.text("targets"), "."),
            exclude: non_empty(model.text("exclude")),
            directory: non_empty(model.text("directory")),
        }
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let mut key = String::new();
    key.push(options.mode.letter());
    if options.verbose {
        key.push('v');
    }
    if let Some(letter) = options.compression.letter() {
        key.push(letter);
    }
    key.push('f');

    let mut tokens = CommandTokens::new("tar");
    tokens.push(key).push(operand(&options.archive));

    match options.mode {
        Mode::Create => {
            // GNU tar ignores --exclude given after the operands
            tokens
                .push_opt(
                    options
                        .exclude
                        .as_ref()
                        .map(|exclude| format!("--exclude={}", operand(exclude))),
                )
                .push(options.targets.as_str());
        }
        Mode::Extract => {
            if let Some(directory) = &options.directory {
                tokens.push("-C").push(operand(directory));
            }
        }
        Mode::List => {}
    }

    tokens
}
