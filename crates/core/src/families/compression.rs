//! `gzip` and `bzip2` single-file compression.
//!
//! File names are quoted when they hold spaces or shell metacharacters.

use crate::families::or_default;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::{operand, CommandTokens};

const DEFAULT_FILE: &str = "file.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Gzip,
    Bzip2,
}

impl Tool {
    fn program(self) -> &'static str {
        self.label()
    }

    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Tool::Gzip => "gz",
            Tool::Bzip2 => "bz2",
        }
    }
}

impl Choice for Tool {
    const ALL: &'static [Self] = &[Tool::Gzip, Tool::Bzip2];

    fn label(self) -> &'static str {
        match self {
            Tool::Gzip => "gzip",
            Tool::Bzip2 => "bzip2",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tool::Gzip => "Fast, produces .gz files",
            Tool::Bzip2 => "Better ratio, slower, produces .bz2 files",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Compress,
    Decompress,
    Pipe,
}

impl Choice for Action {
    const ALL: &'static [Self] = &[Action::Compress, Action::Decompress, Action::Pipe];

    fn label(self) -> &'static str {
        match self {
            Action::Compress => "compress",
            Action::Decompress => "decompress",
            Action::Pipe => "pipe",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Action::Compress => "Replace the file with its compressed version",
            Action::Decompress => "Restore the original file from the archive",
            Action::Pipe => "Stream the file through the compressor into a new file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Default,
    Fast,
    Best,
}

impl Level {
    fn flag(self) -> Option<&'static str> {
        match self {
            Level::Default => None,
            Level::Fast => Some("-1"),
            Level::Best => Some("-9"),
        }
    }
}

impl Choice for Level {
    const ALL: &'static [Self] = &[Level::Default, Level::Fast, Level::Best];

    fn label(self) -> &'static str {
        match self {
            Level::Default => "default",
            Level::Fast => "fast",
            Level::Best => "best",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Level::Default => "Tool's own balance of speed and size",
            Level::Fast => "-1: fastest, largest output",
            Level::Best => "-9: slowest, smallest output",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("tool", Tool::Gzip, "Compressor"),
        FieldSpec::choice("action", Action::Compress, "What to do with the file"),
        FieldSpec::choice("level", Level::Default, "Compression level"),
        FieldSpec::toggle("keep", false, "Keep the input file"),
        FieldSpec::text("file", "File to work on"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub tool: Tool,
    pub action: Action,
    pub level: Level,
    pub keep: bool,
    pub file: String,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        Self {
            tool: model.choice("tool"),
            action: model.choice("action"),
            level: model.choice("level"),
            keep: model.toggle("keep"),
            file: or_default(model.text("file"), DEFAULT_FILE),
        }
    }
}

/// Appends `.<ext>` unless the file already carries it.
pub fn with_extension(file: &str, tool: Tool) -> String {
    let suffix = format!(".{}", tool.extension());
    if file.ends_with(&suffix) {
        file.to_string()
    } else {
        format!("{file}{suffix}")
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let program = options.tool.program();

    match options.action {
        Action::Compress => {
            let mut tokens = CommandTokens::new(program);
            tokens
                .push_opt(options.level.flag())
                .push_if(options.keep, "-k")
                .push(operand(&options.file));
            tokens
        }
        Action::Decompress => {
            let mut tokens = CommandTokens::new(program);
            tokens
                .push_opt(options.level.flag())
                .push_if(options.keep, "-k")
                .push("-d")
                .push(operand(&with_extension(&options.file, options.tool)));
            tokens
        }
        Action::Pipe => {
            let mut tokens = CommandTokens::new("cat");
            tokens
                .push(operand(&options.file))
                .push("|")
                .push(program)
                .push_opt(options.level.flag())
                .push(">")
                .push(operand(&format!("{}.{}", options.file, options.tool.extension())));
            tokens
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{render_model, Family};

    fn render(edits: &[(&str, &str)]) -> String {
        let mut model = OptionModel::new(Family::Compression);
        for (name, value) in edits {
            model.set(name, value);
        }
        render_model(&model)
    }

    #[test]
    fn test_compress() {
        assert_eq!(render(&[]), "gzip file.txt");
        assert_eq!(
            render(&[("level", "best"), ("keep", "true"), ("file", "log.txt")]),
            "gzip -9 -k log.txt"
        );
        assert_eq!(
            render(&[("tool", "bzip2"), ("level", "fast"), ("file", "log.txt")]),
            "bzip2 -1 log.txt"
        );
    }

    #[test]
    fn test_decompress_appends_extension_once() {
        assert_eq!(
            render(&[("action", "decompress"), ("file", "file.txt")]),
            "gzip -d file.txt.gz"
        );
        assert_eq!(
            render(&[("action", "decompress"), ("file", "file.txt.gz")]),
            "gzip -d file.txt.gz"
        );
        assert_eq!(
            render(&[("action", "decompress"), ("tool", "bzip2"), ("keep", "true"), ("file", "dump.sql")]),
            "bzip2 -k -d dump.sql.bz2"
        );
    }

    #[test]
    fn test_decompress_keeps_level() {
        assert_eq!(
            render(&[("action", "decompress"), ("level", "best")]),
            "gzip -9 -d file.txt.gz"
        );
        assert_eq!(
            render(&[
                ("action", "decompress"),
                ("tool", "bzip2"),
                ("level", "fast"),
                ("keep", "true"),
                ("file", "dump.sql.bz2"),
            ]),
            "bzip2 -1 -k -d dump.sql.bz2"
        );
    }

    #[test]
    fn test_file_names_with_spaces_are_quoted() {
        assert_eq!(
            render(&[("action", "decompress"), ("file", "my notes.txt")]),
            "gzip -d \"my notes.txt.gz\""
        );
        assert_eq!(
            render(&[("action", "pipe"), ("file", "my notes.txt")]),
            "cat \"my notes.txt\" | gzip > \"my notes.txt.gz\""
        );
    }

    #[test]
    fn test_with_extension_is_idempotent() {
        let once = with_extension("file.txt", Tool::Gzip);
        let twice = with_extension(&once, Tool::Gzip);
        assert_eq!(once, "file.txt.gz");
        assert_eq!(twice, "file.txt.gz");
        assert_eq!(with_extension("file.gz", Tool::Bzip2), "file.gz.bz2");
    }

    #[test]
    fn test_pipe_builds_shell_pipeline() {
        assert_eq!(
            render(&[("action", "pipe"), ("file", "data.csv")]),
            "cat data.csv | gzip > data.csv.gz"
        );
        assert_eq!(
            render(&[("action", "pipe"), ("tool", "bzip2"), ("level", "best"), ("keep", "true")]),
            "cat file.txt | bzip2 -9 > file.txt.bz2"
        );
    }
}
