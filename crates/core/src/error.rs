use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Unknown tool family: `{}`", .0)]
    UnknownFamily(String),

    #[error("The `{}` family has no option named `{}`", .family, .option)]
    UnknownOption { family: String, option: String },

    #[error("Option edits must be given as key=value, got: `{}`", .0)]
    OptionFormat(String),

    #[error("Default for `{}.{}` must be a string, number or boolean", .family, .option)]
    InvalidDefault { family: String, option: String },

    #[error("Could not write to the clipboard: {}", .0)]
    Clipboard(String),

    #[error("History entry {} does not exist, there are {} entries", .0, .1)]
    HistoryIndex(usize, usize),

    #[error("No tool family given, pass one of: {}", .0)]
    MissingFamily(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn unknown_option(family: &str, option: &str) -> Self {
        Self::UnknownOption {
            family: family.to_string(),
            option: option.to_string(),
        }
    }
}
