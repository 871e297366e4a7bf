//! `ssh-keygen` key pair generation.
//!
//! The key file path is quoted when it holds spaces or shell metacharacters.

use crate::families::non_empty;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::{operand, quote, CommandTokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    Ed25519,
    Rsa,
    Ecdsa,
}

impl Choice for KeyType {
    const ALL: &'static [Self] = &[KeyType::Ed25519, KeyType::Rsa, KeyType::Ecdsa];

    fn label(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
            KeyType::Rsa => "rsa",
            KeyType::Ecdsa => "ecdsa",
        }
    }

    fn description(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "Short, fast and the recommended default",
            KeyType::Rsa => "Widest compatibility, use at least 3072 bits",
            KeyType::Ecdsa => "NIST curve keys, for systems that require them",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bits {
    #[default]
    Default,
    B2048,
    B3072,
    B4096,
}

impl Choice for Bits {
    const ALL: &'static [Self] = &[Bits::Default, Bits::B2048, Bits::B3072, Bits::B4096];

    fn label(self) -> &'static str {
        match self {
            Bits::Default => "default",
            Bits::B2048 => "2048",
            Bits::B3072 => "3072",
            Bits::B4096 => "4096",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Bits::Default => "Let ssh-keygen pick the size",
            Bits::B2048 => "Legacy minimum for RSA",
            Bits::B3072 => "Current ssh-keygen RSA default",
            Bits::B4096 => "Larger RSA key, slower handshakes",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("key_type", KeyType::Ed25519, "Key algorithm"),
        FieldSpec::choice("bits", Bits::Default, "RSA key size"),
        FieldSpec::text("comment", "Comment, usually an email address"),
        FieldSpec::text("file", "Where to write the private key"),
        FieldSpec::toggle("no_passphrase", false, "Create the key without a passphrase"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub key_type: KeyType,
    /// Only kept for RSA, the other algorithms have fixed sizes here.
    pub bits: Option<&'static str>,
    pub comment: Option<String>,
    pub file: Option<String>,
    pub no_passphrase: bool,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        let key_type: KeyType = model.choice("key_type");
        let bits = match (key_type, model.choice::<Bits>("bits")) {
            (KeyType::Rsa, Bits::Default) | (KeyType::Ed25519 | KeyType::Ecdsa, _) => None,
            (KeyType::Rsa, bits) => Some(bits.label()),
        };

        Self {
            key_type,
            bits,
            comment: non_empty(model.text("comment")),
            file: non_empty(model.text("file")),
            no_passphrase: model.toggle("no_passphrase"),
        }
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let mut tokens = CommandTokens::new("ssh-keygen");
    tokens.push("-t").push(options.key_type.label());

    if let Some(bits) = options.bits {
        tokens.push("-b").push(bits);
    }
    if let Some(comment) = &options.comment {
        tokens.push("-C").push(quote(comment));
    }
    if let Some(file) = &options.file {
        tokens.push("-f").push(operand(file));
    }
    if options.no_passphrase {
        tokens.push("-N").push(quote(""));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{render_model, Family};

    fn render(edits: &[(&str, &str)]) -> String {
        let mut model = OptionModel::new(Family::KeyGen);
        for (name, value) in edits {
            model.set(name, value);
        }
        render_model(&model)
    }

    #[test]
    fn test_default_key() {
        assert_eq!(render(&[]), "ssh-keygen -t ed25519");
    }

    #[test]
    fn test_bits_only_for_rsa() {
        assert_eq!(render(&[("key_type", "rsa"), ("bits", "4096")]), "ssh-keygen -t rsa -b 4096");
        assert_eq!(render(&[("key_type", "rsa")]), "ssh-keygen -t rsa");
        assert_eq!(render(&[("key_type", "ed25519"), ("bits", "4096")]), "ssh-keygen -t ed25519");
    }

    #[test]
    fn test_full_invocation() {
        assert_eq!(
            render(&[
                ("key_type", "rsa"),
                ("bits", "3072"),
                ("comment", " you@example.com "),
                ("file", "~/.ssh/deploy_key"),
                ("no_passphrase", "true"),
            ]),
            "ssh-keygen -t rsa -b 3072 -C \"you@example.com\" -f ~/.ssh/deploy_key -N \"\""
        );
    }

    #[test]
    fn test_key_file_with_spaces_is_quoted() {
        assert_eq!(
            render(&[("file", "keys/work laptop")]),
            "ssh-keygen -t ed25519 -f \"keys/work laptop\""
        );
    }
}
