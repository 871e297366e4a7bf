//! Command tokens and the renderer shared by every tool family.

use std::fmt::{Display, Formatter};

/// Ordered tokens of a synthesized command: program, flags, operands and
/// shell punctuation such as `|` or `>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTokens(Vec<String>);

impl CommandTokens {
    /// Starts a token list with the program name.
    pub fn new(program: &str) -> Self {
        Self(vec![program.to_string()])
    }

    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.0.push(token.into());
        self
    }

    pub fn push_if(&mut self, condition: bool, token: impl Into<String>) -> &mut Self {
        if condition {
            self.0.push(token.into());
        }
        self
    }

    pub fn push_opt<S: Into<String>>(&mut self, token: Option<S>) -> &mut Self {
        if let Some(token) = token {
            self.0.push(token.into());
        }
        self
    }

    pub fn extend<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(tokens.into_iter().map(Into::into));
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self) -> String {
        render(&self.0)
    }
}

impl Display for CommandTokens {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.render())
    }
}

/// Joins tokens with single spaces.
///
/// Tokens that are blank are dropped and every token loses its outer
/// whitespace, so the result never starts or ends with a space and never holds
/// a run of spaces between tokens. Whitespace inside a token is kept as is.
pub fn render<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref().trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps free text in double quotes, escaping the characters a shell still
/// interprets inside them.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for character in text.chars() {
        if matches!(character, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(character);
    }
    quoted.push('"');
    quoted
}

/// A file or directory operand, quoted only when the shell would otherwise
/// split it or interpret part of it.
pub fn operand(text: &str) -> String {
    let needs_quoting = text.chars().any(|character| {
        character.is_whitespace()
            || matches!(
                character,
                '"' | '\'' | '\\' | '$' | '`' | ';' | '&' | '|' | '<' | '>' | '(' | ')'
            )
    });

    if needs_quoting {
        quote(text)
    } else {
        text.to_string()
    }
}

/// Reverses [`quote`]. Returns `None` when `text` is not a double-quoted word.
pub fn unquote(text: &str) -> Option<String> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;

    let mut unquoted = String::with_capacity(inner.len());
    let mut characters = inner.chars();
    while let Some(character) = characters.next() {
        if character == '\\' {
            match characters.next() {
                Some(escaped) => unquoted.push(escaped),
                None => return None,
            }
        } else if character == '"' {
            return None;
        } else {
            unquoted.push(character);
        }
    }

    Some(unquoted)
}
