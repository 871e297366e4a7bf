//! Recent command history and best-effort restoration of an entry.
//!
//! The history is a short most-recent-first list of rendered commands,
//! deduplicated by exact string equality.
//!
//! Restoration only understands the `git` family: an entry is matched
//! against the known, possibly multi-word, sub-commands, and the candidate
//! model is accepted only if it renders back to the identical string.
//! Anything else, including hand-edited or punctuated entries, comes back as
//! an opaque command with no structured fields.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::families::git::Action;
use crate::families::{render_model, Family};
use crate::option_model::{Choice, OptionModel};
use crate::rendering::unquote;

/// Most entries a history keeps.
pub const HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentHistory {
    entries: Vec<String>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from stored entries, enforcing the dedup and size
    /// rules on data that may have been edited by hand.
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut history = Self::new();
        for entry in entries.into_iter().rev() {
            history.push(entry);
        }
        history
    }

    /// Puts `command` first, dropping an equal older entry and anything past
    /// [`HISTORY_LIMIT`]. Blank commands are ignored.
    pub fn push(&mut self, command: impl Into<String>) {
        let command = command.into();
        if command.trim().is_empty() {
            return;
        }

        self.entries.retain(|entry| *entry != command);
        self.entries.insert(0, command);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Result of turning a history entry back into something editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restored {
    Editable(OptionModel),
    /// Not recognised; the command is shown as is and cannot be edited.
    Opaque(String),
}

pub fn restore(entry: &str) -> Restored {
    let Some(rest) = strip_word(entry, "git") else {
        debug!("History entry `{entry}` is not a git command");
        return Restored::Opaque(entry.to_string());
    };

    let mut candidates: Vec<Action> = Action::ALL
        .iter()
        .copied()
        .filter(|action| strip_words(rest, action.words()).is_some())
        .collect();
    // Longest sub-command first, so `stash pop` wins over `stash`
    candidates.sort_by_key(|action| std::cmp::Reverse(action.words().len()));

    for action in candidates {
        if let Some(model) = restore_git(entry, rest, action) {
            return Restored::Editable(model);
        }
    }

    debug!("History entry `{entry}` did not match a known git action");
    Restored::Opaque(entry.to_string())
}

fn restore_git(entry: &str, rest: &str, action: Action) -> Option<OptionModel> {
    let mut tail = strip_words(rest, action.words())?;

    let mut model = OptionModel::new(Family::Git);
    model.set("action", action.label());

    if let Some(flag) = action.all_flag() {
        if let Some(after_flag) = strip_word(tail, flag) {
            model.set("all", "true");
            tail = after_flag;
        }
    }

    if let Some(prefix) = action.argument_prefix() {
        let argument = strip_word(tail, prefix).unwrap_or(tail);
        let argument = unquote(argument).unwrap_or_else(|| argument.to_string());
        model.set("argument", &argument);
    }

    (render_model(&model) == entry).then_some(model)
}

/// Strips a leading `word` that is followed by a space or the end of text.
fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    if word.is_empty() {
        return Some(text);
    }

    let rest = text.strip_prefix(word)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(' ')
    }
}

fn strip_words<'a>(text: &'a str, words: &[&str]) -> Option<&'a str> {
    words
        .iter()
        .try_fold(text, |remaining, word| strip_word(remaining, word))
}
