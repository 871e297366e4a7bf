//! Tool families and the composer dispatch.
//!
//! Every family module exposes the same three pieces:
//!
//! - `schema()` - the declarative field list the option model is built from
//! - `Options::from_model` - the normalize step, the one place where the
//!   family's fallback policy lives (empty text to literal defaults, protocol
//!   fallbacks, unit parsing)
//! - `compose(&Options)` - the pure flag composer producing ordered tokens
//!
//! [`compose`] dispatches once on the closed [`Family`] enum.

pub mod archive;
pub mod compression;
pub mod cron;
pub mod git;
pub mod keygen;
pub mod link;
pub mod process;
pub mod search;
pub mod socket;

use std::fmt::{Display, Formatter};

use crate::option_model::{ChoiceInfo, FieldKind, FieldSpec, OptionModel};
use crate::rendering::CommandTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Archive,
    Compression,
    Socket,
    Link,
    Search,
    Process,
    KeyGen,
    Cron,
    Git,
}

impl Family {
    pub const ALL: &'static [Family] = &[
        Family::Archive,
        Family::Compression,
        Family::Socket,
        Family::Link,
        Family::Search,
        Family::Process,
        Family::KeyGen,
        Family::Cron,
        Family::Git,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Archive => "archive",
            Family::Compression => "compression",
            Family::Socket => "socket",
            Family::Link => "link",
            Family::Search => "search",
            Family::Process => "process",
            Family::KeyGen => "keygen",
            Family::Cron => "cron",
            Family::Git => "git",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Family::Archive => "tar archives",
            Family::Compression => "gzip / bzip2 compression",
            Family::Socket => "ss / netstat socket inspection",
            Family::Link => "ip / ifconfig link configuration",
            Family::Search => "grep / find file search",
            Family::Process => "top / htop process monitor",
            Family::KeyGen => "ssh-keygen key generation",
            Family::Cron => "crontab entries",
            Family::Git => "common git commands",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }

    pub fn schema(self) -> Vec<FieldSpec> {
        match self {
            Family::Archive => archive::schema(),
            Family::Compression => compression::schema(),
            Family::Socket => socket::schema(),
            Family::Link => link::schema(),
            Family::Search => search::schema(),
            Family::Process => process::schema(),
            Family::KeyGen => keygen::schema(),
            Family::Cron => cron::schema(),
            Family::Git => git::schema(),
        }
    }
}

impl Display for Family {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A tool name accepted in place of a family name, optionally preselecting
/// the matching tool within that family.
struct Alias {
    name: &'static str,
    family: Family,
    preset: Option<(&'static str, &'static str)>,
}

const ALIASES: &[Alias] = &[
    Alias { name: "tar", family: Family::Archive, preset: None },
    Alias { name: "gzip", family: Family::Compression, preset: Some(("tool", "gzip")) },
    Alias { name: "bzip2", family: Family::Compression, preset: Some(("tool", "bzip2")) },
    Alias { name: "ss", family: Family::Socket, preset: Some(("type", "ss")) },
    Alias { name: "netstat", family: Family::Socket, preset: Some(("type", "netstat")) },
    Alias { name: "ip", family: Family::Link, preset: Some(("tool", "ip")) },
    Alias { name: "ifconfig", family: Family::Link, preset: Some(("tool", "ifconfig")) },
    Alias { name: "grep", family: Family::Search, preset: Some(("mode", "content")) },
    Alias { name: "find", family: Family::Search, preset: Some(("mode", "filename")) },
    Alias { name: "top", family: Family::Process, preset: Some(("tool", "top")) },
    Alias { name: "htop", family: Family::Process, preset: Some(("tool", "htop")) },
    Alias { name: "ssh-keygen", family: Family::KeyGen, preset: None },
    Alias { name: "crontab", family: Family::Cron, preset: None },
];

/// Resolves a family name or tool alias.
///
/// Returns the family and, for aliases naming one tool of a family, the
/// `(field, value)` edit that selects it.
pub fn lookup(name: &str) -> Option<(Family, Option<(&'static str, &'static str)>)> {
    if let Some(family) = Family::from_name(name) {
        return Some((family, None));
    }

    ALIASES
        .iter()
        .find(|alias| alias.name.eq_ignore_ascii_case(name))
        .map(|alias| (alias.family, alias.preset))
}

/// Tool names that resolve to `family`.
pub fn aliases(family: Family) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|alias| alias.family == family)
        .map(|alias| alias.name)
        .collect()
}

/// Builds the command tokens for the model's family.
pub fn compose(model: &OptionModel) -> CommandTokens {
    match model.family() {
        Family::Archive => archive::compose(&archive::Options::from_model(model)),
        Family::Compression => compression::compose(&compression::Options::from_model(model)),
        Family::Socket => socket::compose(&socket::Options::from_model(model)),
        Family::Link => link::compose(&link::Options::from_model(model)),
        Family::Search => search::compose(&search::Options::from_model(model)),
        Family::Process => process::compose(&process::Options::from_model(model)),
        Family::KeyGen => keygen::compose(&keygen::Options::from_model(model)),
        Family::Cron => cron::compose(&cron::Options::from_model(model)),
        Family::Git => git::compose(&git::Options::from_model(model)),
    }
}

/// Composes and renders the model in one step.
pub fn render_model(model: &OptionModel) -> String {
    compose(model).render()
}

/// One row of a family's tips table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub field: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Static lookup of every choice label of a family with its description.
pub fn describe(family: Family) -> Vec<Tip> {
    family
        .schema()
        .into_iter()
        .filter_map(|spec| match spec.kind {
            FieldKind::Choice { options, .. } => Some((spec.name, options())),
            _ => None,
        })
        .flat_map(|(field, options)| {
            options
                .into_iter()
                .map(move |ChoiceInfo { label, description }| Tip {
                    field,
                    label,
                    description,
                })
        })
        .collect()
}

/// Trimmed text, or `literal` when nothing is left.
pub(crate) fn or_default(text: &str, literal: &str) -> String {
    match text.trim() {
        "" => literal.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Trimmed text, or `None` when nothing is left.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    match text.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    }
}
