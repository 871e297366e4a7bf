//! `top` and `htop` invocations.
//!
//! The same action maps to different flags per tool, and `htop` counts its
//! refresh delay in tenths of a second where `top` takes seconds.

use crate::families::or_default;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::CommandTokens;

const DEFAULT_DELAY_SECONDS: f64 = 3.0;
const DEFAULT_USER: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Top,
    Htop,
}

impl Choice for Tool {
    const ALL: &'static [Self] = &[Tool::Top, Tool::Htop];

    fn label(self) -> &'static str {
        match self {
            Tool::Top => "top",
            Tool::Htop => "htop",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tool::Top => "Available everywhere, keyboard driven",
            Tool::Htop => "Colourful, scrollable, mouse aware",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Interactive,
    Cores,
    Delay,
    User,
    SortMemory,
}

impl Choice for Action {
    const ALL: &'static [Self] = &[
        Action::Interactive,
        Action::Cores,
        Action::Delay,
        Action::User,
        Action::SortMemory,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Interactive => "interactive",
            Action::Cores => "cores",
            Action::Delay => "delay",
            Action::User => "user",
            Action::SortMemory => "sort_memory",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Action::Interactive => "Start with the default view",
            Action::Cores => "top -H shows threads, htop -t shows the tree",
            Action::Delay => "Refresh interval; htop counts tenths of a second",
            Action::User => "Only processes of one user",
            Action::SortMemory => "Sort by memory usage",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("tool", Tool::Top, "Which monitor to start"),
        FieldSpec::choice("action", Action::Interactive, "Startup behaviour"),
        FieldSpec::text("delay_seconds", "Refresh delay in seconds"),
        FieldSpec::text("user", "User whose processes to show"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub tool: Tool,
    pub action: Action,
    pub delay_seconds: f64,
    pub user: String,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        Self {
            tool: model.choice("tool"),
            action: model.choice("action"),
            delay_seconds: parse_delay(model.text("delay_seconds")),
            user: or_default(model.text("user"), DEFAULT_USER),
        }
    }
}

/// Positive, finite seconds, or the default delay.
fn parse_delay(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
        .unwrap_or(DEFAULT_DELAY_SECONDS)
}

/// `htop -d` ticks are tenths of a second, never below one.
pub fn htop_ticks(seconds: f64) -> u64 {
    ((seconds * 10.0).round() as u64).max(1)
}

pub fn compose(options: &Options) -> CommandTokens {
    let mut tokens = CommandTokens::new(options.tool.label());

    match (options.action, options.tool) {
        (Action::Interactive, _) => {}
        (Action::Cores, Tool::Top) => {
            tokens.push("-H");
        }
        (Action::Cores, Tool::Htop) => {
            tokens.push("-t");
        }
        (Action::Delay, Tool::Top) => {
            tokens.push("-d").push(options.delay_seconds.to_string());
        }
        (Action::Delay, Tool::Htop) => {
            tokens.push("-d").push(htop_ticks(options.delay_seconds).to_string());
        }
        (Action::User, _) => {
            tokens.push("-u").push(options.user.as_str());
        }
        (Action::SortMemory, Tool::Top) => {
            tokens.push("-o").push("%MEM");
        }
        (Action::SortMemory, Tool::Htop) => {
            tokens.push("-s").push("PERCENT_MEM");
        }
    }

    tokens
}
