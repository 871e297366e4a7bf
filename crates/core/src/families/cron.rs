//! Crontab entries.
//!
//! The scheduled command is a whole command line and goes in as typed.

use crate::families::or_default;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::CommandTokens;

const DEFAULT_COMMAND: &str = "/path/to/script.sh";
const DEFAULT_LOG_FILE: &str = "/tmp/cron.log";
const TIME_FIELDS: [&str; 5] = ["minute", "hour", "day_of_month", "month", "day_of_week"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    #[default]
    Custom,
    Reboot,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl Choice for Schedule {
    const ALL: &'static [Self] = &[
        Schedule::Custom,
        Schedule::Reboot,
        Schedule::Hourly,
        Schedule::Daily,
        Schedule::Weekly,
        Schedule::Monthly,
    ];

    fn label(self) -> &'static str {
        match self {
            Schedule::Custom => "custom",
            Schedule::Reboot => "reboot",
            Schedule::Hourly => "hourly",
            Schedule::Daily => "daily",
            Schedule::Weekly => "weekly",
            Schedule::Monthly => "monthly",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Schedule::Custom => "Use the five time fields",
            Schedule::Reboot => "@reboot: once at startup",
            Schedule::Hourly => "@hourly: 0 * * * *",
            Schedule::Daily => "@daily: 0 0 * * *",
            Schedule::Weekly => "@weekly: 0 0 * * 0",
            Schedule::Monthly => "@monthly: 0 0 1 * *",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("schedule", Schedule::Custom, "Preset or custom schedule"),
        FieldSpec::text("minute", "Minute (0-59)"),
        FieldSpec::text("hour", "Hour (0-23)"),
        FieldSpec::text("day_of_month", "Day of month (1-31)"),
        FieldSpec::text("month", "Month (1-12)"),
        FieldSpec::text("day_of_week", "Day of week (0-6, Sunday is 0)"),
        FieldSpec::text("command", "Command to run"),
        FieldSpec::toggle("log_output", false, "Append stdout and stderr to a log file"),
        FieldSpec::text("log_file", "Log file for the output"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub schedule: Schedule,
    pub fields: [String; 5],
    pub command: String,
    pub log_file: Option<String>,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        // A time field is one crontab column, so inner whitespace cannot survive
        let fields = TIME_FIELDS.map(|name| {
            let compact: String = model.text(name).split_whitespace().collect();
            or_default(&compact, "*")
        });

        Self {
            schedule: model.choice("schedule"),
            fields,
            command: or_default(model.text("command"), DEFAULT_COMMAND),
            log_file: model
                .toggle("log_output")
                .then(|| or_default(model.text("log_file"), DEFAULT_LOG_FILE)),
        }
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let mut tokens = match options.schedule {
        Schedule::Custom => {
            let [minute, rest @ ..] = &options.fields;
            let mut tokens = CommandTokens::new(minute);
            tokens.extend(rest.iter().map(String::as_str));
            tokens
        }
        preset => CommandTokens::new(&format!("@{}", preset.label())),
    };

    tokens.push(options.command.as_str());
    if let Some(log_file) = &options.log_file {
        tokens.extend([">>", log_file.as_str(), "2>&1"]);
    }

    tokens
}
