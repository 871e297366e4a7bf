//! The option model: a declarative per-family schema of choice, toggle and
//! text fields, plus the value store a presentation layer edits.
//!
//! The model never fails. An edit either applies, is rejected (prior value
//! kept), or names a field the family does not have. Free text is stored
//! untouched; trimming and fallback literals belong to each family's
//! normalize step.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::families::Family;

/// A closed set of labelled values selectable for one field.
pub trait Choice: Copy + Default + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Short human-readable tip shown next to the label.
    fn description(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.label() == label)
    }
}

/// A selectable label together with its tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceInfo {
    pub label: &'static str,
    pub description: &'static str,
}

fn choice_table<T: Choice>() -> Vec<ChoiceInfo> {
    T::ALL
        .iter()
        .map(|choice| ChoiceInfo {
            label: choice.label(),
            description: choice.description(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Choice {
        options: fn() -> Vec<ChoiceInfo>,
        default: &'static str,
    },
    Toggle {
        default: bool,
    },
    Text,
}

impl FieldKind {
    fn default_value(&self) -> Value {
        match self {
            FieldKind::Choice { default, .. } => Value::Choice(*default),
            FieldKind::Toggle { default } => Value::Toggle(*default),
            FieldKind::Text => Value::Text(String::new()),
        }
    }

    fn parse(&self, raw: &str) -> Option<Value> {
        match self {
            FieldKind::Choice { options, .. } => options()
                .into_iter()
                .find(|option| option.label.eq_ignore_ascii_case(raw.trim()))
                .map(|option| Value::Choice(option.label)),
            FieldKind::Toggle { .. } => parse_toggle(raw).map(Value::Toggle),
            FieldKind::Text => Some(Value::Text(raw.to_string())),
        }
    }
}

fn parse_toggle(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// One field of a family schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

impl FieldSpec {
    pub fn choice<T: Choice>(name: &'static str, default: T, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Choice {
                options: choice_table::<T>,
                default: default.label(),
            },
            description,
        }
    }

    pub fn toggle(name: &'static str, default: bool, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Toggle { default },
            description,
        }
    }

    pub fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            description,
        }
    }
}

impl Display for FieldSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}` ({})", self.name, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Choice(&'static str),
    Toggle(bool),
    Text(String),
}

impl Display for Value {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Choice(label) => formatter.write_str(label),
            Value::Toggle(enabled) => write!(formatter, "{enabled}"),
            Value::Text(text) => formatter.write_str(text),
        }
    }
}

/// What happened to a single edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Applied,
    /// The value is not legal for the field, the prior value was kept.
    Rejected,
    UnknownField,
}

/// The current inputs of one family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionModel {
    family: Family,
    values: IndexMap<&'static str, Value>,
}

impl OptionModel {
    /// Creates a model holding every field's declared default.
    pub fn new(family: Family) -> Self {
        let values = family
            .schema()
            .iter()
            .map(|spec| (spec.name, spec.kind.default_value()))
            .collect();

        Self { family, values }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn set(&mut self, name: &str, raw: &str) -> SetOutcome {
        let schema = self.family.schema();
        let Some(spec) = schema.iter().find(|spec| spec.name == name) else {
            return SetOutcome::UnknownField;
        };

        match spec.kind.parse(raw) {
            Some(value) => {
                self.values.insert(spec.name, value);
                SetOutcome::Applied
            }
            None => SetOutcome::Rejected,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Reads a choice field, falling back to the type's default when the field
    /// is missing or holds another type's label.
    pub fn choice<T: Choice>(&self, name: &str) -> T {
        match self.values.get(name) {
            Some(Value::Choice(label)) => T::from_label(label).unwrap_or_default(),
            _ => T::default(),
        }
    }

    pub fn toggle(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Toggle(true)))
    }

    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(Value::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    /// Restores every field to its declared default.
    pub fn reset(&mut self) {
        *self = Self::new(self.family);
    }

    /// Fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::archive::{Compression, Mode};

    #[test]
    fn test_new_model_holds_schema_defaults() {
        let model = OptionModel::new(Family::Archive);

        assert_eq!(model.family(), Family::Archive);
        assert_eq!(model.choice::<Mode>("mode"), Mode::Create);
        assert_eq!(model.choice::<Compression>("compression"), Compression::Gzip);
        assert!(model.toggle("verbose"));
        assert_eq!(model.text("archive"), "");
        assert_eq!(model.iter().count(), Family::Archive.schema().len());
    }

    #[test]
    fn test_set_choice() {
        let mut model = OptionModel::new(Family::Archive);

        assert_eq!(model.set("mode", "extract"), SetOutcome::Applied);
        assert_eq!(model.choice::<Mode>("mode"), Mode::Extract);

        // Labels are matched case-insensitively
        assert_eq!(model.set("compression", "XZ"), SetOutcome::Applied);
        assert_eq!(model.get("compression"), Some(&Value::Choice("xz")));
    }

    #[test]
    fn test_unrecognized_choice_keeps_prior_value() {
        let mut model = OptionModel::new(Family::Archive);
        model.set("mode", "list");

        assert_eq!(model.set("mode", "explode"), SetOutcome::Rejected);
        assert_eq!(model.choice::<Mode>("mode"), Mode::List);
    }

    #[test]
    fn test_set_toggle() {
        let mut model = OptionModel::new(Family::Archive);

        assert_eq!(model.set("verbose", "off"), SetOutcome::Applied);
        assert!(!model.toggle("verbose"));
        assert_eq!(model.set("verbose", "YES"), SetOutcome::Applied);
        assert!(model.toggle("verbose"));
        assert_eq!(model.set("verbose", "maybe"), SetOutcome::Rejected);
        assert!(model.toggle("verbose"));
    }

    #[test]
    fn test_text_is_stored_untrimmed() {
        let mut model = OptionModel::new(Family::Archive);

        assert_eq!(model.set("targets", "  src/ "), SetOutcome::Applied);
        assert_eq!(model.text("targets"), "  src/ ");
        assert_eq!(model.set("targets", ""), SetOutcome::Applied);
        assert_eq!(model.text("targets"), "");
    }

    #[test]
    fn test_unknown_field() {
        let mut model = OptionModel::new(Family::Archive);
        let before = model.clone();

        assert_eq!(model.set("bogus", "1"), SetOutcome::UnknownField);
        assert_eq!(model, before);
    }

    #[test]
    fn test_mismatched_accessors_fall_back() {
        let model = OptionModel::new(Family::Archive);

        assert!(!model.toggle("archive"));
        assert_eq!(model.text("verbose"), "");
        assert_eq!(model.choice::<Mode>("compression"), Mode::Create);
    }

    #[test]
    fn test_reset() {
        let mut model = OptionModel::new(Family::Archive);
        model.set("mode", "list");
        model.set("archive", "backup.tar");

        model.reset();

        assert_eq!(model, OptionModel::new(Family::Archive));
    }

    #[test]
    fn test_field_spec_display() {
        let spec = FieldSpec::toggle("verbose", true, "List files as they are processed");
        assert_eq!(format!("{spec}"), "`verbose` (List files as they are processed)");
    }
}
