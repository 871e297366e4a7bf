//! Interactive editing of an option model, one field at a time.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;

use cmdsheet_core::error::Result;
use cmdsheet_core::option_model::{FieldKind, FieldSpec, OptionModel, SetOutcome};

fn prompt_hint(spec: &FieldSpec) -> Option<String> {
    match spec.kind {
        FieldKind::Choice { options, .. } => Some(
            options()
                .iter()
                .map(|option| option.label)
                .join("/"),
        ),
        FieldKind::Toggle { .. } => Some("yes/no".to_string()),
        FieldKind::Text => None,
    }
}

/// Prompts for one field until the input is accepted.
///
/// An empty line keeps the current value, as does the end of input. For text
/// fields a single `-` clears the value so the family's fallback applies.
pub fn prompt_field<R: BufRead, W: Write>(
    spec: &FieldSpec,
    model: &mut OptionModel,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let current = model
            .get(spec.name)
            .map(ToString::to_string)
            .unwrap_or_default();

        let prompt_base = match prompt_hint(spec) {
            Some(hint) => format!("Value for {spec} <{hint}>"),
            None => format!("Value for {spec}"),
        };

        if current.is_empty() {
            write!(output, "{prompt_base}: ")?;
        } else {
            write!(output, "{prompt_base} [{current}]: ")?;
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, keeping `{}` as `{current}`", spec.name);
            return Ok(());
        }

        let read_value = line.trim();
        if read_value.is_empty() {
            return Ok(());
        }

        let value = match (spec.kind, read_value) {
            (FieldKind::Text, "-") => "",
            _ => read_value,
        };

        match model.set(spec.name, value) {
            SetOutcome::Applied => return Ok(()),
            SetOutcome::Rejected => {
                let expected = match spec.kind {
                    FieldKind::Choice { .. } => "choice",
                    FieldKind::Toggle { .. } | FieldKind::Text => "value",
                };
                writeln!(output, "`{read_value}` is not a valid {expected} for `{}`", spec.name)?;
            }
            // Fields come from this model's own schema
            SetOutcome::UnknownField => return Ok(()),
        }
    }
}

/// Walks the whole schema of the model's family.
pub fn prompt_model<R: BufRead, W: Write>(
    model: &mut OptionModel,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    for spec in model.family().schema() {
        prompt_field(&spec, model, input, output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdsheet_core::families::{render_model, Family};
    use std::io::Cursor;

    fn run(family: Family, answers: &str) -> (OptionModel, String) {
        let mut model = OptionModel::new(family);
        let mut input = Cursor::new(answers.as_bytes());
        let mut output = Vec::new();

        prompt_model(&mut model, &mut input, &mut output).unwrap();

        (model, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_answers_keep_defaults() {
        let (model, output) = run(Family::Process, "\n\n\n\n");

        assert_eq!(model, OptionModel::new(Family::Process));
        assert!(output.contains("Value for `tool`"));
        assert!(output.contains("<top/htop>"));
        assert!(output.contains("[top]"));
    }

    #[test]
    fn test_answers_are_applied_in_schema_order() {
        let (model, _) = run(Family::Process, "htop\ndelay\n5\n\n");

        assert_eq!(render_model(&model), "htop -d 50");
    }

    #[test]
    fn test_invalid_choice_is_asked_again() {
        let (model, output) = run(Family::Process, "btop\nHTOP\n\n\n\n");

        assert!(output.contains("`btop` is not a valid choice for `tool`"));
        assert_eq!(render_model(&model), "htop");
    }

    #[test]
    fn test_invalid_toggle_is_asked_again() {
        let (model, output) = run(Family::Git, "add\n\nmaybe\nyes\n");

        assert!(output.contains("`maybe` is not a valid value for `all`"));
        assert!(!output.contains("valid choice"));
        assert_eq!(render_model(&model), "git add -A");
    }

    #[test]
    fn test_dash_clears_text() {
        let mut model = OptionModel::new(Family::Git);
        model.set("argument", "dev");
        let spec = Family::Git
            .schema()
            .into_iter()
            .find(|spec| spec.name == "argument")
            .unwrap();
        let mut input = Cursor::new("-\n".as_bytes());

        prompt_field(&spec, &mut model, &mut input, &mut Vec::new()).unwrap();

        assert_eq!(model.text("argument"), "");
    }

    #[test]
    fn test_end_of_input_stops_prompting() {
        let (model, _) = run(Family::Archive, "extract\n");

        assert_eq!(render_model(&model), "tar xvzf archive.tar.gz");
    }
}
