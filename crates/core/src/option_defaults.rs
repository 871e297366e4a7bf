//! User overrides of the built-in option defaults.
//!
//! The file maps family names to option values:
//!
//! ```yaml
//! archive:
//!   compression: xz
//!   verbose: false
//! process:
//!   tool: htop
//!   delay_seconds: 2
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::families::Family;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct OptionDefaults {
    families: IndexMap<String, IndexMap<String, Value>>,
}

impl OptionDefaults {
    /// Checks that every family and option in the file exists and that every
    /// value is a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFamily`], [`Error::UnknownOption`] or
    /// [`Error::InvalidDefault`] for the first offending entry.
    pub fn validate(&self) -> Result<()> {
        for (family_name, options) in &self.families {
            let family = Family::from_name(family_name)
                .ok_or_else(|| Error::UnknownFamily(family_name.clone()))?;
            let schema = family.schema();

            for (option, value) in options {
                if !schema.iter().any(|spec| spec.name == option) {
                    return Err(Error::unknown_option(family_name, option));
                }
                scalar_to_string(value).ok_or_else(|| Error::InvalidDefault {
                    family: family_name.clone(),
                    option: option.clone(),
                })?;
            }
        }

        Ok(())
    }

    /// The `(option, value)` edits configured for `family`, in file order.
    pub fn edits_for(&self, family: Family) -> Vec<(String, String)> {
        self.families
            .iter()
            .filter(|(name, _)| Family::from_name(name) == Some(family))
            .flat_map(|(_, options)| options.iter())
            .filter_map(|(option, value)| {
                scalar_to_string(value).map(|value| (option.clone(), value))
            })
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> OptionDefaults {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_edits_for_family() {
        let defaults = parse(
            r#"
archive:
  compression: xz
  verbose: false
process:
  delay_seconds: 2
"#,
        );

        assert!(defaults.validate().is_ok());
        assert_eq!(
            defaults.edits_for(Family::Archive),
            vec![
                ("compression".to_string(), "xz".to_string()),
                ("verbose".to_string(), "false".to_string()),
            ]
        );
        assert_eq!(
            defaults.edits_for(Family::Process),
            vec![("delay_seconds".to_string(), "2".to_string())]
        );
        assert!(defaults.edits_for(Family::Git).is_empty());
    }

    #[test]
    fn test_validate_unknown_family() {
        let defaults = parse("kubectl:\n  namespace: default\n");
        assert!(matches!(defaults.validate(), Err(Error::UnknownFamily(_))));
    }

    #[test]
    fn test_validate_unknown_option() {
        let defaults = parse("archive:\n  level: 9\n");
        assert!(matches!(
            defaults.validate(),
            Err(Error::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_validate_non_scalar_value() {
        let defaults = parse("archive:\n  targets: [src, docs]\n");
        assert!(matches!(
            defaults.validate(),
            Err(Error::InvalidDefault { .. })
        ));
    }
}
