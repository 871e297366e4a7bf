//! `ss` and `netstat` socket listings.
//!
//! Both tools take the same letters (`t u l a n p`). `ss` gets each letter as
//! its own hyphenated flag, `netstat` gets one bundled group. A listing always
//! names at least one protocol, TCP when neither was selected.

use indexmap::IndexSet;

use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::CommandTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Ss,
    Netstat,
}

impl Choice for Tool {
    const ALL: &'static [Self] = &[Tool::Ss, Tool::Netstat];

    fn label(self) -> &'static str {
        match self {
            Tool::Ss => "ss",
            Tool::Netstat => "netstat",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tool::Ss => "Modern iproute2 socket statistics",
            Tool::Netstat => "Classic net-tools listing, still common on older hosts",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("type", Tool::Ss, "Which tool to use"),
        FieldSpec::toggle("tcp", true, "Show TCP sockets"),
        FieldSpec::toggle("udp", false, "Show UDP sockets"),
        FieldSpec::toggle("listening", true, "Only listening sockets"),
        FieldSpec::toggle("all", false, "Listening and established sockets"),
        FieldSpec::toggle("numeric", true, "Do not resolve names"),
        FieldSpec::toggle("processes", false, "Show the owning process"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub tool: Tool,
    pub tcp: bool,
    pub udp: bool,
    pub listening: bool,
    pub all: bool,
    pub numeric: bool,
    pub processes: bool,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        let udp = model.toggle("udp");
        let tcp = model.toggle("tcp") || !udp;

        Self {
            tool: model.choice("type"),
            tcp,
            udp,
            listening: model.toggle("listening"),
            all: model.toggle("all"),
            numeric: model.toggle("numeric"),
            processes: model.toggle("processes"),
        }
    }

    /// Selected letters in canonical order, each at most once.
    pub fn letters(&self) -> IndexSet<char> {
        [
            (self.tcp, 't'),
            (self.udp, 'u'),
            (self.listening, 'l'),
            (self.all, 'a'),
            (self.numeric, 'n'),
            (self.processes, 'p'),
        ]
        .into_iter()
        .filter_map(|(selected, letter)| selected.then_some(letter))
        .collect()
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let letters = options.letters();

    let flags = match options.tool {
        Tool::Ss => letters
            .iter()
            .map(|letter| format!("-{letter}"))
            .collect::<Vec<_>>()
            .join(" "),
        Tool::Netstat => format!("-{}", letters.iter().collect::<String>()),
    };

    let mut tokens = CommandTokens::new(options.tool.label());
    tokens.push(flags);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{render_model, Family};

    fn model(edits: &[(&str, &str)]) -> OptionModel {
        let mut model = OptionModel::new(Family::Socket);
        for (name, value) in edits {
            model.set(name, value);
        }
        model
    }

    #[test]
    fn test_defaults() {
        assert_eq!(render_model(&model(&[])), "ss -t -l -n");
        assert_eq!(render_model(&model(&[("type", "netstat")])), "netstat -tln");
    }

    #[test]
    fn test_tcp_fallback_when_no_protocol() {
        let model = model(&[
            ("type", "ss"),
            ("tcp", "false"),
            ("udp", "false"),
            ("listening", "true"),
            ("numeric", "false"),
        ]);

        let options = Options::from_model(&model);
        assert!(options.tcp);
        assert!(options.letters().contains(&'t'));
        assert_eq!(render_model(&model), "ss -t -l");
    }

    #[test]
    fn test_udp_only_does_not_force_tcp() {
        let model = model(&[("type", "netstat"), ("tcp", "false"), ("udp", "true")]);
        assert_eq!(render_model(&model), "netstat -uln");
    }

    #[test]
    fn test_every_letter_in_canonical_order() {
        let edits = [
            ("udp", "true"),
            ("all", "true"),
            ("processes", "true"),
        ];
        assert_eq!(render_model(&model(&edits)), "ss -t -u -l -a -n -p");

        let mut netstat = edits.to_vec();
        netstat.push(("type", "netstat"));
        assert_eq!(render_model(&model(&netstat)), "netstat -tulanp");
    }

    #[test]
    fn test_letters_are_unique() {
        let options = Options::from_model(&model(&[("udp", "true"), ("all", "true")]));
        let letters: Vec<char> = options.letters().into_iter().collect();
        assert_eq!(letters, vec!['t', 'u', 'l', 'a', 'n']);
    }
}
