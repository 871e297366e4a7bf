//! `ip` and `ifconfig` interface configuration.
//!
//! The two tools share no grammar, so every action maps to a distinct shape
//! per tool. `ifconfig` has no routing verb and falls back to `route -n`.
//!
//! Interface names and addresses cannot contain spaces and go in as typed.

use crate::families::or_default;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::CommandTokens;

const DEFAULT_INTERFACE: &str = "eth0";
const DEFAULT_ADDRESS: &str = "192.168.1.100";
const DEFAULT_PREFIX: &str = "/24";
const DEFAULT_NETMASK: &str = "255.255.255.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Ip,
    Ifconfig,
}

impl Choice for Tool {
    const ALL: &'static [Self] = &[Tool::Ip, Tool::Ifconfig];

    fn label(self) -> &'static str {
        match self {
            Tool::Ip => "ip",
            Tool::Ifconfig => "ifconfig",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tool::Ip => "iproute2, the current Linux tool",
            Tool::Ifconfig => "net-tools, deprecated on Linux but still found on BSD and macOS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Show,
    Up,
    Down,
    AddrAdd,
    RouteShow,
}

impl Choice for Action {
    const ALL: &'static [Self] = &[
        Action::Show,
        Action::Up,
        Action::Down,
        Action::AddrAdd,
        Action::RouteShow,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Show => "show",
            Action::Up => "up",
            Action::Down => "down",
            Action::AddrAdd => "addr_add",
            Action::RouteShow => "route_show",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Action::Show => "Show addresses of the interface",
            Action::Up => "Bring the interface up",
            Action::Down => "Take the interface down",
            Action::AddrAdd => "Assign an IPv4 address (class C mask)",
            Action::RouteShow => "Print the kernel routing table",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("tool", Tool::Ip, "Which tool to use"),
        FieldSpec::choice("action", Action::Show, "What to do"),
        FieldSpec::text("interface", "Network interface"),
        FieldSpec::text("address", "IPv4 address to assign"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub tool: Tool,
    pub action: Action,
    pub interface: String,
    pub address: String,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        Self {
            tool: model.choice("tool"),
            action: model.choice("action"),
            interface: or_default(model.text("interface"), DEFAULT_INTERFACE),
            address: or_default(model.text("address"), DEFAULT_ADDRESS),
        }
    }

    fn has_prefix(&self) -> bool {
        self.address.contains('/')
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let interface = options.interface.as_str();

    match (options.tool, options.action) {
        (Tool::Ip, Action::Show) => {
            let mut tokens = CommandTokens::new("ip");
            tokens.extend(["addr", "show", interface]);
            tokens
        }
        (Tool::Ip, Action::Up | Action::Down) => {
            let mut tokens = CommandTokens::new("ip");
            tokens.extend(["link", "set", interface, options.action.label()]);
            tokens
        }
        (Tool::Ip, Action::AddrAdd) => {
            let address = if options.has_prefix() {
                options.address.clone()
            } else {
                format!("{}{DEFAULT_PREFIX}", options.address)
            };
            let mut tokens = CommandTokens::new("ip");
            tokens
                .extend(["addr", "add"])
                .push(address)
                .extend(["dev", interface]);
            tokens
        }
        (Tool::Ip, Action::RouteShow) => {
            let mut tokens = CommandTokens::new("ip");
            tokens.extend(["route", "show"]);
            tokens
        }
        (Tool::Ifconfig, Action::Show) => {
            let mut tokens = CommandTokens::new("ifconfig");
            tokens.push(interface);
            tokens
        }
        (Tool::Ifconfig, Action::Up | Action::Down) => {
            let mut tokens = CommandTokens::new("ifconfig");
            tokens.extend([interface, options.action.label()]);
            tokens
        }
        (Tool::Ifconfig, Action::AddrAdd) => {
            let mut tokens = CommandTokens::new("ifconfig");
            tokens.extend([interface, options.address.as_str()]);
            if !options.has_prefix() {
                tokens.extend(["netmask", DEFAULT_NETMASK]);
            }
            tokens
        }
        (Tool::Ifconfig, Action::RouteShow) => {
            let mut tokens = CommandTokens::new("route");
            tokens.push("-n");
            tokens
        }
    }
}
