//! Everyday `git` commands.
//!
//! Several actions are more than one word (`stash pop`, `remote add`,
//! `switch -c`). [`Action::words`] is the literal sub-command an action
//! renders to, which is also what history restoration matches against.
//! A commit message is quoted. Any other argument goes in as typed, so
//! several paths can be given at once.

use crate::families::or_default;
use crate::option_model::{Choice, FieldSpec, OptionModel};
use crate::rendering::{quote, CommandTokens};

const DEFAULT_BRANCH: &str = "main";
const DEFAULT_NEW_BRANCH: &str = "feature";
const DEFAULT_MESSAGE: &str = "update";
const DEFAULT_REPOSITORY: &str = "https://github.com/user/repo.git";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Status,
    Add,
    Commit,
    Push,
    Pull,
    Clone,
    Switch,
    NewBranch,
    Stash,
    StashPop,
    RemoteAdd,
    LogGraph,
}

impl Action {
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Action::Status => &["status"],
            Action::Add => &["add"],
            Action::Commit => &["commit"],
            Action::Push => &["push"],
            Action::Pull => &["pull"],
            Action::Clone => &["clone"],
            Action::Switch => &["switch"],
            Action::NewBranch => &["switch", "-c"],
            Action::Stash => &["stash"],
            Action::StashPop => &["stash", "pop"],
            Action::RemoteAdd => &["remote", "add"],
            Action::LogGraph => &["log", "--oneline", "--graph"],
        }
    }

    /// Token placed between the sub-command and the argument, if the action
    /// takes an argument at all. An empty string means the argument follows
    /// the sub-command directly.
    pub fn argument_prefix(self) -> Option<&'static str> {
        match self {
            Action::Add | Action::Clone | Action::Switch | Action::NewBranch => Some(""),
            Action::Commit => Some("-m"),
            Action::Push | Action::Pull | Action::RemoteAdd => Some("origin"),
            Action::Status | Action::Stash | Action::StashPop | Action::LogGraph => None,
        }
    }

    /// The flag the `all` toggle turns into, for the actions that have one.
    pub fn all_flag(self) -> Option<&'static str> {
        match self {
            Action::Add => Some("-A"),
            Action::Commit => Some("-a"),
            _ => None,
        }
    }

    fn default_argument(self) -> &'static str {
        match self {
            Action::Add => ".",
            Action::Commit => DEFAULT_MESSAGE,
            Action::Push | Action::Pull | Action::Switch => DEFAULT_BRANCH,
            Action::NewBranch => DEFAULT_NEW_BRANCH,
            Action::Clone | Action::RemoteAdd => DEFAULT_REPOSITORY,
            Action::Status | Action::Stash | Action::StashPop | Action::LogGraph => "",
        }
    }
}

impl Choice for Action {
    const ALL: &'static [Self] = &[
        Action::Status,
        Action::Add,
        Action::Commit,
        Action::Push,
        Action::Pull,
        Action::Clone,
        Action::Switch,
        Action::NewBranch,
        Action::Stash,
        Action::StashPop,
        Action::RemoteAdd,
        Action::LogGraph,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Status => "status",
            Action::Add => "add",
            Action::Commit => "commit",
            Action::Push => "push",
            Action::Pull => "pull",
            Action::Clone => "clone",
            Action::Switch => "switch",
            Action::NewBranch => "new_branch",
            Action::Stash => "stash",
            Action::StashPop => "stash_pop",
            Action::RemoteAdd => "remote_add",
            Action::LogGraph => "log_graph",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Action::Status => "Show changed and staged files",
            Action::Add => "Stage a path, or everything with `all`",
            Action::Commit => "Record staged changes with a message",
            Action::Push => "Upload a branch to origin",
            Action::Pull => "Fetch and merge a branch from origin",
            Action::Clone => "Copy a remote repository",
            Action::Switch => "Move to an existing branch",
            Action::NewBranch => "Create a branch and move to it",
            Action::Stash => "Shelve uncommitted changes",
            Action::StashPop => "Reapply the last shelved changes",
            Action::RemoteAdd => "Register the origin remote",
            Action::LogGraph => "Compact history with branch graph",
        }
    }
}

pub fn schema() -> Vec<FieldSpec> {
    vec![
        FieldSpec::choice("action", Action::Status, "What to do"),
        FieldSpec::text("argument", "Path, branch, message or URL the action takes"),
        FieldSpec::toggle("all", false, "Stage everything (add) or commit all tracked changes"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub action: Action,
    pub argument: String,
    pub all: bool,
}

impl Options {
    pub fn from_model(model: &OptionModel) -> Self {
        let action: Action = model.choice("action");

        Self {
            action,
            argument: or_default(model.text("argument"), action.default_argument()),
            all: model.toggle("all") && action.all_flag().is_some(),
        }
    }
}

pub fn compose(options: &Options) -> CommandTokens {
    let action = options.action;
    let mut tokens = CommandTokens::new("git");
    tokens.extend(action.words().iter().copied());

    match action {
        // `add -A` stages the whole tree, a path would be redundant
        Action::Add if options.all => {
            tokens.push_opt(action.all_flag());
        }
        Action::Commit => {
            tokens
                .push_opt(action.all_flag().filter(|_| options.all))
                .push("-m")
                .push(quote(&options.argument));
        }
        _ => {
            if let Some(prefix) = action.argument_prefix() {
                tokens.push(prefix).push(options.argument.as_str());
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{render_model, Family};

    fn render(edits: &[(&str, &str)]) -> String {
        let mut model = OptionModel::new(Family::Git);
        for (name, value) in edits {
            model.set(name, value);
        }
        render_model(&model)
    }

    #[test]
    fn test_actions_without_argument() {
        assert_eq!(render(&[]), "git status");
        assert_eq!(render(&[("action", "stash"), ("argument", "ignored")]), "git stash");
        assert_eq!(render(&[("action", "stash_pop")]), "git stash pop");
        assert_eq!(render(&[("action", "log_graph")]), "git log --oneline --graph");
    }

    #[test]
    fn test_add() {
        assert_eq!(render(&[("action", "add")]), "git add .");
        assert_eq!(render(&[("action", "add"), ("argument", "src/main.rs")]), "git add src/main.rs");
        assert_eq!(
            render(&[("action", "add"), ("argument", "src/main.rs"), ("all", "true")]),
            "git add -A"
        );
    }

    #[test]
    fn test_commit_quotes_message() {
        assert_eq!(render(&[("action", "commit")]), "git commit -m \"update\"");
        assert_eq!(
            render(&[("action", "commit"), ("argument", "Fix \"quoted\" bug"), ("all", "true")]),
            "git commit -a -m \"Fix \\\"quoted\\\" bug\""
        );
    }

    #[test]
    fn test_remote_branch_actions() {
        assert_eq!(render(&[("action", "push")]), "git push origin main");
        assert_eq!(render(&[("action", "pull"), ("argument", "dev")]), "git pull origin dev");
        assert_eq!(
            render(&[("action", "remote_add"), ("argument", "git@host:me/app.git")]),
            "git remote add origin git@host:me/app.git"
        );
    }

    #[test]
    fn test_branching_and_clone() {
        assert_eq!(render(&[("action", "switch")]), "git switch main");
        assert_eq!(render(&[("action", "new_branch")]), "git switch -c feature");
        assert_eq!(
            render(&[("action", "new_branch"), ("argument", "fix/login")]),
            "git switch -c fix/login"
        );
        assert_eq!(
            render(&[("action", "clone")]),
            "git clone https://github.com/user/repo.git"
        );
    }

    #[test]
    fn test_all_is_ignored_where_meaningless() {
        let mut model = OptionModel::new(Family::Git);
        model.set("action", "push");
        model.set("all", "true");

        assert!(!Options::from_model(&model).all);
        assert_eq!(render_model(&model), "git push origin main");
    }
}
