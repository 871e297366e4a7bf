use std::io::{stdin, stdout};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use itertools::Itertools;
use log::{debug, error, info, warn};

use cmdsheet_cli::cli_args::Args;
use cmdsheet_cli::clipboard::SystemClipboard;
use cmdsheet_cli::edits::parse_edits;
use cmdsheet_cli::{output, prompt};
use cmdsheet_core::error::{Error, Result};
use cmdsheet_core::families::{lookup, Family};
use cmdsheet_core::history::{restore, RecentHistory, Restored};
use cmdsheet_core::session::{Clipboard, Session};
use cmdsheet_core::{config, file_handling};

/// Resolve the family argument and apply the defaults file and alias preset
fn start_session(args: &Args, history: RecentHistory) -> Result<Session<SystemClipboard>> {
    let Some(name) = &args.family else {
        let names = Family::ALL.iter().map(|family| family.name()).join(", ");
        return Err(Error::MissingFamily(names));
    };

    let (family, preset) = lookup(name).ok_or_else(|| Error::UnknownFamily(name.clone()))?;
    debug!("`{name}` resolved to the `{family}` family");

    let mut session = Session::new(family, SystemClipboard).with_history(history);

    let defaults_path = config::get_defaults_path(&args.defaults_path);
    debug!("Defaults path: `{defaults_path}`");
    if let Some(defaults) = file_handling::get_option_defaults(&defaults_path)? {
        session.on_model_change(&defaults.edits_for(family));
    }

    if let Some(preset) = preset {
        session.on_model_change(&[preset]);
    }

    Ok(session)
}

/// Print a history entry that cannot be edited, optionally copying it
fn replay_opaque(
    args: &Args,
    entry: String,
    mut history: RecentHistory,
    history_path: &str,
) -> Result<()> {
    if !args.edits.is_empty() || args.interactive {
        warn!("History entry `{entry}` is not editable, ignoring option edits");
    }

    println!("{}", output::format_command(&entry, output::stdout_is_styled()));

    if args.copy {
        match SystemClipboard.set_text(&entry) {
            Ok(()) => eprintln!("Copied to the clipboard"),
            Err(e) => error!("{e}"),
        }
    }

    if args.skip_history_save {
        info!("Skipping history save was specified. Not updating recent commands.");
        return Ok(());
    }

    history.push(entry);
    save_history(history_path, &history);
    Ok(())
}

/// The command is already printed, so a failed save only warns
fn save_history(history_path: &str, history: &RecentHistory) {
    if let Err(e) = file_handling::write_history(history_path, history) {
        warn!("{e}, recent commands were not updated");
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let styled = output::stdout_is_styled();

    if args.list {
        println!("{}", output::format_family_list(styled));
        return Ok(());
    }

    let history_path = config::get_history_path(&args.history_path);
    debug!("History path: `{history_path}`");
    let history = file_handling::get_history_or_empty(&history_path);

    if args.show_history {
        println!("{}", output::format_history(&history, styled));
        return Ok(());
    }

    let mut session = match args.restore {
        Some(index) => {
            let entry = history
                .get(index)
                .ok_or(Error::HistoryIndex(index, history.len()))?;

            match restore(entry) {
                Restored::Editable(model) => {
                    let mut session =
                        Session::new(model.family(), SystemClipboard).with_history(history);
                    session.load(model);
                    session
                }
                Restored::Opaque(entry) => {
                    return replay_opaque(&args, entry, history, &history_path);
                }
            }
        }
        None => start_session(&args, history)?,
    };

    let edits = parse_edits(session.model().family(), &args.edits)?;
    session.on_model_change(&edits);

    if args.describe {
        println!("{}", output::format_description(session.model(), styled));
        return Ok(());
    }

    if args.interactive {
        let mut model = session.model().clone();
        prompt::prompt_model(&mut model, &mut stdin().lock(), &mut stdout())?;
        session.load(model);
    }

    println!("{}", output::format_command(&session.render(), styled));

    if args.copy && session.copy(Instant::now()) {
        eprintln!("Copied to the clipboard");
    }

    if args.skip_history_save {
        info!("Skipping history save was specified. Not updating recent commands.");
        return Ok(());
    }

    session.record();
    save_history(&history_path, session.history());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
