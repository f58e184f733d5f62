//! MMSU Stallion, a student portal for the terminal.
//!
//! Runs the TUI by default. The `profile` and `view` subcommands
//! work on the stored profile without opening the TUI.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use stallion_core::{
    err, info, print, FileStore, KeyValueStore, MemoryStore, ProfileStore, PORTAL_NAME,
    PORTAL_VERSION_NAME,
};

mod cli;
mod tui;

use cli::ProfileCommand;
use tui::{AppResult, BoxedProfileStore, Tab};

#[derive(Parser, Debug)]
#[command(name = "stallion_portal", version, about = "MMSU Stallion student portal")]
struct Cli {
    /// Where the profile and logs live (defaults to the user data dir)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,
    /// Tab to open on start: home, chat, courses or tutors
    #[arg(long, value_name = "NAME", default_value = "home")]
    tab: String,
    /// Keep the profile in memory only. Nothing is written to disk.
    #[arg(long, global = true)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or edit the stored profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Print which view a tab opens and the props it receives
    View {
        /// Tab name. Unknown names show the Home view.
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print::set_print(true);
            err!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Picks the backing store. An ephemeral session never touches the
/// portal directory, so the log stays in memory too.
fn open_store(cli: &Cli) -> AppResult<Box<dyn KeyValueStore>> {
    if cli.ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }

    let dir = stallion_core::portal_dir(cli.data_dir.as_deref())?;
    if let Err(error) = print::init_log_file(&dir) {
        err!(no_log, "Could not open the log file: {error}");
    }
    Ok(Box::new(FileStore::open(&dir)?))
}

fn run(cli: Cli) -> AppResult<()> {
    let mut profile_store: BoxedProfileStore = ProfileStore::new(open_store(&cli)?);

    let Some(command) = cli.command else {
        info!("Starting {PORTAL_NAME} {PORTAL_VERSION_NAME}");
        return tui::run_tui(profile_store, initial_tab(&cli.tab));
    };

    // Keep stdout to the command's own output; logs still reach the file
    print::set_print(false);
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Profile(cmd) => cli::profile_command(cmd, &mut profile_store, &mut stdout),
        Command::View { name } => cli::view_command(&name, &mut profile_store, &mut stdout),
    }
}

fn initial_tab(name: &str) -> Tab {
    Tab::from_name(name).unwrap_or_else(|| {
        err!(no_log, "Unknown tab {name:?}, opening home");
        Tab::Home
    })
}
