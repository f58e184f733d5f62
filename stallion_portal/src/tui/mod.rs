// Stallion Portal TUI Module

use std::io;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use stallion_core::{err, print};

mod app;
mod dispatch;
mod handlers;
mod theme;
mod ui;
mod views;
mod widgets;

use app::App;
pub use app::{AppResult, BoxedProfileStore, ChatMode, Tab};
pub use dispatch::dispatch_named;

/// Entry point for the TUI mode
pub fn run_tui(profile_store: BoxedProfileStore, initial_tab: Tab) -> AppResult<()> {
    // Mount before touching the terminal so load errors print normally
    let app = App::mount(profile_store, initial_tab)?;

    // Logs would garble the alternate screen
    print::set_print(false);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    print::set_print(true);

    if let Err(error) = &res {
        err!("TUI exited with an error: {error}");
    }
    res
}

/// Main event loop for the TUI
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> AppResult<()> {
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            handlers::handle_key_event(&mut app, key);
        }
        app.sync_effects();

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
