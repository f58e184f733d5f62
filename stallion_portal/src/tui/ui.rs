// Stallion Portal TUI - UI Rendering

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::tui::app::App;
use crate::tui::views::render_view;
use crate::tui::widgets::{
    render_footer, render_header, render_help_popup, render_navigation, render_settings_modal,
};

/// Main rendering function
pub fn render(f: &mut Frame, app: &App) {
    let palette = app.palette();
    // Paint the root background first so every gap follows the theme
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Navigation tabs
            Constraint::Min(0),    // Active view
            Constraint::Length(3), // Footer with status
        ])
        .split(f.area());

    render_header(f, chunks[0], &app.header_props(), &palette);
    render_navigation(f, chunks[1], &app.navigation_props(), &palette);
    render_view(
        f,
        chunks[2],
        &app.current_view(),
        &palette,
        app.chat_draft.as_deref(),
    );
    render_footer(f, chunks[3], app);

    if let Some(props) = app.settings_props() {
        render_settings_modal(f, &props, app.settings_form(), &palette);
    }

    if app.show_help_popup {
        render_help_popup(f, app);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use stallion_core::{print, KeyValueStore, MemoryStore, ProfileStore};

    use super::*;
    use crate::tui::app::{Action, Tab};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(tab: Tab) -> App {
        print::set_print(false);
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        App::mount(ProfileStore::new(store), tab).unwrap()
    }

    #[test]
    fn test_renders_each_view() {
        let expected = [
            (Tab::Home, "Welcome, Stallion Guest!"),
            (Tab::Chat, "Student ID"),
            (Tab::Courses, "Course Explorer"),
            (Tab::Tutors, "Tutor Network"),
        ];
        for (tab, title) in expected {
            let text = screen(&app(tab));
            assert!(text.contains(title), "{tab:?} screen:\n{text}");
            assert!(text.contains("CCIS"));
        }
    }

    #[test]
    fn test_settings_overlay_shown_when_open() {
        let mut app = app(Tab::Home);
        assert!(!screen(&app).contains("Profile Settings"));
        app.update(Action::OPEN_SETTINGS);
        assert!(screen(&app).contains("Profile Settings"));
        app.update(Action::CLOSE_SETTINGS);
        assert!(!screen(&app).contains("Profile Settings"));
    }

    #[test]
    fn test_help_popup() {
        let mut app = app(Tab::Tutors);
        app.update(Action::ToggleHelp);
        let text = screen(&app);
        assert!(text.contains("Help & Controls"));
        assert!(text.contains("Start an AI tutoring session"));
    }
}
