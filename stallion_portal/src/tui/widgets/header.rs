// Stallion Portal TUI - Header Widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use stallion_core::{College, PORTAL_NAME, PORTAL_VERSION_NAME};

use crate::tui::app::{Action, App};
use crate::tui::theme::Palette;

#[derive(Debug, Clone)]
pub struct HeaderProps {
    pub user_college: College,
    pub on_college_change: fn(College) -> Action,
    pub on_open_settings: Action,
    pub is_dark: bool,
    pub toggle_theme: Action,
}

impl App {
    pub fn header_props(&self) -> HeaderProps {
        HeaderProps {
            user_college: self.profile.college,
            on_college_change: Action::change_college,
            on_open_settings: Action::OPEN_SETTINGS,
            is_dark: self.profile.is_dark(),
            toggle_theme: Action::ToggleTheme,
        }
    }
}

/// Render the header: portal title, selected college and theme switch
pub fn render_header(f: &mut Frame, area: Rect, props: &HeaderProps, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.block())
        .title(Line::from(format!(" {PORTAL_NAME} {PORTAL_VERSION_NAME} ")).centered())
        .style(palette.base());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(inner);

    let college = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", props.user_college.short()), palette.title()),
        Span::raw(props.user_college.name()),
        Span::styled("  (g/G)", palette.dim()),
    ]))
    .style(palette.base());
    f.render_widget(college, chunks[0]);

    let theme_label = if props.is_dark { "☾ Dark" } else { "☀ Light" };
    let theme = Paragraph::new(Line::from(vec![
        Span::styled(theme_label, palette.selected()),
        Span::styled("  (t)", palette.dim()),
    ]))
    .style(palette.base())
    .right_aligned();
    f.render_widget(theme, chunks[1]);
}

pub fn handle_header_key(props: &HeaderProps, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('g') => Some((props.on_college_change)(props.user_college.next())),
        KeyCode::Char('G') => Some((props.on_college_change)(props.user_college.prev())),
        KeyCode::Char(',') => Some(props.on_open_settings.clone()),
        KeyCode::Char('t') => Some(props.toggle_theme.clone()),
        _ => None,
    }
}
