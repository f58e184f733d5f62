// Stallion Portal TUI - Navigation (tab bar) Widget

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::{Action, App, Tab};
use crate::tui::theme::Palette;

#[derive(Debug, Clone)]
pub struct NavigationProps {
    pub active_tab: Tab,
    pub set_active_tab: fn(Tab) -> Action,
}

impl App {
    pub fn navigation_props(&self) -> NavigationProps {
        NavigationProps {
            active_tab: self.nav.active_tab(),
            set_active_tab: Action::set_active_tab,
        }
    }
}

/// Render the tab bar
pub fn render_navigation(f: &mut Frame, area: Rect, props: &NavigationProps, palette: &Palette) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{tab} ({})", tab.index() + 1)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.block()),
        )
        .style(palette.dim())
        .highlight_style(palette.selected())
        .select(props.active_tab.index())
        .divider("│");
    f.render_widget(tabs, area);
}

pub fn handle_navigation_key(props: &NavigationProps, key: KeyCode) -> Option<Action> {
    let tab = match key {
        KeyCode::Char(c @ '1'..='4') => Tab::ALL[usize::from(c as u8 - b'1')],
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => props.active_tab.next(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => props.active_tab.previous(),
        _ => return None,
    };
    Some((props.set_active_tab)(tab))
}
