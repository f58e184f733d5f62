// Stallion Portal TUI - Home view

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::Action;
use crate::tui::dispatch::HomeProps;
use crate::tui::theme::Palette;

pub fn render_home(f: &mut Frame, area: Rect, props: &HomeProps, palette: &Palette) {
    let user = &props.user;
    let signed_in = if user.is_logged_in {
        Span::styled("Signed in", palette.base().fg(palette.accent))
    } else {
        Span::styled("Browsing as guest", palette.dim())
    };

    let lines = vec![
        Line::from(Span::styled(format!("Welcome, {}!", user.name), palette.title())),
        Line::from(""),
        Line::from(vec![Span::styled("College  ", palette.dim()), Span::raw(user.college.name())]),
        Line::from(vec![Span::styled("Campus   ", palette.dim()), Span::raw(user.campus.as_str())]),
        Line::from(vec![Span::styled("Account  ", palette.dim()), signed_in]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", palette.selected()),
            Span::raw(" to ask the Stallion AI assistant a question."),
        ]),
    ];

    let home = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Home ")
                .border_style(palette.block()),
        )
        .style(palette.base())
        .wrap(Wrap { trim: true });
    f.render_widget(home, area);
}

pub fn handle_home_key(props: &HomeProps, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(props.on_navigate_to_chat.clone()),
        _ => None,
    }
}
