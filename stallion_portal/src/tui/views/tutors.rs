// Stallion Portal TUI - Tutor network view

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::Action;
use crate::tui::dispatch::TutorNetworkProps;
use crate::tui::theme::Palette;

pub fn render_tutors(f: &mut Frame, area: Rect, props: &TutorNetworkProps, palette: &Palette) {
    // Cards use a softer border on light backgrounds
    let card_border = if props.is_dark { palette.block() } else { palette.dim() };

    let lines = vec![
        Line::from(Span::styled(
            format!("Peer tutors for {}", props.selected_college.short()),
            palette.title(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("No tutor free right now? Press "),
            Span::styled("Enter", palette.selected()),
            Span::raw(" to start an AI tutoring session."),
        ]),
    ];

    let tutors = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tutor Network ")
                .border_style(card_border),
        )
        .style(palette.base())
        .wrap(Wrap { trim: true });
    f.render_widget(tutors, area);
}

pub fn handle_tutors_key(props: &TutorNetworkProps, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(props.on_start_ai_tutor.clone()),
        _ => None,
    }
}
