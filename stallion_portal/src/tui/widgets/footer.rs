// Stallion Portal TUI - Footer Widget

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the footer with status, profile and key hints
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30), Constraint::Length(22)])
        .split(area);

    let status_style = if app.persist_error.is_some() {
        palette.base().fg(palette.error)
    } else {
        palette.base()
    };
    let status = Paragraph::new(app.status_message.clone())
        .block(Block::default().borders(Borders::ALL).title(" Status ").border_style(palette.block()))
        .style(status_style)
        .wrap(Wrap { trim: true });
    f.render_widget(status, chunks[0]);

    let profile = app.profile();
    let who = if profile.is_logged_in {
        format!("{} · {}", profile.name, profile.campus)
    } else {
        format!("Guest · {}", profile.campus)
    };
    let account = Paragraph::new(who)
        .block(Block::default().borders(Borders::ALL).title(" Profile ").border_style(palette.block()))
        .style(palette.base().fg(palette.accent))
        .alignment(Alignment::Center);
    f.render_widget(account, chunks[1]);

    let help = Paragraph::new("'?' help | 'q' quit")
        .block(Block::default().borders(Borders::ALL).title(" Keys ").border_style(palette.block()))
        .style(palette.dim())
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}
