// Stallion Portal TUI - Popup Widgets

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use stallion_core::print;

use crate::tui::app::{App, Tab};
use crate::tui::theme::Palette;

const RECENT_LOG_LINES: usize = 3;

/// Helper function to center a rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render help popup with controls for the current tab
pub fn render_help_popup(f: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help & Controls ")
        .borders(Borders::ALL)
        .border_style(palette.selected())
        .style(palette.base());

    let mut lines = get_contextual_help(app.nav().active_tab(), &palette);
    let recent = print::recent_logs(RECENT_LOG_LINES);
    if !recent.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("═══ RECENT ACTIVITY ═══", palette.title())));
        lines.extend(
            recent
                .iter()
                .map(|line| Line::from(Span::styled(line.to_string(), palette.dim()))),
        );
    }

    let help = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);

    f.render_widget(help, area);
}

pub fn get_contextual_help(tab: Tab, palette: &Palette) -> Vec<Line<'static>> {
    let section = |title: &'static str| Line::from(Span::styled(title, palette.title()));

    let mut help = vec![
        Line::from(Span::styled("MMSU Stallion Controls", palette.selected())),
        Line::from(""),
    ];

    match tab {
        Tab::Home => help.extend([
            section("═══ HOME ═══"),
            Line::from("Enter              Chat with the AI assistant"),
        ]),
        Tab::Chat => help.extend([
            section("═══ AI CHAT ═══"),
            Line::from("m                  Switch GENERAL / TUTORING mode"),
            Line::from("i                  Enter or change your student ID"),
            Line::from("Enter / Esc        Save / cancel the student ID"),
        ]),
        Tab::Courses => help.extend([
            section("═══ COURSES ═══"),
            Line::from("g / G              Browse the next / previous college"),
        ]),
        Tab::Tutors => help.extend([
            section("═══ TUTORS ═══"),
            Line::from("Enter              Start an AI tutoring session"),
        ]),
    }

    help.extend([
        Line::from(""),
        section("═══ EVERYWHERE ═══"),
        Line::from("1-4 / ←→ / Tab     Switch tabs"),
        Line::from("g / G              Next / previous college"),
        Line::from("t                  Toggle light / dark theme"),
        Line::from(",                  Open profile settings"),
        Line::from("?                  Toggle this help"),
        Line::from("q / Esc / Ctrl+C   Quit"),
        Line::from(""),
        Line::from("Press '?' or Esc to close this help".italic()),
    ]);

    help
}
