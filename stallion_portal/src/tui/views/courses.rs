// Stallion Portal TUI - Course explorer view

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::dispatch::CourseExplorerProps;
use crate::tui::theme::Palette;

pub fn render_courses(f: &mut Frame, area: Rect, props: &CourseExplorerProps, palette: &Palette) {
    let college = props.selected_college;
    let lines = vec![
        Line::from(Span::styled(
            format!("Programs of the {} ({})", college.name(), college.short()),
            palette.title(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Switch college with 'g' / 'G' to browse another catalogue.",
            palette.dim(),
        )),
    ];

    let courses = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Course Explorer ")
                .border_style(palette.block()),
        )
        .style(palette.base())
        .wrap(Wrap { trim: true });
    f.render_widget(courses, area);
}
