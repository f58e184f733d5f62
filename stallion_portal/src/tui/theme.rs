// Stallion Portal TUI - Root palette

use ratatui::style::{Color, Modifier, Style};

/// Colors every widget renders with. Built from the root style's
/// dark flag, never straight from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    /// University green.
    pub accent: Color,
    /// University gold.
    pub highlight: Color,
    pub error: Color,
}

impl Palette {
    pub fn new(dark: bool) -> Self {
        if dark {
            Self {
                bg: Color::Rgb(15, 23, 42),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(148, 163, 184),
                border: Color::Rgb(51, 65, 85),
                accent: Color::Rgb(34, 197, 94),
                highlight: Color::Rgb(250, 204, 21),
                error: Color::Rgb(248, 113, 113),
            }
        } else {
            Self {
                bg: Color::Rgb(248, 250, 252),
                fg: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(100, 116, 139),
                border: Color::Rgb(203, 213, 225),
                accent: Color::Rgb(0, 104, 55),
                highlight: Color::Rgb(180, 130, 0),
                error: Color::Rgb(185, 28, 28),
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn block(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }
}
