// Stallion Portal TUI - Child views

pub mod chat;
pub mod courses;
pub mod home;
pub mod tutors;

use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};

use crate::tui::app::Action;
use crate::tui::dispatch::View;
use crate::tui::theme::Palette;

/// Render whichever view the dispatcher picked
pub fn render_view(f: &mut Frame, area: Rect, view: &View, palette: &Palette, chat_draft: Option<&str>) {
    match view {
        View::Home(props) => home::render_home(f, area, props, palette),
        View::AiChat(props) => chat::render_chat(f, area, props, palette, chat_draft),
        View::CourseExplorer(props) => courses::render_courses(f, area, props, palette),
        View::TutorNetwork(props) => tutors::render_tutors(f, area, props, palette),
    }
}

/// Give a key to the active view. `chat_draft` is the chat view's own input state.
pub fn handle_view_key(view: &View, key: KeyCode, chat_draft: &mut Option<String>) -> Option<Action> {
    match view {
        View::Home(props) => home::handle_home_key(props, key),
        View::AiChat(props) => chat::handle_chat_key(props, key, chat_draft),
        View::CourseExplorer(_) => None,
        View::TutorNetwork(props) => tutors::handle_tutors_key(props, key),
    }
}
