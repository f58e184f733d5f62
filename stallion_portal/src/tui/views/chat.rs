// Stallion Portal TUI - AI chat view

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{Action, ChatMode};
use crate::tui::dispatch::AiChatProps;
use crate::tui::theme::Palette;

const STUDENT_ID_MAX_LEN: usize = 16;

pub fn render_chat(
    f: &mut Frame,
    area: Rect,
    props: &AiChatProps,
    palette: &Palette,
    draft: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mode_hint = match props.mode {
        ChatMode::General => "Ask anything about campus life, enrolment or your courses.",
        ChatMode::Tutoring => "Tutoring mode: the assistant walks you through problems step by step.",
    };
    let mode_style = if props.is_dark {
        palette.selected()
    } else {
        palette.title()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Mode     ", palette.dim()),
            Span::styled(props.mode.to_string(), mode_style),
            Span::styled(
                format!("   ('m' to switch to {})", props.mode.toggled()),
                palette.dim(),
            ),
        ]),
        Line::from(vec![
            Span::styled("College  ", palette.dim()),
            Span::raw(props.college.name()),
        ]),
        Line::from(""),
        Line::from(mode_hint),
    ];

    let chat = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" AI Chat ")
                .border_style(palette.block()),
        )
        .style(palette.base())
        .wrap(Wrap { trim: true });
    f.render_widget(chat, chunks[0]);

    let id_line = match draft {
        Some(text) => Line::from(vec![
            Span::styled(text.to_owned(), palette.selected()),
            Span::styled("▏", palette.selected()),
            Span::styled("   Enter save, Esc cancel", palette.dim()),
        ]),
        None if props.student_id.is_empty() => Line::from(Span::styled(
            "Not set. Press 'i' to enter your student ID.",
            palette.dim(),
        )),
        None => Line::from(vec![
            Span::raw(props.student_id.as_str()),
            Span::styled("   ('i' to change)", palette.dim()),
        ]),
    };
    let id_box = Paragraph::new(id_line).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Student ID ")
            .border_style(if draft.is_some() {
                palette.selected()
            } else {
                palette.block()
            }),
    );
    f.render_widget(id_box, chunks[1]);
}

/// Keys for the chat view. While a student ID is being typed every
/// key goes to the draft.
pub fn handle_chat_key(
    props: &AiChatProps,
    key: KeyCode,
    draft: &mut Option<String>,
) -> Option<Action> {
    if draft.is_some() {
        match key {
            KeyCode::Char(c) if c.is_ascii_alphanumeric() || c == '-' => {
                if let Some(text) = draft.as_mut().filter(|t| t.len() < STUDENT_ID_MAX_LEN) {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = draft.as_mut() {
                    text.pop();
                }
            }
            KeyCode::Esc => *draft = None,
            KeyCode::Enter => {
                let id = draft.take().unwrap_or_default();
                let id = id.trim().to_owned();
                if id != props.student_id {
                    return Some((props.on_update_student_id)(id));
                }
            }
            _ => {}
        }
        return None;
    }

    match key {
        KeyCode::Char('m') => Some((props.on_mode_change)(props.mode.toggled())),
        KeyCode::Char('i') => {
            *draft = Some(props.student_id.clone());
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use stallion_core::{College, ProfileUpdate};

    use super::*;

    fn props(student_id: &str, mode: ChatMode) -> AiChatProps {
        AiChatProps {
            college: College::Computing,
            student_id: student_id.to_owned(),
            on_update_student_id: Action::update_student_id,
            is_dark: true,
            mode,
            on_mode_change: Action::set_chat_mode,
        }
    }

    #[test]
    fn test_mode_switch_uses_callback() {
        let mut draft = None;
        let action = handle_chat_key(&props("", ChatMode::General), KeyCode::Char('m'), &mut draft);
        assert_eq!(action, Some(Action::set_chat_mode(ChatMode::Tutoring)));
    }

    #[test]
    fn test_student_id_entry() {
        let p = props("", ChatMode::General);
        let mut draft = None;
        assert_eq!(handle_chat_key(&p, KeyCode::Char('i'), &mut draft), None);
        for c in "21-0x42!".chars() {
            handle_chat_key(&p, KeyCode::Char(c), &mut draft);
        }
        handle_chat_key(&p, KeyCode::Backspace, &mut draft);
        assert_eq!(draft.as_deref(), Some("21-0x4"));

        let action = handle_chat_key(&p, KeyCode::Enter, &mut draft);
        assert_eq!(
            action,
            Some(Action::UpdateProfile(ProfileUpdate::student_id("21-0x4".to_owned())))
        );
        assert_eq!(draft, None);
    }

    #[test]
    fn test_typing_m_in_draft_is_text() {
        let p = props("", ChatMode::General);
        let mut draft = Some(String::new());
        assert_eq!(handle_chat_key(&p, KeyCode::Char('m'), &mut draft), None);
        assert_eq!(draft.as_deref(), Some("m"));
    }

    #[test]
    fn test_unchanged_id_emits_nothing() {
        let p = props("20-1", ChatMode::General);
        let mut draft = None;
        handle_chat_key(&p, KeyCode::Char('i'), &mut draft);
        assert_eq!(handle_chat_key(&p, KeyCode::Enter, &mut draft), None);

        handle_chat_key(&p, KeyCode::Char('i'), &mut draft);
        handle_chat_key(&p, KeyCode::Esc, &mut draft);
        assert_eq!(draft, None);
    }
}
