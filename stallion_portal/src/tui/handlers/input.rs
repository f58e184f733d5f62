// Stallion Portal TUI - Input Event Handler

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::{Action, App};
use crate::tui::views::handle_view_key;
use crate::tui::widgets::{handle_header_key, handle_navigation_key, handle_settings_key};

/// Handle a keyboard event: route it to whoever owns the key,
/// then apply the resulting action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.update(Action::Quit);
        return;
    }

    if let Some(action) = route_key(app, key.code) {
        app.update(action);
    }
}

fn route_key(app: &mut App, code: KeyCode) -> Option<Action> {
    // Help popup swallows everything until closed
    if app.show_help_popup {
        return match code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    // Settings overlay is modal
    if let Some(props) = app.settings_props() {
        return handle_settings_key(&props, code, &mut app.settings_form);
    }

    let view = app.current_view();

    // Typing a student ID in the chat view
    if app.chat_draft.is_some() {
        return handle_view_key(&view, code, &mut app.chat_draft);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('?') => return Some(Action::ToggleHelp),
        _ => {}
    }

    handle_header_key(&app.header_props(), code)
        .or_else(|| handle_navigation_key(&app.navigation_props(), code))
        .or_else(|| handle_view_key(&view, code, &mut app.chat_draft))
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use stallion_core::{print, College, KeyValueStore, MemoryStore, ProfileStore, Theme};

    use super::*;
    use crate::tui::app::{ChatMode, Tab};

    fn mounted() -> App {
        print::set_print(false);
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        App::mount(ProfileStore::new(store), Tab::Home).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        app.sync_effects();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_home_enter_goes_to_chat() {
        let mut app = mounted();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav().active_tab(), Tab::Chat);
        assert_eq!(app.nav().chat_mode(), ChatMode::General);
    }

    #[test]
    fn test_tutor_handoff_from_keyboard() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav().active_tab(), Tab::Tutors);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.nav().active_tab(), Tab::Chat);
        assert_eq!(app.nav().chat_mode(), ChatMode::Tutoring);
    }

    #[test]
    fn test_student_id_typed_in_chat_is_persisted() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('i'));
        // 'q', 't' and 'g' are text here, not global keys
        type_text(&mut app, "21-qtg");
        assert!(!app.should_quit());
        assert_eq!(app.profile().theme, Theme::Dark);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.profile().student_id, "21-qtg");
        let raw = app.profile_store().raw().unwrap().unwrap();
        assert!(raw.contains("\"studentId\":\"21-qtg\""));
    }

    #[test]
    fn test_header_keys() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.profile().college, College::Engineering);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.profile().college, College::Computing);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.profile().theme, Theme::Light);
        assert!(!app.is_root_dark());
    }

    #[test]
    fn test_settings_overlay_is_modal() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char(','));
        assert!(app.nav().show_settings());

        // '4' doesn't switch tabs while the overlay is open
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav().active_tab(), Tab::Home);

        // Email row: edit, type, save
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "juan@mmsu.edu.ph");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.profile().email, "juan@mmsu.edu.ph");

        press(&mut app, KeyCode::Esc);
        assert!(!app.nav().show_settings());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_reopened_settings_start_fresh() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char(','));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char(','));
        assert_eq!(app.settings_form().selected, 0);
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav().active_tab(), Tab::Home);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help_popup);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = mounted();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = mounted();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }
}
