// Stallion Portal TUI - Actions (the callbacks handed to views) and the update step

use stallion_core::{info, pt, College, ProfileUpdate};

use crate::tui::app::{App, ChatMode, NavTransition, Tab};
use crate::tui::widgets::SettingsForm;

/// A request from a view or widget to change shell state.
///
/// Views never touch [`App`] themselves; they are handed
/// `Action`s (or `fn(..) -> Action` constructors) as callbacks
/// and the shell applies whatever they return in [`App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(NavTransition),
    UpdateProfile(ProfileUpdate),
    ToggleTheme,
    ToggleHelp,
    Quit,
}

impl Action {
    pub fn set_active_tab(tab: Tab) -> Action {
        Action::Navigate(NavTransition::SetActiveTab(tab))
    }

    pub fn set_chat_mode(mode: ChatMode) -> Action {
        Action::Navigate(NavTransition::SetChatMode(mode))
    }

    pub fn update_profile(update: ProfileUpdate) -> Action {
        Action::UpdateProfile(update)
    }

    pub fn update_student_id(id: String) -> Action {
        Action::UpdateProfile(ProfileUpdate::student_id(id))
    }

    pub fn change_college(college: College) -> Action {
        Action::UpdateProfile(ProfileUpdate::college(college))
    }

    pub const START_AI_TUTOR: Action = Action::Navigate(NavTransition::StartAiTutor);
    pub const OPEN_SETTINGS: Action = Action::Navigate(NavTransition::OpenSettings);
    pub const CLOSE_SETTINGS: Action = Action::Navigate(NavTransition::CloseSettings);
}

impl App {
    /// Applies an action to the in-memory state.
    ///
    /// Persistence and the root palette catch up in
    /// [`App::sync_effects`], which the event loop runs after
    /// every handled event.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Navigate(transition) => self.navigate(transition),
            Action::UpdateProfile(update) => {
                if self.profile.apply(update) {
                    self.status_message = "Profile updated.".to_string();
                }
            }
            Action::ToggleTheme => {
                let theme = self.profile.theme.toggled();
                self.profile.apply(ProfileUpdate::theme(theme));
                info!("Theme switched to {theme}");
                self.status_message = format!("Switched to {theme} theme.");
            }
            Action::ToggleHelp => self.show_help_popup = !self.show_help_popup,
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, transition: NavTransition) {
        if transition == NavTransition::OpenSettings && !self.nav.show_settings() {
            self.settings_form = SettingsForm::default();
        }
        if matches!(
            transition,
            NavTransition::SetActiveTab(Tab::Chat) | NavTransition::StartAiTutor
        ) {
            self.chat_draft = None;
        }
        if !self.nav.apply(transition) {
            return;
        }

        match transition {
            NavTransition::SetActiveTab(tab) => {
                pt!(no_log, "Showing {} view", self.current_view().name());
                self.status_message = format!("{tab}");
            }
            NavTransition::SetChatMode(mode) => {
                self.status_message = format!("Chat mode: {mode}");
            }
            NavTransition::StartAiTutor => {
                info!("Starting AI tutor session for {}", self.profile.college.short());
                self.status_message = "AI tutor ready. Ask away!".to_string();
            }
            NavTransition::OpenSettings => {
                self.status_message =
                    "Settings: ↑/↓ select, Enter edit/toggle, Esc close.".to_string();
            }
            NavTransition::CloseSettings => {
                self.status_message = "Settings closed.".to_string();
            }
        }
    }
}
