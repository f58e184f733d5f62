// Stallion Portal TUI - Application State

use std::error::Error;

use stallion_core::{KeyValueStore, ProfileStore, UserProfile};

use crate::tui::app::{NavigationState, Tab};
use crate::tui::theme::Palette;
use crate::tui::widgets::SettingsForm;

pub type AppResult<T> = Result<T, Box<dyn Error>>;

pub type BoxedProfileStore = ProfileStore<Box<dyn KeyValueStore>>;

/// The app shell. Sole owner of the profile and navigation state.
#[derive(Debug)]
pub struct App {
    pub(crate) profile: UserProfile,
    pub(crate) nav: NavigationState,
    pub(crate) profile_store: BoxedProfileStore,
    /// The profile as of the last sync, `None` before the first one.
    pub(crate) last_synced: Option<UserProfile>,
    /// Root style, only ever written by the sync effect.
    pub(crate) root_dark: bool,
    pub(crate) settings_form: SettingsForm,
    /// Student ID being typed in the chat view, if any.
    pub chat_draft: Option<String>,
    pub show_help_popup: bool,
    pub status_message: String,
    pub persist_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Loads the profile and runs the first sync, which writes the
    /// profile back and sets the root palette.
    ///
    /// # Errors
    /// If the store can't be read at all. Bad data is not an error.
    pub fn mount(mut profile_store: BoxedProfileStore, initial_tab: Tab) -> AppResult<Self> {
        let profile = profile_store.load()?;
        let root_dark = profile.is_dark();
        let mut app = Self {
            profile,
            nav: NavigationState::with_tab(initial_tab),
            profile_store,
            last_synced: None,
            root_dark,
            settings_form: SettingsForm::default(),
            chat_draft: None,
            show_help_popup: false,
            status_message: "Welcome to MMSU Stallion! Press '?' for help, 'q' to quit."
                .to_string(),
            persist_error: None,
            should_quit: false,
        };
        app.sync_effects();
        Ok(app)
    }

    /// Read-only snapshot of the profile.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    #[cfg(test)]
    pub fn profile_store(&self) -> &BoxedProfileStore {
        &self.profile_store
    }

    pub fn settings_form(&self) -> &SettingsForm {
        &self.settings_form
    }

    /// Whether the root style is dark. Follows the profile's theme
    /// after each [`App::sync_effects`].
    pub fn is_root_dark(&self) -> bool {
        self.root_dark
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.is_root_dark())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
