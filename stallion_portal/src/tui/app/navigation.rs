// Stallion Portal TUI - Navigation state machine

use std::fmt;

/// Top-level content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Chat,
    Courses,
    Tutors,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Chat, Tab::Courses, Tab::Tutors];

    /// Machine name, as accepted by `--tab`.
    pub fn name(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Chat => "chat",
            Tab::Courses => "courses",
            Tab::Tutors => "tutors",
        }
    }

    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Chat => 1,
            Tab::Courses => 2,
            Tab::Tutors => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Home => write!(f, "Home"),
            Tab::Chat => write!(f, "AI Chat"),
            Tab::Courses => write!(f, "Courses"),
            Tab::Tutors => write!(f, "Tutors"),
        }
    }
}

/// Sub-mode of the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatMode {
    #[default]
    General,
    Tutoring,
}

impl ChatMode {
    pub fn toggled(self) -> ChatMode {
        match self {
            ChatMode::General => ChatMode::Tutoring,
            ChatMode::Tutoring => ChatMode::General,
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::General => write!(f, "GENERAL"),
            ChatMode::Tutoring => write!(f, "TUTORING"),
        }
    }
}

/// Every way the navigation state can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTransition {
    SetActiveTab(Tab),
    SetChatMode(ChatMode),
    /// Tutoring mode and the chat tab, together.
    StartAiTutor,
    OpenSettings,
    CloseSettings,
}

/// Transient UI state: tab x chat mode x settings overlay.
///
/// Fields are private; the only way to change them is
/// [`NavigationState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_tab: Tab,
    chat_mode: ChatMode,
    show_settings: bool,
}

impl NavigationState {
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn chat_mode(&self) -> ChatMode {
        self.chat_mode
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    /// Applies one transition. Returns whether the state changed.
    pub fn apply(&mut self, transition: NavTransition) -> bool {
        let before = *self;
        match transition {
            NavTransition::SetActiveTab(tab) => self.active_tab = tab,
            NavTransition::SetChatMode(mode) => self.chat_mode = mode,
            NavTransition::StartAiTutor => {
                self.chat_mode = ChatMode::Tutoring;
                self.active_tab = Tab::Chat;
            }
            NavTransition::OpenSettings => self.show_settings = true,
            NavTransition::CloseSettings => self.show_settings = false,
        }
        *self != before
    }
}
