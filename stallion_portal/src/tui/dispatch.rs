// Stallion Portal TUI - View dispatcher
//
// Maps the active tab to exactly one child view and hands it the
// slice of state and callbacks it needs. Callbacks are `Action`s or
// `fn(..) -> Action` constructors; views return them, the shell applies them.

use stallion_core::{College, UserProfile};

use crate::tui::app::{Action, App, ChatMode, Tab};

#[derive(Debug, Clone)]
pub struct HomeProps {
    pub user: UserProfile,
    pub on_navigate_to_chat: Action,
}

#[derive(Debug, Clone)]
pub struct AiChatProps {
    pub college: College,
    pub student_id: String,
    pub on_update_student_id: fn(String) -> Action,
    pub is_dark: bool,
    pub mode: ChatMode,
    pub on_mode_change: fn(ChatMode) -> Action,
}

#[derive(Debug, Clone)]
pub struct CourseExplorerProps {
    pub selected_college: College,
}

#[derive(Debug, Clone)]
pub struct TutorNetworkProps {
    pub selected_college: College,
    pub is_dark: bool,
    pub on_start_ai_tutor: Action,
}

/// One rendered child view.
#[derive(Debug, Clone)]
pub enum View {
    Home(HomeProps),
    AiChat(AiChatProps),
    CourseExplorer(CourseExplorerProps),
    TutorNetwork(TutorNetworkProps),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home(_) => "Home",
            View::AiChat(_) => "AIChat",
            View::CourseExplorer(_) => "CourseExplorer",
            View::TutorNetwork(_) => "TutorNetwork",
        }
    }

    /// Prop names (as the views know them) with printable values.
    /// Callbacks print as `<callback>`.
    pub fn props_summary(&self) -> Vec<(&'static str, String)> {
        const CALLBACK: &str = "<callback>";
        match self {
            View::Home(p) => vec![
                (
                    "user",
                    format!("{} ({}, {})", p.user.name, p.user.college.short(), p.user.campus),
                ),
                ("onNavigateToChat", CALLBACK.to_owned()),
            ],
            View::AiChat(p) => vec![
                ("college", p.college.name().to_owned()),
                ("studentId", p.student_id.clone()),
                ("onUpdateStudentId", CALLBACK.to_owned()),
                ("isDark", p.is_dark.to_string()),
                ("mode", p.mode.to_string()),
                ("onModeChange", CALLBACK.to_owned()),
            ],
            View::CourseExplorer(p) => {
                vec![("selectedCollege", p.selected_college.name().to_owned())]
            }
            View::TutorNetwork(p) => vec![
                ("selectedCollege", p.selected_college.name().to_owned()),
                ("isDark", p.is_dark.to_string()),
                ("onStartAiTutor", CALLBACK.to_owned()),
            ],
        }
    }
}

fn home(user: &UserProfile) -> View {
    View::Home(HomeProps {
        user: user.clone(),
        on_navigate_to_chat: Action::set_active_tab(Tab::Chat),
    })
}

/// Builds the view for `tab` from a snapshot of the shell state.
pub fn dispatch(tab: Tab, user: &UserProfile, chat_mode: ChatMode) -> View {
    match tab {
        Tab::Home => home(user),
        Tab::Chat => View::AiChat(AiChatProps {
            college: user.college,
            student_id: user.student_id.clone(),
            on_update_student_id: Action::update_student_id,
            is_dark: user.is_dark(),
            mode: chat_mode,
            on_mode_change: Action::set_chat_mode,
        }),
        Tab::Courses => View::CourseExplorer(CourseExplorerProps {
            selected_college: user.college,
        }),
        Tab::Tutors => View::TutorNetwork(TutorNetworkProps {
            selected_college: user.college,
            is_dark: user.is_dark(),
            on_start_ai_tutor: Action::START_AI_TUTOR,
        }),
    }
}

/// Like [`dispatch`], but by tab name. Unknown names give the Home view.
pub fn dispatch_named(name: &str, user: &UserProfile, chat_mode: ChatMode) -> View {
    match Tab::from_name(name) {
        Some(tab) => dispatch(tab, user, chat_mode),
        None => home(user),
    }
}

impl App {
    pub fn current_view(&self) -> View {
        dispatch(self.nav.active_tab(), &self.profile, self.nav.chat_mode())
    }
}

#[cfg(test)]
mod tests {
    use stallion_core::{ProfileUpdate, Theme};

    use super::*;
    use crate::tui::app::NavigationState;

    fn user() -> UserProfile {
        UserProfile::default().merged(ProfileUpdate {
            college: Some(College::HealthSciences),
            student_id: Some("19-555000".to_owned()),
            ..Default::default()
        })
    }

    #[test]
    fn test_home() {
        let u = user();
        let View::Home(props) = dispatch(Tab::Home, &u, ChatMode::General) else {
            panic!("expected Home");
        };
        assert_eq!(props.user, u);
        assert_eq!(props.on_navigate_to_chat, Action::set_active_tab(Tab::Chat));
    }

    #[test]
    fn test_chat_props() {
        let u = user();
        let View::AiChat(props) = dispatch(Tab::Chat, &u, ChatMode::Tutoring) else {
            panic!("expected AIChat");
        };
        assert_eq!(props.college, College::HealthSciences);
        assert_eq!(props.student_id, "19-555000");
        assert!(props.is_dark);
        assert_eq!(props.mode, ChatMode::Tutoring);
        assert_eq!(
            (props.on_update_student_id)("x".to_owned()),
            Action::UpdateProfile(ProfileUpdate::student_id("x".to_owned()))
        );
        assert_eq!(
            (props.on_mode_change)(ChatMode::General),
            Action::set_chat_mode(ChatMode::General)
        );
    }

    #[test]
    fn test_courses_and_tutors() {
        let u = user().merged(ProfileUpdate::theme(Theme::Light));
        let View::CourseExplorer(props) = dispatch(Tab::Courses, &u, ChatMode::General) else {
            panic!("expected CourseExplorer");
        };
        assert_eq!(props.selected_college, College::HealthSciences);

        let View::TutorNetwork(props) = dispatch(Tab::Tutors, &u, ChatMode::General) else {
            panic!("expected TutorNetwork");
        };
        assert_eq!(props.selected_college, College::HealthSciences);
        assert!(!props.is_dark);

        // the tutor callback flips mode and tab in one transition
        let Action::Navigate(transition) = props.on_start_ai_tutor else {
            panic!("expected a navigation action");
        };
        let mut nav = NavigationState::with_tab(Tab::Tutors);
        nav.apply(transition);
        assert_eq!(nav.active_tab(), Tab::Chat);
        assert_eq!(nav.chat_mode(), ChatMode::Tutoring);
    }

    #[test]
    fn test_every_tab_has_its_view() {
        let u = user();
        let names: Vec<_> = Tab::ALL
            .into_iter()
            .map(|tab| dispatch(tab, &u, ChatMode::General).name())
            .collect();
        assert_eq!(names, ["Home", "AIChat", "CourseExplorer", "TutorNetwork"]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_home() {
        let u = user();
        for name in ["", "settings", "tutor", "42", "hοme"] {
            assert_eq!(dispatch_named(name, &u, ChatMode::General).name(), "Home");
        }
        assert_eq!(dispatch_named("tutors", &u, ChatMode::General).name(), "TutorNetwork");
    }

    #[test]
    fn test_props_summary_uses_contract_names() {
        let u = user();
        let view = dispatch(Tab::Chat, &u, ChatMode::General);
        let summary = view.props_summary();
        let keys: Vec<_> = summary.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["college", "studentId", "onUpdateStudentId", "isDark", "mode", "onModeChange"]
        );
        assert_eq!(summary[1].1, "19-555000");
        assert_eq!(summary[4].1, "GENERAL");
    }
}
