// TUI App module root - re-exports state and core types

mod actions;
mod navigation;
mod state;
mod sync_ctrl;

pub use actions::Action;
pub use navigation::{ChatMode, NavTransition, NavigationState, Tab};
pub use state::{App, AppResult, BoxedProfileStore};
