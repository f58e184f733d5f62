// Stallion Portal TUI - Common Widgets Module

pub mod footer;
pub mod header;
pub mod navigation;
pub mod popups;
pub mod settings_modal;

pub use footer::*;
pub use header::*;
pub use navigation::*;
pub use popups::*;
pub use settings_modal::*;
