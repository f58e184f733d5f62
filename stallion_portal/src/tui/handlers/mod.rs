// Stallion Portal TUI - Event handlers

pub mod input;

pub use input::handle_key_event;
