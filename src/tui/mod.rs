//! Terminal User Interface module
//!
//! Two side-by-side transaction lists, one per kind, and a step-by-step
//! wizard for adding transactions, drawn with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod list_view;
pub mod terminal;
pub mod theme;
pub mod wizard;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::{App, LedgerState};
pub use handler::{handle_event, Effect};
pub use terminal::run_tui;
