//! Event handler for the TUI
//!
//! `handle_event` is a reducer: it updates the [`App`] for one event and
//! returns the side effects the event loop must carry out. Effects touch the
//! outside world (the store, the process) and are run by [`execute`], so the
//! whole interaction flow can be driven in tests without a terminal.

use crossterm::event::KeyEvent;

use crate::models::Transaction;
use crate::storage::TransactionStore;

use super::app::App;
use super::event::Event;
use super::keybindings::{browse_command, BrowseCommand};
use super::wizard::WizardOutcome;

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Store a completed transaction, then show it in its list
    Persist(Transaction),
    /// Leave the event loop
    Quit,
}

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Vec<Effect> {
    match event {
        Event::Resize(width, height) => {
            app.resize(width, height);
            Vec::new()
        }
        Event::Key(key) => handle_key_event(app, key),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    if app.wizard.is_some() {
        return handle_wizard_key(app, key);
    }

    let Some(command) = browse_command(&key) else {
        return Vec::new();
    };

    // Until the lists exist only quitting makes sense
    if !app.is_loaded() && command != BrowseCommand::Quit {
        return Vec::new();
    }

    match command {
        BrowseCommand::NextKind => app.next_kind(),
        BrowseCommand::PrevKind => app.prev_kind(),
        BrowseCommand::MoveHighlight(delta) => app.move_highlight(delta),
        BrowseCommand::StartAdd => app.start_wizard(),
        BrowseCommand::Quit => {
            app.quit();
            return vec![Effect::Quit];
        }
    }
    Vec::new()
}

/// Handle keys while the wizard is open
fn handle_wizard_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
    let config = app.config;
    let Some(wizard) = app.wizard.as_mut() else {
        return Vec::new();
    };

    match wizard.handle_key(key, config) {
        WizardOutcome::Continue => Vec::new(),
        WizardOutcome::Cancelled => {
            app.close_wizard();
            app.set_status("Cancelled");
            Vec::new()
        }
        WizardOutcome::Completed(transaction) => {
            app.close_wizard();
            vec![Effect::Persist(transaction)]
        }
    }
}

/// Carry out an effect against the store
///
/// A transaction reaches its list only after the store accepted it. A failed
/// write is reported and not retried; the draft is gone either way.
pub fn execute(app: &mut App, store: &mut dyn TransactionStore, effect: Effect) {
    match effect {
        Effect::Persist(transaction) => match store.add_transaction(&transaction) {
            Ok(()) => {
                tracing::info!(
                    id = %transaction.id,
                    kind = %transaction.kind,
                    "Transaction added"
                );
                app.set_status(format!("Added {}", transaction.title()));
                app.commit(transaction);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save transaction");
                app.set_error(format!("Could not save transaction: {}", e));
            }
        },
        Effect::Quit => app.quit(),
    }
}
