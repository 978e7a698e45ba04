//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the focused kind, one list per kind, the wizard (if running) and the
//! status line.

use crate::config::Config;
use crate::models::{Transaction, TransactionKind};

use super::list_view::ListView;
use super::wizard::{Wizard, WizardStep};

/// Where the ledger is in its interaction flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgerState {
    #[default]
    Browsing,
    SelectingCategory,
    EnteringDate,
    EnteringDescription,
    EnteringAmount,
}

impl From<WizardStep> for LedgerState {
    fn from(step: WizardStep) -> Self {
        match step {
            WizardStep::SelectingCategory => Self::SelectingCategory,
            WizardStep::EnteringDate => Self::EnteringDate,
            WizardStep::EnteringDescription => Self::EnteringDescription,
            WizardStep::EnteringAmount => Self::EnteringAmount,
        }
    }
}

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App<'a> {
    /// Effective configuration, read-only for the whole session
    pub config: &'a Config,

    /// Which list receives browsing input
    pub focused: TransactionKind,

    /// One list per kind, indexed by `TransactionKind::index`
    lists: [ListView<Transaction>; TransactionKind::ALL.len()],

    /// Transactions waiting for the first resize
    seed: Vec<Transaction>,

    /// Whether the lists have been built
    loaded: bool,

    /// Last known terminal size
    pub size: (u16, u16),

    /// Running add-transaction wizard
    pub wizard: Option<Wizard>,

    /// Status message to display
    pub status: Option<StatusMessage>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    ///
    /// `seed` holds the stored transactions; they are sorted into the lists
    /// on the first resize.
    pub fn new(config: &'a Config, seed: Vec<Transaction>) -> Self {
        Self {
            config,
            focused: TransactionKind::default(),
            lists: Default::default(),
            seed,
            loaded: false,
            size: (0, 0),
            wizard: None,
            status: None,
            should_quit: false,
        }
    }

    /// Current state of the interaction flow
    pub fn state(&self) -> LedgerState {
        self.wizard
            .as_ref()
            .map(|w| LedgerState::from(w.step()))
            .unwrap_or_default()
    }

    /// Whether the lists have been initialised
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record a new terminal size, building the lists on the first call
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        if self.loaded {
            return;
        }

        for transaction in std::mem::take(&mut self.seed) {
            self.lists[transaction.kind.index()].insert(transaction);
        }
        self.loaded = true;
        tracing::debug!(
            income = self.list(TransactionKind::Income).len(),
            expense = self.list(TransactionKind::Expense).len(),
            "Lists initialised"
        );
    }

    /// The list for a kind
    pub fn list(&self, kind: TransactionKind) -> &ListView<Transaction> {
        &self.lists[kind.index()]
    }

    /// The focused list
    pub fn focused_list(&self) -> &ListView<Transaction> {
        self.list(self.focused)
    }

    /// Focus the next kind, wrapping
    pub fn next_kind(&mut self) {
        self.focused = self.focused.next();
    }

    /// Focus the previous kind, wrapping
    pub fn prev_kind(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Move the highlight in the focused list
    pub fn move_highlight(&mut self, delta: isize) {
        self.lists[self.focused.index()].move_highlight(delta);
    }

    /// Open the wizard for the focused kind
    pub fn start_wizard(&mut self) {
        self.clear_status();
        self.wizard = Some(Wizard::new(self.focused, self.config));
    }

    /// Close the wizard, discarding its draft
    pub fn close_wizard(&mut self) {
        self.wizard = None;
    }

    /// Insert a stored transaction into the list for its kind
    pub fn commit(&mut self, transaction: Transaction) {
        self.lists[transaction.kind.index()].insert(transaction);
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            is_error: false,
        });
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            is_error: true,
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
