//! Add-transaction wizard
//!
//! Guides the user through category, date, description and amount, one step
//! at a time. Each step validates its own input before advancing; a failed
//! step keeps the draft and shows the error. Nothing leaves the wizard until
//! every step has succeeded.

use chrono::{Local, NaiveDateTime, NaiveTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::{
    example_date, parse_date, validate_description, MAX_DESCRIPTION_LEN,
};
use crate::models::{Transaction, TransactionKind};

use super::list_view::ListView;
use super::widgets::input::TextInput;

/// Longest amount input accepted, in characters
const AMOUNT_CHAR_LIMIT: usize = 20;

/// Current step of the wizard, in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectingCategory,
    EnteringDate,
    EnteringDescription,
    EnteringAmount,
}

impl WizardStep {
    /// Prompt shown above the input
    pub fn prompt(self) -> &'static str {
        match self {
            Self::SelectingCategory => "Select a category",
            Self::EnteringDate => "Date (leave empty for now)",
            Self::EnteringDescription => "Description",
            Self::EnteringAmount => "Amount",
        }
    }
}

/// Fields accumulated so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub category: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub description: Option<String>,
}

/// Result of feeding a key to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Still collecting input
    Continue,
    /// The user backed out; the draft is discarded
    Cancelled,
    /// Every step validated
    Completed(Transaction),
}

/// State of one run of the wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    kind: TransactionKind,
    draft: Draft,
    input: TextInput,
    categories: ListView<String>,
    error: Option<String>,
}

impl Wizard {
    /// Start a wizard for a transaction of the given kind
    pub fn new(kind: TransactionKind, config: &Config) -> Self {
        Self {
            step: WizardStep::SelectingCategory,
            kind,
            draft: Draft::default(),
            input: input_for(WizardStep::SelectingCategory, config),
            categories: ListView::new(config.categories.clone()),
            error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn categories(&self) -> &ListView<String> {
        &self.categories
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Feed a key press to the current step
    pub fn handle_key(&mut self, key: KeyEvent, config: &Config) -> WizardOutcome {
        match key.code {
            KeyCode::Esc => return WizardOutcome::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return WizardOutcome::Cancelled
            }
            KeyCode::Enter => return self.confirm(config),
            KeyCode::Up if self.step == WizardStep::SelectingCategory => {
                self.categories.move_highlight(-1);
            }
            KeyCode::Down if self.step == WizardStep::SelectingCategory => {
                self.categories.move_highlight(1);
            }
            KeyCode::Backspace => {
                self.error = None;
                self.input.backspace();
                self.sync_filter();
            }
            KeyCode::Delete => {
                self.error = None;
                self.input.delete();
                self.sync_filter();
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_start(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => {
                self.error = None;
                self.input.insert(c);
                self.sync_filter();
            }
            _ => {}
        }
        WizardOutcome::Continue
    }

    /// Validate the current step and advance, or record the error
    pub fn confirm(&mut self, config: &Config) -> WizardOutcome {
        match self.try_confirm(config) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(step = ?self.step, error = %e, "Wizard step rejected");
                self.error = Some(e.to_string());
                WizardOutcome::Continue
            }
        }
    }

    fn try_confirm(&mut self, config: &Config) -> LedgerResult<WizardOutcome> {
        match self.step {
            WizardStep::SelectingCategory => {
                let category = self
                    .categories
                    .highlighted()
                    .cloned()
                    .ok_or_else(|| LedgerError::Validation("No category selected".into()))?;
                self.draft.category = Some(category);
                self.advance(WizardStep::EnteringDate, config);
            }
            WizardStep::EnteringDate => {
                let text = self.input.value().trim();
                let date = if text.is_empty() {
                    Local::now().naive_local()
                } else {
                    parse_date(text, &config.date_format)?.and_time(NaiveTime::MIN)
                };
                self.draft.date = Some(date);
                self.advance(WizardStep::EnteringDescription, config);
            }
            WizardStep::EnteringDescription => {
                let description = validate_description(self.input.value())?;
                self.draft.description = Some(description);
                self.advance(WizardStep::EnteringAmount, config);
            }
            WizardStep::EnteringAmount => {
                let transaction = self.build_transaction(config)?;
                return Ok(WizardOutcome::Completed(transaction));
            }
        }
        Ok(WizardOutcome::Continue)
    }

    /// Build the transaction from the draft and the amount input
    fn build_transaction(&self, config: &Config) -> LedgerResult<Transaction> {
        let (Some(category), Some(date), Some(description)) = (
            self.draft.category.as_ref(),
            self.draft.date,
            self.draft.description.as_ref(),
        ) else {
            return Err(LedgerError::Validation("Transaction details are incomplete".into()));
        };

        let amount = strip_currency(self.input.value(), &config.currency);
        let transaction =
            Transaction::new(amount, description, category.clone(), self.kind)?.with_date(date);
        transaction.ensure_known_category(config)?;
        Ok(transaction)
    }

    fn advance(&mut self, step: WizardStep, config: &Config) {
        self.step = step;
        self.input = input_for(step, config);
        self.error = None;
    }

    fn sync_filter(&mut self) {
        if self.step == WizardStep::SelectingCategory {
            self.categories.set_filter(self.input.value());
        }
    }
}

fn input_for(step: WizardStep, config: &Config) -> TextInput {
    match step {
        WizardStep::SelectingCategory => TextInput::new()
            .label("Filter")
            .placeholder("Type to search..."),
        WizardStep::EnteringDate => TextInput::new()
            .label("Date")
            .placeholder(example_date(&config.date_format)),
        WizardStep::EnteringDescription => TextInput::new()
            .label("Description")
            .placeholder("e.g. Coffee at Starbucks")
            .char_limit(MAX_DESCRIPTION_LEN),
        WizardStep::EnteringAmount => TextInput::new()
            .label("Amount")
            .placeholder(format!("0.00 {}", config.currency))
            .char_limit(AMOUNT_CHAR_LIMIT),
    }
}

/// Allow the configured currency before or after the number
fn strip_currency<'a>(text: &'a str, currency: &str) -> &'a str {
    let text = text.trim();
    if currency.is_empty() {
        return text;
    }
    text.strip_prefix(currency)
        .or_else(|| text.strip_suffix(currency))
        .map(str::trim)
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(wizard: &mut Wizard, text: &str, config: &Config) {
        for c in text.chars() {
            assert_eq!(wizard.handle_key(key(KeyCode::Char(c)), config), WizardOutcome::Continue);
        }
    }

    fn enter(wizard: &mut Wizard, config: &Config) -> WizardOutcome {
        wizard.handle_key(key(KeyCode::Enter), config)
    }

    #[test]
    fn test_starts_at_category_selection() {
        let config = Config::default();
        let wizard = Wizard::new(TransactionKind::Expense, &config);

        assert_eq!(wizard.step(), WizardStep::SelectingCategory);
        assert_eq!(wizard.categories().len(), config.categories.len());
        assert_eq!(wizard.draft(), &Draft::default());
    }

    #[test]
    fn test_full_run_completes() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);

        type_text(&mut wizard, "coff", &config);
        assert_eq!(enter(&mut wizard, &config), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::EnteringDate);
        assert_eq!(wizard.draft().category.as_deref(), Some("Coffee"));

        type_text(&mut wizard, "14/02/2025", &config);
        enter(&mut wizard, &config);
        assert_eq!(wizard.step(), WizardStep::EnteringDescription);

        type_text(&mut wizard, "Flat white", &config);
        enter(&mut wizard, &config);
        assert_eq!(wizard.step(), WizardStep::EnteringAmount);

        type_text(&mut wizard, "3.40", &config);
        let WizardOutcome::Completed(txn) = enter(&mut wizard, &config) else {
            panic!("wizard did not complete");
        };

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.category, "Coffee");
        assert_eq!(txn.description, "Flat white");
        assert_eq!(txn.amount, Decimal::new(340, 2));
        assert_eq!(
            txn.date.date(),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_empty_date_defaults_to_now() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Income, &config);
        enter(&mut wizard, &config);

        let before = Local::now().naive_local();
        enter(&mut wizard, &config);

        assert_eq!(wizard.step(), WizardStep::EnteringDescription);
        assert!(wizard.draft().date.unwrap() >= before);
    }

    #[test]
    fn test_date_step_with_offset_format() {
        let config = Config {
            date_format: "%Y-%m-%d %Z".into(),
            ..Config::default()
        };
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);

        enter(&mut wizard, &config);

        assert_eq!(wizard.step(), WizardStep::EnteringDate);
        assert!(!wizard.input().placeholder.is_empty());
    }

    #[test]
    fn test_arrow_keys_move_category_highlight() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);

        wizard.handle_key(key(KeyCode::Down), &config);
        wizard.handle_key(key(KeyCode::Down), &config);
        wizard.handle_key(key(KeyCode::Up), &config);
        enter(&mut wizard, &config);

        assert_eq!(wizard.draft().category.as_deref(), Some("Utilities"));
    }

    #[test]
    fn test_no_matching_category_stays_put() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);
        type_text(&mut wizard, "zzz", &config);

        assert_eq!(enter(&mut wizard, &config), WizardOutcome::Continue);

        assert_eq!(wizard.step(), WizardStep::SelectingCategory);
        assert!(wizard.error().is_some());
        assert!(wizard.draft().category.is_none());
    }

    #[test]
    fn test_invalid_date_keeps_previous_fields() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);
        enter(&mut wizard, &config);

        type_text(&mut wizard, "2025-02-14", &config);
        enter(&mut wizard, &config);

        assert_eq!(wizard.step(), WizardStep::EnteringDate);
        assert!(wizard.error().unwrap().contains("Invalid date"));
        assert_eq!(wizard.draft().category.as_deref(), Some("Rent"));
        assert_eq!(wizard.input().value(), "2025-02-14");
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);
        enter(&mut wizard, &config);
        enter(&mut wizard, &config);

        type_text(&mut wizard, "   ", &config);
        enter(&mut wizard, &config);

        assert_eq!(wizard.step(), WizardStep::EnteringDescription);
        assert!(wizard.error().unwrap().contains("Invalid description"));
    }

    #[test]
    fn test_bad_amount_keeps_draft_and_clears_error_on_edit() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);
        enter(&mut wizard, &config);
        enter(&mut wizard, &config);
        type_text(&mut wizard, "Rent", &config);
        enter(&mut wizard, &config);

        type_text(&mut wizard, "-5", &config);
        assert_eq!(enter(&mut wizard, &config), WizardOutcome::Continue);
        assert_eq!(wizard.step(), WizardStep::EnteringAmount);
        assert!(wizard.error().unwrap().contains("Invalid amount"));
        assert_eq!(wizard.draft().description.as_deref(), Some("Rent"));

        wizard.handle_key(key(KeyCode::Backspace), &config);
        assert!(wizard.error().is_none());
    }

    #[test]
    fn test_amount_accepts_currency() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Income, &config);
        enter(&mut wizard, &config);
        enter(&mut wizard, &config);
        type_text(&mut wizard, "Bonus", &config);
        enter(&mut wizard, &config);

        type_text(&mut wizard, "250 GBP", &config);
        let WizardOutcome::Completed(txn) = enter(&mut wizard, &config) else {
            panic!("wizard did not complete");
        };
        assert_eq!(txn.amount, Decimal::new(250, 0));
        assert_eq!(txn.kind, TransactionKind::Income);
    }

    #[test]
    fn test_escape_cancels_from_any_step() {
        let config = Config::default();
        for steps_forward in 0..4 {
            let mut wizard = Wizard::new(TransactionKind::Expense, &config);
            for _ in 0..steps_forward {
                if wizard.step() == WizardStep::EnteringDescription {
                    type_text(&mut wizard, "Lunch", &config);
                }
                enter(&mut wizard, &config);
            }
            assert_eq!(wizard.handle_key(key(KeyCode::Esc), &config), WizardOutcome::Cancelled);
        }
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let config = Config::default();
        let mut wizard = Wizard::new(TransactionKind::Expense, &config);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(wizard.handle_key(ctrl_c, &config), WizardOutcome::Cancelled);
    }

    #[test]
    fn test_strip_currency() {
        assert_eq!(strip_currency(" GBP 12.50 ", "GBP"), "12.50");
        assert_eq!(strip_currency("12.50GBP", "GBP"), "12.50");
        assert_eq!(strip_currency("£12.50", "£"), "12.50");
        assert_eq!(strip_currency("12.50", ""), "12.50");
    }
}
