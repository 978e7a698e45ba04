//! Transaction model
//!
//! A single ledger entry. Construction validates the amount and description;
//! once built a transaction is never mutated in place.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

use super::ids::TransactionId;
use super::kind::TransactionKind;
use crate::config::Config;
use crate::error::{LedgerError, LedgerResult};

/// Longest description accepted, in characters
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Fallback used when the configured date format cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always strictly positive; the kind carries the direction
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,

    /// What the money was for
    pub description: String,

    /// Category name from the configured vocabulary
    pub category: String,

    /// When the transaction happened
    pub date: NaiveDateTime,

    /// Income or expense
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a validated transaction dated now
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is not a decimal number or is not positive
    /// - `InvalidDescription` if the description is blank or longer than 255 characters
    pub fn new(
        amount: &str,
        description: &str,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> LedgerResult<Self> {
        let amount = parse_amount(amount)?;
        let description = validate_description(description)?;

        Ok(Self {
            id: TransactionId::new(),
            amount,
            description,
            category: category.into(),
            date: Local::now().naive_local(),
            kind,
        })
    }

    /// Create an income transaction
    pub fn income(
        amount: &str,
        description: &str,
        category: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::new(amount, description, category, TransactionKind::Income)
    }

    /// Create an expense transaction
    pub fn expense(
        amount: &str,
        description: &str,
        category: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::new(amount, description, category, TransactionKind::Expense)
    }

    /// Replace the date
    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    /// Reject categories outside the configured vocabulary
    pub fn ensure_known_category(&self, config: &Config) -> LedgerResult<()> {
        if config.has_category(&self.category) {
            Ok(())
        } else {
            Err(LedgerError::UnknownCategory(self.category.clone()))
        }
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// List title
    pub fn title(&self) -> &str {
        &self.description
    }

    /// Second list line: date, category and amount
    pub fn summary(&self, config: &Config) -> String {
        format!(
            "{} | {} | {:.2} {}",
            format_date(&self.date, &config.date_format),
            self.category,
            self.amount,
            config.currency
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} - {} ({})",
            self.date.format(FALLBACK_DATE_FORMAT),
            self.amount,
            self.description,
            self.category
        )
    }
}

/// Parse an amount as an exact, strictly positive decimal
pub fn parse_amount(text: &str) -> LedgerResult<Decimal> {
    let trimmed = text.trim();
    let amount = Decimal::from_str(trimmed)
        .map_err(|_| LedgerError::InvalidAmount(format!("'{}' is not a number", trimmed)))?;

    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{} must be greater than zero",
            trimmed
        )));
    }

    Ok(amount)
}

/// Trim a description and check its length
pub fn validate_description(text: &str) -> LedgerResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidDescription(
            "description cannot be empty".into(),
        ));
    }

    let len = trimmed.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(LedgerError::InvalidDescription(format!(
            "description is {} characters, maximum is {}",
            len, MAX_DESCRIPTION_LEN
        )));
    }

    Ok(trimmed.to_string())
}

/// Parse a calendar date with a strftime pattern
pub fn parse_date(text: &str, pattern: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), pattern).map_err(|_| {
        LedgerError::InvalidDate(format!(
            "'{}' does not match {}",
            text.trim(),
            example_date(pattern)
        ))
    })
}

/// Render a date with a strftime pattern, falling back to ISO for bad patterns
///
/// Patterns chrono parses but cannot render for a local date, such as `%z`,
/// also fall back.
pub fn format_date(date: &NaiveDateTime, pattern: &str) -> String {
    try_format(date, pattern)
        .or_else(|| try_format(date, FALLBACK_DATE_FORMAT))
        .unwrap_or_default()
}

/// Today's date rendered with the pattern, used as an input hint
pub fn example_date(pattern: &str) -> String {
    format_date(&Local::now().naive_local(), pattern)
}

/// Check that a pattern both parses and renders
pub fn is_renderable_pattern(pattern: &str) -> bool {
    try_format(&NaiveDateTime::default(), pattern).is_some()
}

fn try_format(date: &NaiveDateTime, pattern: &str) -> Option<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(pattern)).ok()?;
    Some(rendered)
}
