//! Transaction kinds
//!
//! The closed, ordered set of kinds a transaction can belong to. Focus moves
//! through this set circularly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    /// Every kind, in display order
    pub const ALL: [TransactionKind; 2] = [Self::Income, Self::Expense];

    /// Position of this kind in [`TransactionKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            Self::Income => 0,
            Self::Expense => 1,
        }
    }

    /// The following kind, wrapping from the last to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding kind, wrapping from the first to the last
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Panel title
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
