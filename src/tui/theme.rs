//! Colors and text styles for the renderer
//!
//! The renderer receives a [`Theme`] instead of reaching for global styles.

use ratatui::style::{Color, Modifier, Style};

use crate::models::TransactionKind;

/// Styles used when drawing the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub focused_border: Style,
    pub item_title: Style,
    pub item_summary: Style,
    pub highlight: Style,
    pub income: Style,
    pub expense: Style,
    pub prompt: Style,
    pub draft_label: Style,
    pub draft_value: Style,
    pub muted: Style,
    pub status: Style,
    pub error: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            item_title: Style::default().fg(Color::White),
            item_summary: Style::default().fg(Color::Gray),
            highlight: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            income: Style::default().fg(Color::Green),
            expense: Style::default().fg(Color::Red),
            prompt: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            draft_label: Style::default().fg(Color::Cyan),
            draft_value: Style::default().fg(Color::White),
            muted: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),
            hint: Style::default().fg(Color::White),
        }
    }
}

impl Theme {
    /// Accent for amounts of a kind
    pub fn amount(&self, kind: TransactionKind) -> Style {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
        }
    }

    /// Border style for a panel
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}
