//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: one panel per kind, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::TransactionKind;

/// Layout regions for the TUI
pub struct LedgerLayout {
    /// Income list panel
    pub income: Rect,
    /// Expense list panel
    pub expense: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl LedgerLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Panels
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[0]);

        Self {
            income: horizontal[0],
            expense: horizontal[1],
            status_bar: vertical[1],
        }
    }

    /// Panel area for a kind
    pub fn panel(&self, kind: TransactionKind) -> Rect {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
        }
    }
}

/// Layout for the wizard dialog
pub struct WizardLayout {
    /// Fields entered so far
    pub draft: Rect,
    /// Prompt for the current step
    pub prompt: Rect,
    /// Text input
    pub input: Rect,
    /// Category list, only filled while selecting a category
    pub choices: Rect,
    /// Validation error
    pub error: Rect,
    /// Key hints
    pub hints: Rect,
}

impl WizardLayout {
    /// Calculate dialog layout inside its border
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Draft
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Input
                Constraint::Min(0),    // Choices
                Constraint::Length(1), // Error
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            draft: chunks[0],
            prompt: chunks[2],
            input: chunks[3],
            choices: chunks[4],
            error: chunks[5],
            hints: chunks[6],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_split_evenly() {
        let layout = LedgerLayout::new(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.income.width, 40);
        assert_eq!(layout.expense.x, 40);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.panel(TransactionKind::Expense), layout.expense);
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);

        assert_eq!(inner.width, 60);
        assert!(inner.x >= 20 && inner.right() <= 80);
    }
}
