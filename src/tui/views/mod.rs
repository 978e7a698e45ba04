//! TUI Views module
//!
//! Contains the list panels, the wizard dialog and the status bar.

pub mod panels;
pub mod status_bar;
pub mod wizard;

use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;

use super::app::App;
use super::layout::LedgerLayout;
use super::theme::Theme;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    if !app.is_loaded() {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(theme.border))
            .style(theme.muted);
        frame.render_widget(loading, frame.area());
        return;
    }

    let layout = LedgerLayout::new(frame.area());

    for kind in TransactionKind::ALL {
        panels::render(frame, app, theme, kind, layout.panel(kind));
    }

    status_bar::render(frame, app, theme, layout.status_bar);

    if let Some(wizard) = &app.wizard {
        wizard::render(frame, wizard, app.config, theme);
    }
}
