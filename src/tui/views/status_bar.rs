//! Status bar view
//!
//! Shows the user, the currency, the latest message and key hints

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, LedgerState};
use crate::tui::keybindings::{hint_line, BROWSE_KEYBINDINGS, WIZARD_KEYBINDINGS};
use crate::tui::theme::Theme;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut spans = vec![
        Span::styled(format!(" {} ", app.config.user_name), theme.title),
        Span::raw("│ "),
        Span::styled(app.config.currency.clone(), theme.hint),
    ];

    if let Some(status) = &app.status {
        let style = if status.is_error {
            theme.error
        } else {
            theme.status
        };
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status.text.clone(), style));
    }

    let bindings = if app.state() == LedgerState::Browsing {
        BROWSE_KEYBINDINGS
    } else {
        WIZARD_KEYBINDINGS
    };
    let hints = format!(" {} ", hint_line(bindings));

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, theme.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
