//! Transaction list panels
//!
//! One bordered list per kind. Rows are drawn through a table of renderers
//! indexed by kind, so each kind can present itself differently.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::models::{Transaction, TransactionKind};
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Builds the list row for one transaction
type RowRenderer = fn(&Transaction, &Config, &Theme) -> ListItem<'static>;

/// Row renderers, in `TransactionKind::ALL` order
const ROW_RENDERERS: [RowRenderer; TransactionKind::ALL.len()] = [income_row, expense_row];

/// Render the list panel for a kind
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, kind: TransactionKind, area: Rect) {
    let list = app.list(kind);
    let focused = app.focused == kind;

    let block = Block::default()
        .title(format!(" {} ({}) ", kind.label(), list.len()))
        .title_style(theme.title)
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused));

    if list.is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one.")
            .block(block)
            .style(theme.muted);
        frame.render_widget(text, area);
        return;
    }

    let render_row = ROW_RENDERERS[kind.index()];
    let items: Vec<ListItem> = list
        .visible()
        .map(|txn| render_row(txn, app.config, theme))
        .collect();

    let mut widget = List::new(items).block(block);
    if focused {
        widget = widget.highlight_style(theme.highlight).highlight_symbol("▶ ");
    }

    let mut state = ListState::default();
    state.select(list.highlight_index());
    frame.render_stateful_widget(widget, area, &mut state);
}

fn income_row(txn: &Transaction, config: &Config, theme: &Theme) -> ListItem<'static> {
    two_line_row(txn, config, theme, "+")
}

fn expense_row(txn: &Transaction, config: &Config, theme: &Theme) -> ListItem<'static> {
    two_line_row(txn, config, theme, "-")
}

/// Title on the first line, date, category and signed amount below
fn two_line_row(txn: &Transaction, config: &Config, theme: &Theme, sign: &str) -> ListItem<'static> {
    let title = Line::from(Span::styled(txn.title().to_string(), theme.item_title));
    let summary = Line::from(vec![
        Span::styled(sign.to_string(), theme.amount(txn.kind)),
        Span::styled(txn.summary(config), theme.item_summary),
    ]);
    ListItem::new(Text::from(vec![title, summary]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_rows_for_kind() {
        let config = Config::default();
        let seed = vec![
            Transaction::income("2000", "Salary", "Other").unwrap(),
            Transaction::expense("4.50", "Sandwich", "Eating Out").unwrap(),
        ];
        let mut app = App::new(&config, seed);
        app.resize(60, 10);
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, &theme, TransactionKind::Income, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Income (1)"));
        assert!(text.contains("Salary"));
        assert!(text.contains("+"));
        assert!(!text.contains("Sandwich"));
    }

    #[test]
    fn test_empty_panel_hint() {
        let config = Config::default();
        let mut app = App::new(&config, Vec::new());
        app.resize(60, 10);
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, &theme, TransactionKind::Expense, frame.area()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("No transactions"));
    }
}
