//! Add-transaction dialog
//!
//! Draws the running wizard as a centred modal: the draft so far, the prompt
//! for the current step, its input and, while picking a category, the
//! filtered category list.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::models::transaction::format_date;
use crate::tui::keybindings::{hint_line, WIZARD_KEYBINDINGS};
use crate::tui::layout::{centered_rect, WizardLayout};
use crate::tui::theme::Theme;
use crate::tui::wizard::{Wizard, WizardStep};

/// Render the wizard dialog
pub fn render(frame: &mut Frame, wizard: &Wizard, config: &Config, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Add {} ", wizard.kind().label()))
        .title_style(theme.title)
        .borders(Borders::ALL)
        .border_style(theme.focused_border);
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let layout = WizardLayout::new(inner);

    render_draft(frame, wizard, config, theme, layout.draft);

    frame.render_widget(
        Paragraph::new(Span::styled(wizard.step().prompt(), theme.prompt)),
        layout.prompt,
    );
    frame.render_widget(wizard.input(), layout.input);

    if wizard.step() == WizardStep::SelectingCategory {
        render_choices(frame, wizard, theme, layout.choices);
    }

    if let Some(error) = wizard.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(error, theme.error)),
            layout.error,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(hint_line(WIZARD_KEYBINDINGS), theme.muted)),
        layout.hints,
    );
}

/// Fields confirmed in earlier steps
fn render_draft(frame: &mut Frame, wizard: &Wizard, config: &Config, theme: &Theme, area: Rect) {
    let draft = wizard.draft();
    let date = draft
        .date
        .map(|d| format_date(&d, &config.date_format));

    let field = |label: &'static str, value: Option<&str>| {
        Line::from(vec![
            Span::styled(format!("{:>12}: ", label), theme.draft_label),
            match value {
                Some(v) => Span::styled(v.to_string(), theme.draft_value),
                None => Span::styled("-", theme.muted),
            },
        ])
    };

    let lines = vec![
        field("Category", draft.category.as_deref()),
        field("Date", date.as_deref()),
        field("Description", draft.description.as_deref()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_choices(frame: &mut Frame, wizard: &Wizard, theme: &Theme, area: Rect) {
    let categories = wizard.categories();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border);

    if categories.visible_len() == 0 {
        let text = Paragraph::new("No matching categories")
            .block(block)
            .style(theme.muted);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = categories
        .visible()
        .map(|name| ListItem::new(Span::styled(name.as_str(), theme.item_title)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(categories.highlight_index());
    frame.render_stateful_widget(list, area, &mut state);
}
