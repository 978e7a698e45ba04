//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash,
//! and runs the event loop.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Config;
use crate::models::Transaction;
use crate::storage::TransactionStore;

use super::app::App;
use super::event::{Event, EventReader};
use super::handler::{execute as execute_effect, handle_event};
use super::theme::Theme;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui(config: &Config, store: &mut dyn TransactionStore) -> Result<()> {
    let seed = store
        .get_all_transactions()
        .context("Failed to load transactions")?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, config, store, seed);
    restore_terminal()?;

    result
}

fn event_loop(
    terminal: &mut Tui,
    config: &Config,
    store: &mut dyn TransactionStore,
    seed: Vec<Transaction>,
) -> Result<()> {
    let mut app = App::new(config, seed);
    let theme = Theme::default();
    let events = EventReader::new();

    // Crossterm only reports changes, so announce the starting size
    let size = terminal.size()?;
    let mut pending = vec![Event::Resize(size.width, size.height)];

    tracing::info!("Ledger started");
    loop {
        for event in pending.drain(..) {
            for effect in handle_event(&mut app, event) {
                execute_effect(&mut app, store, effect);
            }
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|frame| super::views::render(frame, &app, &theme))?;

        pending.push(events.next()?);
    }
    tracing::info!("Ledger closed");

    Ok(())
}
