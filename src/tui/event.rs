//! Event handling for the TUI
//!
//! Reads terminal events with crossterm and narrows them to the ones the
//! ledger reacts to. Reading blocks; there is no tick.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;

/// Terminal events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Blocking reader for terminal events
#[derive(Debug, Default)]
pub struct EventReader;

impl EventReader {
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next key press or resize
    pub fn next(&self) -> io::Result<Event> {
        loop {
            match event::read()? {
                // Windows also reports releases
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => {}
            }
        }
    }
}
