//! Text input widget
//!
//! The input buffer for the active wizard step, with a character cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Maximum number of characters accepted
    pub char_limit: Option<usize>,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Limit the number of characters
    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if self.char_limit.is_some_and(|limit| self.char_len() >= limit) {
            return;
        }
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            (self.label.chars().count() + 2).min(area.width as usize)
        };

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let input_start = area.x + label_width as u16;
        let input_width = area.width as usize - label_width;
        if input_width == 0 {
            return;
        }

        // Scroll so the cursor cell stays inside the area
        let offset = self.cursor.saturating_sub(input_width - 1);
        let (display_text, text_style) = if self.content.is_empty() {
            (self.placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else {
            (
                self.content.chars().skip(offset).collect::<String>(),
                Style::default().fg(Color::White),
            )
        };
        buf.set_stringn(input_start, area.y, &display_text, input_width, text_style);

        let cursor_x = input_start + (self.cursor - offset) as u16;
        let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
        buf.set_string(
            cursor_x,
            area.y,
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut input = TextInput::new().content("Cofee");
        input.move_left();
        input.move_left();
        input.insert('f');
        assert_eq!(input.value(), "Coffee");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "offee");

        input.move_end();
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new().content("£5");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "5");

        input.insert('€');
        assert_eq!(input.value(), "€5");
        input.backspace();
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new().char_limit(3);
        for c in "abcd".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "abc");
    }

    fn rendered_row(input: &TextInput, area: Rect, buffer_width: u16) -> (Buffer, String) {
        let mut buf = Buffer::empty(Rect::new(0, 0, buffer_width, 1));
        input.render(area, &mut buf);
        let text = (0..buffer_width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        (buf, text)
    }

    #[test]
    fn test_long_content_is_clipped_to_area() {
        let input = TextInput::new().label("Desc").content("a".repeat(40));

        let (_, text) = rendered_row(&input, Rect::new(0, 0, 16, 1), 30);

        assert!(text.starts_with("Desc: "));
        assert_eq!(text[16..].trim(), "");
    }

    #[test]
    fn test_view_scrolls_to_keep_cursor_visible() {
        let input = TextInput::new().content("abcdefghijklmnop");
        let area = Rect::new(0, 0, 8, 1);

        let (buf, text) = rendered_row(&input, area, 12);

        // Cursor sits after the last character, in the final cell of the area
        assert_eq!(buf[(7, 0)].bg, Color::Cyan);
        assert_eq!(&text[..7], "jklmnop");
        assert_eq!(text[8..].trim(), "");
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().content("Salary");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
