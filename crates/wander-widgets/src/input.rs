#![forbid(unsafe_code)]

//! Text entry widget.
//!
//! A single-line text field with grapheme-cluster aware cursor movement.
//! The field itself only edits text; committing the value is owned by
//! whatever wires it up (see [`crate::recs::RecsState`]).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;
use wander_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use wander_core::geometry::Rect;
use wander_render::frame::Frame;
use wander_render::style::Style;

use crate::Widget;

/// A single-line text entry field.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Placeholder shown while the value is empty.
    placeholder: String,
    /// Base style.
    style: Style,
    /// Placeholder style.
    placeholder_style: Style,
    /// Whether the field is focused (controls cursor output).
    focused: bool,
}

impl TextInput {
    /// Create a new empty text input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the base style (builder).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style (builder).
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set whether the input is focused (builder).
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, clamping the cursor to the valid range.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.grapheme_count());
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Current cursor position as a grapheme index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field is focused.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Set focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (or the end of the value).
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    fn insert_char(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.value.insert(offset, ch);
        self.cursor += 1;
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    /// Handle a key event. Returns `true` when the field changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.delete_char_back(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if self.cursor < self.grapheme_count() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    /// Handle a canonical event. Returns `true` when the field changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                self.handle_key(key)
            }
            _ => false,
        }
    }

    /// Cursor cell position within `area`, clamped to its right edge.
    #[must_use]
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let prefix = &self.value[..self.byte_offset(self.cursor)];
        let x = area
            .x
            .saturating_add(prefix.width() as u16)
            .min(area.right().saturating_sub(1).max(area.x));
        (x, area.y)
    }
}

impl Widget for TextInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        if self.value.is_empty() {
            frame.buffer.set_string(
                area.x,
                area.y,
                &self.placeholder,
                self.placeholder_style.merge(&self.style),
                area.right(),
            );
        } else {
            frame
                .buffer
                .set_string(area.x, area.y, &self.value, self.style, area.right());
        }
        if self.focused {
            frame.set_cursor(Some(self.cursor_position(area)));
        }
    }
}
