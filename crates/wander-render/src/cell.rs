#![forbid(unsafe_code)]

//! A single cell of the render surface.

use crate::style::{Color, Style, StyleFlags};

/// One character cell with resolved style values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character shown in this cell. Wide characters occupy the
    /// following cell as well; the drawing routines blank it.
    pub ch: char,
    /// Resolved foreground color, if any.
    pub fg: Option<Color>,
    /// Resolved background color, if any.
    pub bg: Option<Color>,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }
}

impl Cell {
    /// Create a cell from a character with no styling.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    /// Return a copy with the given foreground color.
    #[must_use]
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Return a copy with the given background color.
    #[must_use]
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Apply set fields of a style to this cell in place.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = style.bg {
            self.bg = Some(bg);
        }
        if let Some(attrs) = style.attrs {
            self.attrs = attrs;
        }
    }
}
