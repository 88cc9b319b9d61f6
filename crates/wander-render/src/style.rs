#![forbid(unsafe_code)]

//! Style types with fallback-merge semantics.
//!
//! A [`Style`] leaves unset fields as `None`; [`Style::merge`] overlays a
//! style on a fallback so widget-level styles cascade over base styles.

use bitflags::bitflags;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 base ANSI colors (0-7 normal, 8-15 bright).
    Ansi(u8),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold text.
        const BOLD      = 0b0000_0001;
        /// Dim text.
        const DIM       = 0b0000_0010;
        /// Italic text.
        const ITALIC    = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE = 0b0000_1000;
        /// Reversed foreground/background.
        const REVERSE   = 0b0001_0000;
    }
}

/// A text style. Unset fields inherit from whatever they are merged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Shorthand for setting the bold flag.
    #[must_use]
    pub fn bold(self) -> Self {
        let attrs = self.attrs.unwrap_or(StyleFlags::empty()) | StyleFlags::BOLD;
        self.attrs(attrs)
    }

    /// Merge this style over a fallback. Fields set on `self` win; unset
    /// fields are taken from `fallback`.
    #[must_use]
    pub fn merge(&self, fallback: &Style) -> Style {
        Style {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs: self.attrs.or(fallback.attrs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_own_fields() {
        let base = Style::new().fg(Color::Ansi(7)).bg(Color::Ansi(0));
        let accent = Style::new().fg(Color::Ansi(3));
        let merged = accent.merge(&base);
        assert_eq!(merged.fg, Some(Color::Ansi(3)));
        assert_eq!(merged.bg, Some(Color::Ansi(0)));
    }

    #[test]
    fn merge_fills_unset_attrs() {
        let base = Style::new().attrs(StyleFlags::UNDERLINE);
        let merged = Style::new().merge(&base);
        assert_eq!(merged.attrs, Some(StyleFlags::UNDERLINE));
    }

    #[test]
    fn bold_accumulates_flags() {
        let style = Style::new().attrs(StyleFlags::ITALIC).bold();
        let attrs = style.attrs.unwrap();
        assert!(attrs.contains(StyleFlags::ITALIC));
        assert!(attrs.contains(StyleFlags::BOLD));
    }
}
