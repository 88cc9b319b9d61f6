#![forbid(unsafe_code)]

//! Cell grid the widgets draw into.

use crate::cell::Cell;
use crate::style::Style;
use unicode_width::UnicodeWidthChar;
use wander_core::geometry::Rect;

/// A rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area as a rectangle.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at a position, if in bounds.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get the cell at a position mutably, if in bounds.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at a position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to the blank default.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Fill a rectangle (clipped to the buffer) with a cell.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Apply a style over a rectangle (clipped to the buffer).
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.apply(style);
                }
            }
        }
    }

    /// Write a string starting at `(x, y)`, clipped at `max_x` and the
    /// buffer edge. Wide characters blank their continuation cell;
    /// zero-width characters are skipped. Returns the x position after
    /// the last written cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut x = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if x >= limit || x.saturating_add(w) > limit {
                break;
            }
            let mut cell = Cell::from_char(ch);
            cell.apply(style);
            self.set(x, y, cell);
            if w == 2 {
                let mut cont = Cell::default();
                cont.apply(style);
                self.set(x + 1, y, cont);
            }
            x += w;
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.width())
            .map(|x| buf.get(x, y).map_or(' ', |c| c.ch))
            .collect()
    }

    #[test]
    fn set_string_writes_and_advances() {
        let mut buf = Buffer::new(10, 1);
        let next = buf.set_string(2, 0, "hey", Style::new(), 10);
        assert_eq!(next, 5);
        assert_eq!(row_text(&buf, 0), "  hey     ");
    }

    #[test]
    fn set_string_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let next = buf.set_string(0, 0, "toolongtext", Style::new(), 4);
        assert_eq!(next, 4);
        assert_eq!(row_text(&buf, 0), "tool      ");
    }

    #[test]
    fn set_string_handles_wide_chars() {
        let mut buf = Buffer::new(6, 1);
        let next = buf.set_string(0, 0, "京都", Style::new(), 6);
        assert_eq!(next, 4);
        assert_eq!(buf.get(0, 0).unwrap().ch, '京');
        // Continuation cell is blanked.
        assert_eq!(buf.get(1, 0).unwrap().ch, ' ');
        assert_eq!(buf.get(2, 0).unwrap().ch, '都');
    }

    #[test]
    fn set_string_does_not_split_wide_char_at_edge() {
        let mut buf = Buffer::new(3, 1);
        let next = buf.set_string(0, 0, "a京", Style::new(), 3);
        assert_eq!(next, 3);
        // A wide char that would straddle the clip limit is dropped whole.
        let next = buf.set_string(0, 0, "ab京", Style::new(), 3);
        assert_eq!(next, 2);
    }

    #[test]
    fn set_style_applies_over_rect() {
        let mut buf = Buffer::new(4, 2);
        buf.set_string(0, 0, "abcd", Style::new(), 4);
        buf.set_style(Rect::new(1, 0, 2, 1), Style::new().fg(Color::Ansi(2)));
        assert!(buf.get(0, 0).unwrap().fg.is_none());
        assert_eq!(buf.get(1, 0).unwrap().fg, Some(Color::Ansi(2)));
        assert_eq!(buf.get(2, 0).unwrap().fg, Some(Color::Ansi(2)));
        assert!(buf.get(3, 0).unwrap().fg.is_none());
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('x'));
        assert!(buf.get(5, 5).is_none());
    }
}
