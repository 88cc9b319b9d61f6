#![forbid(unsafe_code)]

//! City recommendation board.
//!
//! Visitors type a city name; an existing entry gains a vote, a new name
//! joins the list. The board re-sorts by descending vote count after an
//! increment. New entries join at the tail without a sort pass — that is
//! the shipped behavior and it is kept as-is, even though it can leave a
//! fresh entry below older single-vote entries until the next increment.

use unicode_width::UnicodeWidthStr;
use wander_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use wander_core::geometry::Rect;
use wander_render::frame::Frame;
use wander_render::style::Style;
#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::input::TextInput;
use crate::{StatefulWidget, draw_text_span, set_style_area};

/// Derive the matching key for a submission or stored label: strip all
/// commas, take the first whitespace-delimited token, lowercase it.
///
/// `"Paris, France"` and `"paris japan"` both derive `paris`. That the
/// country is ignored is deliberate: votes for the same city aggregate no
/// matter how the visitor qualified it.
#[must_use]
pub fn rec_key(raw: &str) -> String {
    raw.replace(',', "")
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Error for seeding a board from already-rendered host items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecParseError {
    /// A count cell did not match `+<integer>`.
    #[error("malformed count cell {0:?}: expected +<integer>")]
    BadCount(String),
}

fn parse_count_cell(text: &str) -> Result<u32, RecParseError> {
    let digits = text.strip_prefix('+').unwrap_or(text);
    digits
        .parse::<u32>()
        .map_err(|_| RecParseError::BadCount(text.to_string()))
}

/// One recommended city: the first-ever submitted label and its votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecEntry {
    label: String,
    count: u32,
}

impl RecEntry {
    /// Create an entry with an explicit vote count.
    #[must_use]
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }

    /// The display label (full text of the first submission).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current vote count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The matching key derived from the stored label.
    #[must_use]
    pub fn key(&self) -> String {
        rec_key(&self.label)
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was empty after trimming; nothing changed.
    Ignored,
    /// An existing entry gained a vote; payload is its position after the
    /// re-sort.
    Incremented(usize),
    /// A new entry was appended; payload is its tail position.
    Added(usize),
}

/// The vote board: an ordered collection of [`RecEntry`] values, unique by
/// derived key. Entries are never removed; the board lives as long as the
/// page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecBoard {
    entries: Vec<RecEntry>,
}

impl RecBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a board from already-rendered host items, each a label plus
    /// its count cell text (`+<integer>`).
    ///
    /// Malformed count text is a violation of the host markup contract
    /// and fails the seed.
    pub fn from_rendered<L, C>(items: impl IntoIterator<Item = (L, C)>) -> Result<Self, RecParseError>
    where
        L: Into<String>,
        C: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (label, count) in items {
            let count = parse_count_cell(count.as_ref())?;
            entries.push(RecEntry {
                label: label.into(),
                count,
            });
        }
        Ok(Self { entries })
    }

    /// The entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[RecEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Submit a raw city name.
    ///
    /// Empty (after trimming) submissions are a defined no-op. A match on
    /// the derived key increments that entry and re-sorts the board; a
    /// miss appends a fresh single-vote entry at the tail without
    /// sorting.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let key = rec_key(raw);

        if let Some(found) = self.entries.iter().position(|e| e.key() == key) {
            self.entries[found].count += 1;
            #[cfg(feature = "tracing")]
            let count = self.entries[found].count;
            self.sort_by_votes();
            let position = self
                .entries
                .iter()
                .position(|e| e.key() == key)
                .unwrap_or(found);
            #[cfg(feature = "tracing")]
            Self::log_submit("increment", &key, count);
            return SubmitOutcome::Incremented(position);
        }

        self.entries.push(RecEntry {
            label: trimmed.to_string(),
            count: 1,
        });
        #[cfg(feature = "tracing")]
        Self::log_submit("append", &key, 1);
        SubmitOutcome::Added(self.entries.len() - 1)
    }

    /// Stable sort, descending by vote count. Ties keep their prior
    /// relative order.
    pub fn sort_by_votes(&mut self) {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
    }

    #[cfg(feature = "tracing")]
    fn log_submit(outcome: &str, key: &str, count: u32) {
        tracing::debug!(message = "recs.submit", outcome, key, count);
    }
}

/// Rendering for a [`RecBoard`]: one row per entry, label left, vote
/// count right-aligned as `+<count>`. The whole list repaints each pass,
/// so a re-sorted board simply shows in its new order.
#[derive(Debug, Clone, Default)]
pub struct RecPanel {
    style: Style,
    label_style: Style,
    count_style: Style,
}

impl RecPanel {
    /// Create a panel with default styling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base style for the panel area.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style for entry labels.
    #[must_use]
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Set the style for the vote count cells.
    #[must_use]
    pub fn count_style(mut self, style: Style) -> Self {
        self.count_style = style;
        self
    }
}

impl StatefulWidget for RecPanel {
    type State = RecBoard;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        if area.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        let render_span = tracing::debug_span!(
            "recs.render",
            rows = state.len(),
            render_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _render_guard = render_span.enter();

        set_style_area(&mut frame.buffer, area, self.style);

        for (row, entry) in state.entries().iter().enumerate() {
            let Ok(row) = u16::try_from(row) else { break };
            let y = area.y.saturating_add(row);
            if y >= area.bottom() {
                break;
            }
            let count_text = format!("+{}", entry.count());
            let count_width = count_text.width() as u16;
            let count_x = area.right().saturating_sub(count_width).max(area.x);
            draw_text_span(
                frame,
                count_x,
                y,
                &count_text,
                self.count_style.merge(&self.style),
                area.right(),
            );
            // Labels stop one cell short of the count.
            let label_max = count_x.saturating_sub(1);
            draw_text_span(
                frame,
                area.x,
                y,
                entry.label(),
                self.label_style.merge(&self.style),
                label_max,
            );
        }

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = render_start.elapsed().as_micros() as u64;
            render_span.record("render_duration_us", elapsed_us);
        }
    }
}

/// The recommendation widget's event wiring: a focused text entry over a
/// seeded board. Enter commits the field's value; every other key edits
/// the field. The board is fully present before any event can reach it,
/// because construction takes the seeded board.
#[derive(Debug, Clone, Default)]
pub struct RecsState {
    input: TextInput,
    board: RecBoard,
}

impl RecsState {
    /// Wire a text entry to a seeded board.
    #[must_use]
    pub fn new(board: RecBoard) -> Self {
        Self {
            input: TextInput::new().with_focused(true),
            board,
        }
    }

    /// Replace the text entry (builder), keeping it focused.
    #[must_use]
    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input.with_focused(true);
        self
    }

    /// The text entry.
    #[must_use]
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &RecBoard {
        &self.board
    }

    /// The board, mutably.
    pub fn board_mut(&mut self) -> &mut RecBoard {
        &mut self.board
    }

    /// Commit the field's current value to the board.
    ///
    /// The field clears on any successful submission; an empty submission
    /// leaves both the board and the field untouched.
    pub fn commit(&mut self) -> SubmitOutcome {
        let outcome = self.board.submit(self.input.value());
        if !matches!(outcome, SubmitOutcome::Ignored) {
            self.input.clear();
        }
        outcome
    }

    /// Handle a key event. Returns `true` when board or field changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return !matches!(self.commit(), SubmitOutcome::Ignored);
        }
        self.input.handle_key(key)
    }

    /// Handle a canonical event. Returns `true` when board or field changed.
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

    /// Render the text entry into `input_area` and the board into
    /// `list_area`.
    pub fn render(&mut self, panel: &RecPanel, input_area: Rect, list_area: Rect, frame: &mut Frame) {
        crate::Widget::render(&self.input, input_area, frame);
        panel.render(list_area, frame, &mut self.board);
    }
}
