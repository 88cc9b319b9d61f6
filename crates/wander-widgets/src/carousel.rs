#![forbid(unsafe_code)]

//! Photo carousel widget.
//!
//! Each carousel instance owns a private index over a fixed strip of
//! slides, with wraparound navigation in both directions. The strip
//! renders shifted by `-(slide_width * current)` cells so the active
//! slide sits in the viewport, mirroring a translated image strip.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wander_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use wander_core::geometry::Rect;
use wander_render::cell::Cell;
use wander_render::frame::{Frame, HitId, HitRegion};
use wander_render::style::Style;

use crate::mouse::MouseResult;
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area};

/// A fixed block of text lines standing in for one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    lines: Vec<String>,
}

impl Slide {
    /// Create a slide from its lines.
    #[must_use]
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The slide's lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Display width in cells (widest line).
    #[must_use]
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| line.width() as u16)
            .max()
            .unwrap_or(0)
    }

    /// Height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

impl From<&str> for Slide {
    fn from(line: &str) -> Self {
        Self::new([line])
    }
}

/// Carousel construction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A carousel needs at least one slide; index arithmetic over an
    /// empty strip is undefined.
    #[error("carousel requires at least one slide")]
    Empty,
}

/// Per-instance navigation state.
///
/// `slide_count` and `slide_width` are snapshots taken at setup; changes
/// to the slides afterwards are not reflected. The index is the only
/// mutable part and always stays in `[0, slide_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    slide_count: usize,
    slide_width: u16,
}

impl CarouselState {
    /// Create a state for a strip of `slide_count` slides of
    /// `slide_width` cells. Fails on an empty strip.
    pub fn new(slide_count: usize, slide_width: u16) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            current: 0,
            slide_count,
            slide_width,
        })
    }

    /// Index of the active slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides, fixed at setup.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Slide width in cells, fixed at setup.
    #[must_use]
    pub const fn slide_width(&self) -> u16 {
        self.slide_width
    }

    /// Horizontal strip offset in cells: `-(slide_width * current)`.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        -(self.slide_width as i32 * self.current as i32)
    }

    /// Move to the next slide, wrapping past the last to the first.
    pub fn advance(&mut self) {
        #[cfg(feature = "tracing")]
        let from = self.current;
        self.current = (self.current + 1) % self.slide_count;
        #[cfg(feature = "tracing")]
        Self::log_move("advance", from, self.current);
    }

    /// Move to the previous slide, wrapping past the first to the last.
    pub fn retreat(&mut self) {
        #[cfg(feature = "tracing")]
        let from = self.current;
        if self.current == 0 {
            self.current = self.slide_count - 1;
        } else {
            self.current -= 1;
        }
        #[cfg(feature = "tracing")]
        Self::log_move("retreat", from, self.current);
    }

    /// Handle keyboard navigation: `Left` retreats, `Right` advances.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => {
                self.retreat();
                true
            }
            KeyCode::Right => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Handle mouse clicks on the navigation buttons.
    ///
    /// Hit data convention: the previous button registers `data = 0`,
    /// the next button `data = 1`.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, u64)>,
        expected_id: HitId,
    ) -> MouseResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((id, HitRegion::Button, data)) = hit
                    && id == expected_id
                {
                    match data {
                        0 => {
                            self.retreat();
                            return MouseResult::Selected(self.current);
                        }
                        1 => {
                            self.advance();
                            return MouseResult::Selected(self.current);
                        }
                        _ => {}
                    }
                }
                MouseResult::Ignored
            }
            _ => MouseResult::Ignored,
        }
    }

    #[cfg(feature = "tracing")]
    fn log_move(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "carousel.move", reason, from, to);
    }
}

/// The carousel widget: a strip of slides with previous/next buttons.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    slides: Vec<Slide>,
    style: Style,
    marker_style: Style,
    prev_marker: &'a str,
    next_marker: &'a str,
    hit_id: Option<HitId>,
}

impl<'a> Carousel<'a> {
    /// Create a carousel from its slides. Fails on an empty strip.
    pub fn new(slides: impl IntoIterator<Item = Slide>) -> Result<Self, CarouselError> {
        let slides: Vec<Slide> = slides.into_iter().collect();
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            slides,
            style: Style::default(),
            marker_style: Style::default(),
            prev_marker: "‹",
            next_marker: "›",
            hit_id: None,
        })
    }

    /// Set the base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the navigation button style.
    #[must_use]
    pub fn marker_style(mut self, style: Style) -> Self {
        self.marker_style = style;
        self
    }

    /// Set the previous/next button markers.
    #[must_use]
    pub fn markers(mut self, prev: &'a str, next: &'a str) -> Self {
        self.prev_marker = prev;
        self.next_marker = next;
        self
    }

    /// Set a hit ID so the buttons register mouse regions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Immutable slide strip.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Snapshot a fresh navigation state for this strip.
    ///
    /// The slide width is measured once here, from the first slide —
    /// the setup-time reading the whole widget keeps using.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current: 0,
            slide_count: self.slides.len(),
            slide_width: self.slides[0].width(),
        }
    }

    /// Draw one line of a slide at a signed strip position, clipped to
    /// `[min_x, max_x)`.
    fn draw_line_at(
        frame: &mut Frame,
        x0: i32,
        y: u16,
        text: &str,
        style: Style,
        min_x: u16,
        max_x: u16,
    ) {
        let mut x = x0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if x >= i32::from(max_x) {
                break;
            }
            if x >= i32::from(min_x) && x + w <= i32::from(max_x) {
                let mut cell = Cell::from_char(ch);
                cell.apply(style);
                frame.buffer.set(x as u16, y, cell);
                if w == 2 {
                    let mut cont = Cell::default();
                    cont.apply(style);
                    frame.buffer.set(x as u16 + 1, y, cont);
                }
            }
            x += w;
        }
    }
}

impl StatefulWidget for Carousel<'_> {
    type State = CarouselState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        set_style_area(&mut frame.buffer, area, self.style);

        let prev_width = self.prev_marker.width() as u16;
        let next_width = self.next_marker.width() as u16;
        let strip = Rect::new(
            area.x.saturating_add(prev_width),
            area.y,
            area.width.saturating_sub(prev_width).saturating_sub(next_width),
            area.height,
        );

        let marker_y = area.y + area.height / 2;
        if prev_width > 0 {
            draw_text_span(
                frame,
                area.x,
                marker_y,
                self.prev_marker,
                self.marker_style.merge(&self.style),
                area.right(),
            );
            if let Some(id) = self.hit_id {
                frame.register_hit(
                    Rect::new(area.x, area.y, prev_width, area.height),
                    id,
                    HitRegion::Button,
                    0,
                );
            }
        }
        if next_width > 0 {
            let next_x = area.right().saturating_sub(next_width);
            draw_text_span(
                frame,
                next_x,
                marker_y,
                self.next_marker,
                self.marker_style.merge(&self.style),
                area.right(),
            );
            if let Some(id) = self.hit_id {
                frame.register_hit(
                    Rect::new(next_x, area.y, next_width, area.height),
                    id,
                    HitRegion::Button,
                    1,
                );
            }
        }

        if strip.is_empty() {
            return;
        }

        // The strip is translated left by slide_width * current; slides
        // outside the viewport clip away entirely.
        let origin = i32::from(strip.x) + state.offset();
        let slide_width = i32::from(state.slide_width());
        for (index, slide) in self.slides.iter().enumerate() {
            let x0 = origin + index as i32 * slide_width;
            if x0 >= i32::from(strip.right()) || x0 + i32::from(slide.width()) <= i32::from(strip.x)
            {
                continue;
            }
            for (row, line) in slide.lines().iter().enumerate() {
                let Ok(row) = u16::try_from(row) else { break };
                let y = strip.y.saturating_add(row);
                if y >= strip.bottom() {
                    break;
                }
                Self::draw_line_at(frame, x0, y, line, self.style, strip.x, strip.right());
            }
        }
    }
}

impl Widget for Carousel<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = self.state();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

    fn state(count: usize) -> CarouselState {
        CarouselState::new(count, 10).unwrap()
    }

    #[test]
    fn advance_wraps_forward() {
        let mut state = state(4);
        for expected in [1, 2, 3] {
            state.advance();
            assert_eq!(state.current(), expected);
        }
        state.advance();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn retreat_wraps_backward() {
        let mut state = state(4);
        state.retreat();
        assert_eq!(state.current(), 3);
        state.retreat();
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn offset_is_negative_width_times_index() {
        let mut state = state(4);
        assert_eq!(state.offset(), 0);
        state.advance();
        assert_eq!(state.offset(), -10);
        state.advance();
        assert_eq!(state.offset(), -20);
    }

    #[test]
    fn single_slide_wraps_to_itself() {
        let mut state = state(1);
        state.advance();
        assert_eq!(state.current(), 0);
        state.retreat();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn zero_slides_rejected_at_construction() {
        assert_eq!(CarouselState::new(0, 10), Err(CarouselError::Empty));
        assert_eq!(
            Carousel::new(Vec::<Slide>::new()).err(),
            Some(CarouselError::Empty)
        );
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut state = state(3);
        assert!(state.handle_key(&KeyEvent::new(KeyCode::Right)));
        assert_eq!(state.current(), 1);
        assert!(state.handle_key(&KeyEvent::new(KeyCode::Left)));
        assert_eq!(state.current(), 0);
        assert!(!state.handle_key(&KeyEvent::new(KeyCode::Enter)));
    }

    #[test]
    fn slide_width_snapshots_the_first_slide() {
        let carousel =
            Carousel::new([Slide::from("wide slide"), Slide::from("x")]).unwrap();
        let state = carousel.state();
        assert_eq!(state.slide_width(), 10);
        assert_eq!(state.slide_count(), 2);
    }

    fn row_text(frame: &Frame, y: u16) -> String {
        (0..frame.buffer.width())
            .map(|x| frame.buffer.get(x, y).map_or(' ', |c| c.ch))
            .collect()
    }

    #[test]
    fn render_shows_only_the_active_slide() {
        let carousel = Carousel::new([Slide::from("AAAA"), Slide::from("BBBB")]).unwrap();
        let mut state = carousel.state();
        let mut frame = Frame::new(6, 1);
        StatefulWidget::render(&carousel, Rect::new(0, 0, 6, 1), &mut frame, &mut state);
        let row = row_text(&frame, 0);
        assert!(row.contains("AAAA"));
        assert!(!row.contains('B'));

        state.advance();
        frame.reset();
        StatefulWidget::render(&carousel, Rect::new(0, 0, 6, 1), &mut frame, &mut state);
        let row = row_text(&frame, 0);
        assert!(row.contains("BBBB"));
        assert!(!row.contains('A'));
    }

    #[test]
    fn render_draws_markers_at_the_edges() {
        let carousel = Carousel::new([Slide::from("AA")]).unwrap();
        let mut state = carousel.state();
        let mut frame = Frame::new(4, 1);
        StatefulWidget::render(&carousel, Rect::new(0, 0, 4, 1), &mut frame, &mut state);
        assert_eq!(row_text(&frame, 0), "‹AA›");
    }

    #[test]
    fn buttons_register_hits_and_route_clicks() {
        let carousel = Carousel::new([Slide::from("AA"), Slide::from("BB")])
            .unwrap()
            .hit_id(HitId::new(3));
        let mut state = carousel.state();
        let mut frame = Frame::new(4, 1);
        StatefulWidget::render(&carousel, Rect::new(0, 0, 4, 1), &mut frame, &mut state);

        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 3, 0);
        let hit = frame.hit_test(click.x, click.y);
        assert_eq!(
            state.handle_mouse(&click, hit, HitId::new(3)),
            MouseResult::Selected(1)
        );

        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0);
        let hit = frame.hit_test(click.x, click.y);
        assert_eq!(
            state.handle_mouse(&click, hit, HitId::new(3)),
            MouseResult::Selected(0)
        );

        // A click on the slide body is not a button.
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 1, 0);
        let hit = frame.hit_test(click.x, click.y);
        assert_eq!(
            state.handle_mouse(&click, hit, HitId::new(3)),
            MouseResult::Ignored
        );

        // Another widget's hit ID is ignored.
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 3, 0);
        let hit = frame.hit_test(click.x, click.y);
        assert_eq!(
            state.handle_mouse(&click, hit, HitId::new(9)),
            MouseResult::Ignored
        );
    }

    #[test]
    fn independent_instances_keep_private_state() {
        let carousel = Carousel::new([Slide::from("AA"), Slide::from("BB")]).unwrap();
        let mut first = carousel.state();
        let second = carousel.state();
        first.advance();
        assert_eq!(first.current(), 1);
        assert_eq!(second.current(), 0);
    }
}
