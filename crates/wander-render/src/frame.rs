#![forbid(unsafe_code)]

//! Frame = buffer + metadata for a render pass.
//!
//! A [`Frame`] bundles the cell grid with cursor placement and the hit
//! regions widgets register for mouse interaction. Regions are kept as a
//! list in registration order; [`Frame::hit_test`] returns the most
//! recently registered region under a point, so later draws sit on top.

use crate::buffer::Buffer;
use wander_core::geometry::Rect;

/// Identifier for a clickable region.
///
/// Widgets register hit regions with unique IDs so event routing can tell
/// which widget a click belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data attached to a hit region.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Clickable button.
    Button,
}

#[derive(Debug, Clone, Copy)]
struct HitArea {
    area: Rect,
    id: HitId,
    region: HitRegion,
    data: HitData,
}

/// The render target for one pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid.
    pub buffer: Buffer,
    cursor: Option<(u16, u16)>,
    hits: Vec<HitArea>,
}

impl Frame {
    /// Create a frame with a blank buffer of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: None,
            hits: Vec::new(),
        }
    }

    /// Set (or clear) the visible cursor position.
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    /// The visible cursor position, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Register a hit region for mouse interaction.
    pub fn register_hit(&mut self, area: Rect, id: HitId, region: HitRegion, data: HitData) {
        if area.is_empty() {
            return;
        }
        self.hits.push(HitArea {
            area,
            id,
            region,
            data,
        });
    }

    /// Find the topmost hit region under a point.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hits
            .iter()
            .rev()
            .find(|hit| hit.area.contains(x, y))
            .map(|hit| (hit.id, hit.region, hit.data))
    }

    /// Reset buffer, cursor, and hit regions for the next pass.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = None;
        self.hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_returns_topmost() {
        let mut frame = Frame::new(10, 2);
        frame.register_hit(Rect::new(0, 0, 10, 1), HitId::new(1), HitRegion::Content, 0);
        frame.register_hit(Rect::new(4, 0, 2, 1), HitId::new(2), HitRegion::Button, 7);
        assert_eq!(
            frame.hit_test(5, 0),
            Some((HitId::new(2), HitRegion::Button, 7))
        );
        assert_eq!(
            frame.hit_test(0, 0),
            Some((HitId::new(1), HitRegion::Content, 0))
        );
        assert_eq!(frame.hit_test(0, 1), None);
    }

    #[test]
    fn empty_regions_are_not_registered() {
        let mut frame = Frame::new(4, 1);
        frame.register_hit(Rect::new(0, 0, 0, 1), HitId::new(1), HitRegion::Button, 0);
        assert_eq!(frame.hit_test(0, 0), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut frame = Frame::new(4, 1);
        frame.buffer.set_string(0, 0, "abcd", crate::Style::new(), 4);
        frame.set_cursor(Some((1, 0)));
        frame.register_hit(Rect::new(0, 0, 4, 1), HitId::new(1), HitRegion::Content, 0);
        frame.reset();
        assert_eq!(frame.buffer.get(0, 0).unwrap().ch, ' ');
        assert!(frame.cursor().is_none());
        assert!(frame.hit_test(0, 0).is_none());
    }
}
