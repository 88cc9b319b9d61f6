#![forbid(unsafe_code)]

//! Interactive widgets for the wander travel board.
//!
//! Two independent components with no shared state:
//!
//! - [`recs`] — the city recommendation list: a text entry commits city
//!   names into a vote board that keeps itself sorted by vote count.
//! - [`carousel`] — a photo strip with wraparound next/previous
//!   navigation, one private index per instance.
//!
//! Widgets render into a [`Frame`]; state transitions happen in explicit
//! command methods driven by a thin event adapter, never inside rendering.

pub mod carousel;
pub mod input;
pub mod mouse;
pub mod recs;

use wander_core::geometry::Rect;
use wander_render::buffer::Buffer;
use wander_render::frame::Frame;
use wander_render::style::Style;

/// A `Widget` is a renderable component.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    /// The state this widget renders from.
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Draw a single span of text, clipped at `max_x`. Returns the next x.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    frame.buffer.set_string(x, y, text, style, max_x)
}

/// Apply a style to a rectangular area of the buffer.
pub(crate) fn set_style_area(buffer: &mut Buffer, area: Rect, style: Style) {
    buffer.set_style(area, style);
}
