#![forbid(unsafe_code)]

//! Mouse routing results.

/// Result of routing a mouse event to a widget.
///
/// Hit data conventions are per-widget: the carousel registers its
/// previous/next buttons with data `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event was not for this widget.
    Ignored,
    /// The event changed the widget's selection; payload is the new index.
    Selected(usize),
    /// The event activated the already-current item; payload is its index.
    Activated(usize),
}

impl MouseResult {
    /// Whether the event was consumed by the widget.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
