#![forbid(unsafe_code)]

//! Render surface for the wander widget stack.
//!
//! Widgets mutate a cell grid ([`buffer::Buffer`]) wrapped in a
//! [`frame::Frame`] that adds cursor placement and mouse hit regions.
//! The style vocabulary ([`style::Style`], [`style::Color`],
//! [`style::StyleFlags`]) lives here too so widgets stay visually
//! consistent without a separate styling layer.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod style;

pub use buffer::Buffer;
pub use cell::Cell;
pub use frame::{Frame, HitData, HitId, HitRegion};
pub use style::{Color, Style, StyleFlags};
