//! Spatial layout of presented artwork tiles

/// Tile rectangles and hit testing
pub mod layout;

pub use layout::{Rect, Tile};
