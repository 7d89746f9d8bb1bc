//! Artwork tree structure and traversal
//!
//! This module contains:
//! - The node entity with its structural children and presentation flag
//! - Breadth-first and level-grouped walks over a tree

/// Tree nodes, orientations and extents
pub mod node;
/// Breadth-first and per-level traversal
pub mod traversal;

pub use node::{ArtworkNode, Extent, NodeId, Orientation};
