//! Procedurally tiled "modern art" compositions
//!
//! A canvas is recursively split into a tree of weighted rectangles whose
//! orientation alternates with depth. Tiles are colored from a constrained
//! color sequence, optionally keeping one locked white tile per tree level.
//! Presentation edits (depth limit, stroke, saturation, brightness) change
//! how the tree is shown without regenerating it.

#![forbid(unsafe_code)]

/// Tree generation and the artwork composition
pub mod algorithm;
/// HSV colors and constrained color sequences
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Probability curves and weighted partitioning
pub mod math;
/// Layout of presented tiles
pub mod spatial;
/// Artwork tree nodes and traversal
pub mod tree;

pub use algorithm::artwork::Artwork;
pub use algorithm::generator::{ArtworkConfig, ArtworkGenerator, generate_artwork};
pub use io::error::{ArtError, Result};
