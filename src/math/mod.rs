//! Mathematical utilities for tree generation

/// Weighted integer partitioning of extents
pub mod partition;
/// Depth-dependent probability curves and sequence constants
pub mod probability;
