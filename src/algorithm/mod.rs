/// Artwork composition and its global presentation edits
pub mod artwork;
/// Recursive tree generation and its configuration
pub mod generator;
