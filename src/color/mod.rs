//! Color representation and constrained color sequences

/// HSV color triple and channel metadata
pub mod hsv;
/// Constrained samplers producing color sequences
pub mod sampler;

pub use hsv::{Channel, HsvColor};
pub use sampler::{ColorSampler, ColorSequence, SamplingPolicy};
