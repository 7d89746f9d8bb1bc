//! Error types for artwork generation, presentation and export

use crate::color::hsv::Channel;
use crate::tree::node::NodeId;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all artwork operations
#[derive(Debug)]
pub enum ArtError {
    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A sampled color channel left its declared bounds
    ///
    /// Signals a bug in sequence generation. Values are never clamped back
    /// into range, since that would hide the drift.
    ChannelOutOfRange {
        /// Channel that was sampled
        channel: Channel,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Exclusive upper bound (inclusive when the channel is fixed)
        max: f64,
    },

    /// A tree level without nodes was handed to white-node selection
    EmptyLevel {
        /// Depth of the empty level
        depth: usize,
    },

    /// No node with the given identity exists in the tree
    UnknownNode {
        /// The missing node identity
        id: NodeId,
    },

    /// Failed to save a rendered artwork to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ChannelOutOfRange {
                channel,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Sampled {channel} value {value} is outside its bounds [{min}, {max})"
                )
            }
            Self::EmptyLevel { depth } => {
                write!(f, "Tree level at depth {depth} contains no nodes")
            }
            Self::UnknownNode { id } => {
                write!(f, "No node with id {id} exists in the artwork")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for artwork results
pub type Result<T> = std::result::Result<T, ArtError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ArtError {
    ArtError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a presentation value outside the unit interval
///
/// # Errors
///
/// Returns `InvalidParameter` if `value` is not finite or lies outside `[0, 1]`
pub fn ensure_unit_interval(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid_parameter(parameter, &value, &"must lie in [0, 1]"))
    }
}
