//! Generation constants and runtime configuration defaults

// Tree shape defaults
/// Default deepest level of the tree
pub const DEFAULT_MAX_DEPTH: u32 = 5;
/// Default fewest children per branch
pub const DEFAULT_MIN_CHILDREN: u32 = 2;
/// Default most children per branch at the root
pub const DEFAULT_MAX_CHILDREN: u32 = 6;
/// Default smallest child layout weight
pub const DEFAULT_MIN_WEIGHT: u32 = 10;
/// Default exclusive bound on child layout weights
pub const DEFAULT_MAX_WEIGHT: u32 = 20;

// Bounds on the tree size; node count grows with fan-out to the power of depth
/// Largest accepted maximum depth
pub const MAX_DEPTH_LIMIT: u32 = 16;
/// Largest accepted maximum child count
pub const MAX_CHILDREN_LIMIT: u32 = 32;
/// Largest accepted worst-case node count of a generated tree
pub const MAX_NODE_BUDGET: u64 = 1 << 20;

// Presentation defaults
/// Default gap between sibling tiles
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;
/// Default fixed saturation of sampled colors
pub const DEFAULT_SATURATION: f64 = 0.5;
/// Default lower brightness bound of sampled colors
pub const DEFAULT_MIN_BRIGHTNESS: f64 = 0.8;
/// Default upper brightness bound of sampled colors
pub const DEFAULT_MAX_BRIGHTNESS: f64 = 1.0;
/// Default per-color step of the offset sampler, as a fraction of each span
pub const DEFAULT_OFFSET_STEP: f64 = 0.25;
/// Fraction of the hue circle a tapped tile advances by
pub const HUE_SHIFT_ON_TAP: f64 = 0.13;
/// Color showing through the gaps between tiles
pub const STROKE_COLOR: [u8; 4] = [0, 0, 0, 255];

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1080;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1350;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of artworks produced per run
pub const DEFAULT_COUNT: usize = 1;

// Output settings
/// Default output file name
pub const DEFAULT_OUTPUT: &str = "artwork.png";
/// Separator between the output stem and the artwork index in batch runs
pub const BATCH_SEPARATOR: &str = "_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
