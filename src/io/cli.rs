//! Command-line interface for batch artwork generation

use crate::algorithm::generator::{ArtworkConfig, ArtworkGenerator};
use crate::color::sampler::{ColorSampler, SamplingPolicy};
use crate::io::configuration::{
    BATCH_SEPARATOR, DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_MAX_BRIGHTNESS, DEFAULT_MAX_CHILDREN,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_BRIGHTNESS, DEFAULT_MIN_CHILDREN,
    DEFAULT_MIN_WEIGHT, DEFAULT_OFFSET_STEP, DEFAULT_OUTPUT, DEFAULT_SATURATION, DEFAULT_SEED,
    DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH, HUE_SHIFT_ON_TAP,
};
use crate::io::error::Result;
use crate::io::image::export_artwork_as_png;
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Color sequencing policy selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SamplerKind {
    /// Independent uniform colors
    Uniform,
    /// Fixed fractional step through every unfixed channel
    Offset,
    /// Golden ratio hue stepping
    GoldenRatio,
}

#[derive(Parser)]
#[command(name = "modern-art")]
#[command(
    author,
    version,
    about = "Generate procedurally tiled modern art compositions"
)]
/// Command-line arguments for the artwork generator
// Presentation toggles are independent flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file; batch runs insert an index before the extension
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of artworks to generate, with consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Deepest level of the generated tree
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Fewest children per branch
    #[arg(long, default_value_t = DEFAULT_MIN_CHILDREN)]
    pub min_children: u32,

    /// Most children per branch at the root
    #[arg(long, default_value_t = DEFAULT_MAX_CHILDREN)]
    pub max_children: u32,

    /// Smallest child layout weight
    #[arg(long, default_value_t = DEFAULT_MIN_WEIGHT)]
    pub min_weight: u32,

    /// Exclusive bound on child layout weights
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: u32,

    /// Gap between sibling tiles in pixels
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Do not keep a locked white tile on every level
    #[arg(long)]
    pub no_white: bool,

    /// Show the tree only down to this depth
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    pub depth_limit: Option<i32>,

    /// Collapse branches smaller than this many pixels on either side
    #[arg(long)]
    pub min_tile_size: Option<f64>,

    /// Color sequencing policy
    #[arg(long, value_enum, default_value_t = SamplerKind::GoldenRatio)]
    pub sampler: SamplerKind,

    /// Step of the offset sampler as a fraction of each channel span
    #[arg(long, default_value_t = DEFAULT_OFFSET_STEP)]
    pub offset: f64,

    /// Saturation of every sampled color
    #[arg(long, default_value_t = DEFAULT_SATURATION)]
    pub saturation: f64,

    /// Lower brightness bound of sampled colors
    #[arg(long, default_value_t = DEFAULT_MIN_BRIGHTNESS)]
    pub min_brightness: f64,

    /// Upper brightness bound of sampled colors
    #[arg(long, default_value_t = DEFAULT_MAX_BRIGHTNESS)]
    pub max_brightness: f64,

    /// Tap the tile at X,Y before saving, advancing its hue (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub tap: Vec<(f64, f64)>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite outputs that already exist
    #[arg(long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse an `X,Y` point
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated numbers
pub fn parse_point(text: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tree generation parameters gathered from the arguments
    pub const fn artwork_config(&self) -> ArtworkConfig {
        ArtworkConfig {
            max_depth: self.max_depth,
            min_children: self.min_children,
            max_children: self.max_children,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
            force_white_nodes: !self.no_white,
            stroke_width: self.stroke_width,
        }
    }

    /// Color sampler configured from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the offset, saturation or brightness bounds are invalid
    pub fn build_sampler(&self, seed: u64) -> Result<ColorSampler> {
        let policy = match self.sampler {
            SamplerKind::Uniform => SamplingPolicy::Uniform,
            SamplerKind::Offset => SamplingPolicy::Offset { step: self.offset },
            SamplerKind::GoldenRatio => SamplingPolicy::GoldenRatio,
        };
        ColorSampler::new(policy, seed)?
            .with_saturation(self.saturation)?
            .with_brightness_range(self.min_brightness, self.max_brightness)
    }

    /// Where artwork number `index` is written
    pub fn output_path(&self, index: usize) -> PathBuf {
        if self.count <= 1 {
            return self.output.clone();
        }

        let stem = self.output.file_stem().unwrap_or_default();
        let extension = self
            .output
            .extension()
            .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());
        let file_name = format!(
            "{}{BATCH_SEPARATOR}{index:03}.{extension}",
            stem.to_string_lossy()
        );

        self.output.parent().map_or_else(
            || PathBuf::from(&file_name),
            |parent| parent.join(&file_name),
        )
    }

    /// Seed used for artwork number `index`
    pub const fn seed_for(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Orchestrates batch generation with progress tracking
pub struct ArtworkProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl ArtworkProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };
        Self { cli, progress }
    }

    /// Generate every requested artwork
    ///
    /// Returns the paths actually written; skipped outputs are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an export fails
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        self.cli.artwork_config().validate()?;

        let mut written = Vec::new();
        for index in 0..self.cli.count {
            let path = self.cli.output_path(index);
            self.progress.start_artwork(&path);

            if self.should_process(&path) {
                self.produce(index, &path)?;
                written.push(path);
            }

            self.progress.complete_artwork();
        }

        self.progress.finish();
        Ok(written)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !self.cli.skip_existing() || !path.exists() {
            return true;
        }
        warn!(path = %path.display(), "skipping, output exists");
        false
    }

    fn produce(&self, index: usize, path: &Path) -> Result<()> {
        let seed = self.cli.seed_for(index);
        let mut sampler = self.cli.build_sampler(seed.rotate_left(32))?;
        let mut generator = ArtworkGenerator::new(self.cli.artwork_config(), seed)?;
        let mut artwork =
            generator.generate_artwork(self.cli.width, self.cli.height, Some(&mut sampler))?;

        if let Some(limit) = self.cli.depth_limit {
            artwork.set_depth_limit(limit);
        }
        if let Some(size) = self.cli.min_tile_size {
            artwork.set_min_tile_size(size)?;
        }

        artwork.register_click_handler(|node| node.rotate_hue(HUE_SHIFT_ON_TAP));
        for &(x, y) in &self.cli.tap {
            if artwork.click_at(x, y)?.is_none() {
                warn!(x, y, "tap missed every tile");
            }
        }

        export_artwork_as_png(&artwork, path)?;
        info!(
            path = %path.display(),
            seed,
            tiles = artwork.tiles().len(),
            locked_white = artwork.locked_white_nodes().len(),
            "wrote artwork"
        );
        Ok(())
    }
}
