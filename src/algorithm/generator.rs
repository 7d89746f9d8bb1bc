//! Recursive weighted space partitioning into artwork trees
//!
//! Each branch splits its extent along one axis among a random number of
//! children whose shares follow random integer weights. Children alternate
//! to the perpendicular axis, producing the grid-like compositions. Whether a
//! node stops as a leaf is a random draw whose success probability grows
//! with depth and reaches certainty at the maximum depth.

use crate::algorithm::artwork::Artwork;
use crate::color::sampler::ColorSequence;
use crate::io::configuration::{
    DEFAULT_MAX_CHILDREN, DEFAULT_MAX_DEPTH, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_CHILDREN,
    DEFAULT_MIN_WEIGHT, DEFAULT_STROKE_WIDTH, MAX_CHILDREN_LIMIT, MAX_DEPTH_LIMIT, MAX_NODE_BUDGET,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::partition::apportion;
use crate::math::probability::{leaf_probability, max_children_at_depth, max_node_count};
use crate::tree::node::{ArtworkNode, Extent, NodeId, Orientation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Weight given to the root, which has no siblings
const ROOT_LAYOUT_WEIGHT: u32 = 1;

/// Parameters controlling tree shape and presentation defaults
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtworkConfig {
    /// Deepest level a leaf may sit at; zero yields a single tile
    pub max_depth: u32,
    /// Fewest children a branch receives
    pub min_children: u32,
    /// Most children a branch at the root may receive
    pub max_children: u32,
    /// Smallest layout weight drawn for a child (inclusive)
    pub min_weight: u32,
    /// Largest layout weight bound for a child (exclusive unless equal to `min_weight`)
    pub max_weight: u32,
    /// Keep one locked pure white tile on every tree level
    pub force_white_nodes: bool,
    /// Gap between sibling tiles
    pub stroke_width: f64,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_children: DEFAULT_MIN_CHILDREN,
            max_children: DEFAULT_MAX_CHILDREN,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            force_white_nodes: true,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ArtworkConfig {
    /// Check every range before any node is allocated
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `max_depth` exceeds the supported limit
    /// - `min_children` is zero or greater than `max_children`
    /// - `max_children` exceeds the supported limit
    /// - the largest tree the depth and fan-out allow exceeds the node budget
    /// - `min_weight` is zero or greater than `max_weight`
    /// - `stroke_width` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &format!("must not exceed {MAX_DEPTH_LIMIT}"),
            ));
        }
        if self.min_children == 0 {
            return Err(invalid_parameter(
                "min_children",
                &self.min_children,
                &"must be at least 1",
            ));
        }
        if self.min_children > self.max_children {
            return Err(invalid_parameter(
                "min_children",
                &self.min_children,
                &format!("must not exceed max_children ({})", self.max_children),
            ));
        }
        if self.max_children > MAX_CHILDREN_LIMIT {
            return Err(invalid_parameter(
                "max_children",
                &self.max_children,
                &format!("must not exceed {MAX_CHILDREN_LIMIT}"),
            ));
        }
        let worst_case = max_node_count(self.max_depth, self.min_children, self.max_children);
        if worst_case > MAX_NODE_BUDGET {
            return Err(invalid_parameter(
                "max_depth",
                &self.max_depth,
                &format!(
                    "allows up to {worst_case} nodes with {}..={} children, more than {MAX_NODE_BUDGET}",
                    self.min_children, self.max_children
                ),
            ));
        }
        if self.min_weight == 0 {
            return Err(invalid_parameter(
                "min_weight",
                &self.min_weight,
                &"must be at least 1",
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(invalid_parameter(
                "min_weight",
                &self.min_weight,
                &format!("must not exceed max_weight ({})", self.max_weight),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &"must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Seeded builder of artwork trees
pub struct ArtworkGenerator {
    config: ArtworkConfig,
    rng: StdRng,
    next_id: u32,
}

impl ArtworkGenerator {
    /// Create a generator with a deterministic seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: ArtworkConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a generator drawing from an existing random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn from_rng(config: ArtworkConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            next_id: 0,
        })
    }

    /// Configuration this generator was built with
    pub const fn config(&self) -> &ArtworkConfig {
        &self.config
    }

    /// Build a fresh tree covering `width` x `height`
    ///
    /// Node identities restart at zero for every tree and follow pre-order.
    pub fn generate_tree(&mut self, width: u32, height: u32) -> ArtworkNode {
        self.next_id = 0;
        let orientation = if self.rng.random_bool(0.5) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let root = self.build_node(
            0,
            ROOT_LAYOUT_WEIGHT,
            orientation,
            Extent::new(width, height),
        );
        debug!(
            nodes = root.node_count(),
            height = root.height(),
            width,
            canvas_height = height,
            "generated artwork tree"
        );
        root
    }

    /// Build a tree, wrap it in an artwork and optionally color it
    ///
    /// # Errors
    ///
    /// Returns an error if coloring with `sampler` fails
    pub fn generate_artwork<S>(
        &mut self,
        width: u32,
        height: u32,
        sampler: Option<&mut S>,
    ) -> Result<Artwork>
    where
        S: ColorSequence + ?Sized,
    {
        let root = self.generate_tree(width, height);
        let mut artwork = Artwork::new(root, self.config.force_white_nodes, self.rng.random());
        artwork.set_stroke_width(self.config.stroke_width)?;
        if let Some(sampler) = sampler {
            artwork.recolor(sampler)?;
        }
        Ok(artwork)
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn is_leaf(&mut self, depth: u32) -> bool {
        let max_depth = self.config.max_depth;
        depth >= max_depth || self.rng.random::<f64>() < leaf_probability(depth, max_depth)
    }

    fn sample_weight(&mut self) -> u32 {
        let (min, max) = (self.config.min_weight, self.config.max_weight);
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    fn build_node(
        &mut self,
        depth: u32,
        layout_weight: u32,
        orientation: Orientation,
        extent: Extent,
    ) -> ArtworkNode {
        let id = self.allocate_id();
        if self.is_leaf(depth) {
            return ArtworkNode::leaf(id, layout_weight, orientation, extent);
        }

        let max_children = max_children_at_depth(
            depth,
            self.config.max_depth,
            self.config.min_children,
            self.config.max_children,
        );
        let child_count = self
            .rng
            .random_range(self.config.min_children..=max_children);

        let weights: Vec<u32> = (0..child_count).map(|_| self.sample_weight()).collect();
        let shares = apportion(extent.along(orientation), &weights);

        let child_orientation = orientation.perpendicular();
        let children = weights
            .iter()
            .zip(shares)
            .map(|(&weight, share)| {
                self.build_node(
                    depth + 1,
                    weight,
                    child_orientation,
                    extent.with_along(orientation, share),
                )
            })
            .collect();

        ArtworkNode::branch(id, layout_weight, orientation, extent, children)
    }
}

/// Generate and optionally color an artwork in one call
///
/// # Errors
///
/// Returns an error if the configuration is invalid or coloring fails
pub fn generate_artwork<S>(
    config: ArtworkConfig,
    width: u32,
    height: u32,
    seed: u64,
    sampler: Option<&mut S>,
) -> Result<Artwork>
where
    S: ColorSequence + ?Sized,
{
    ArtworkGenerator::new(config, seed)?.generate_artwork(width, height, sampler)
}
