//! Artwork composition owning a generated tree
//!
//! All global edits (recolor, depth limit, stroke, saturation, brightness)
//! walk the tree level by level. None of them restructure it: collapsing a
//! subtree only hides it, so a later edit can show it again unchanged.

use crate::color::hsv::HsvColor;
use crate::color::sampler::ColorSequence;
use crate::io::error::{ArtError, Result, ensure_unit_interval, invalid_parameter};
use crate::spatial::layout::{Rect, Tile, node_rects, presented_tiles, tile_at};
use crate::tree::node::{ArtworkNode, Extent, NodeId};
use crate::tree::traversal::{
    for_each_breadth_first_mut, for_each_level_mut, try_for_each_breadth_first_mut,
    try_for_each_level_mut,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::trace;

/// Callback invoked with the node behind a clicked tile
pub type ClickHandler = Box<dyn FnMut(&mut ArtworkNode)>;

/// A composition of colored tiles backed by one artwork tree
///
/// In force-white mode every recolor leaves exactly one pure white tile per
/// tree level. Those tiles are locked: saturation and brightness sweeps skip
/// them until the next recolor.
pub struct Artwork {
    root: ArtworkNode,
    force_white_nodes: bool,
    locked_white_nodes: HashSet<NodeId>,
    rng: StdRng,
    click_handler: Option<ClickHandler>,
}

impl Artwork {
    /// Wrap a tree; `seed` drives white tile selection
    pub fn new(root: ArtworkNode, force_white_nodes: bool, seed: u64) -> Self {
        Self {
            root,
            force_white_nodes,
            locked_white_nodes: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
            click_handler: None,
        }
    }

    /// Root of the tree
    pub const fn root(&self) -> &ArtworkNode {
        &self.root
    }

    /// Size the tree was generated for
    pub const fn size(&self) -> Extent {
        self.root.extent()
    }

    /// Look up a node by identity
    pub fn node(&self, id: NodeId) -> Option<&ArtworkNode> {
        self.root.find(id)
    }

    /// Whether recoloring keeps a locked white tile per level
    pub const fn force_white_nodes(&self) -> bool {
        self.force_white_nodes
    }

    /// Switch force-white mode; takes effect on the next recolor
    pub const fn set_force_white_nodes(&mut self, force_white_nodes: bool) {
        self.force_white_nodes = force_white_nodes;
    }

    /// Nodes excluded from saturation and brightness edits
    pub const fn locked_white_nodes(&self) -> &HashSet<NodeId> {
        &self.locked_white_nodes
    }

    /// Whether `id` is a locked white tile
    pub fn is_locked(&self, id: NodeId) -> bool {
        self.locked_white_nodes.contains(&id)
    }

    /// Assign a fresh color from `sampler` to every node
    ///
    /// Colors are drawn in breadth-first order. In force-white mode each
    /// level is colored in turn and then one of its nodes, chosen uniformly,
    /// is overridden with pure white and locked.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampler produces an out-of-range channel or a
    /// level turns out to be empty
    pub fn recolor<S>(&mut self, sampler: &mut S) -> Result<()>
    where
        S: ColorSequence + ?Sized,
    {
        self.locked_white_nodes.clear();

        if !self.force_white_nodes {
            return try_for_each_breadth_first_mut(&mut self.root, |node| {
                node.set_color(sampler.next_color()?);
                Ok(())
            });
        }

        let rng = &mut self.rng;
        let locked = &mut self.locked_white_nodes;
        try_for_each_level_mut(&mut self.root, |depth, level| {
            for node in level.iter_mut() {
                node.set_color(sampler.next_color()?);
            }
            let width = level.len();
            if width == 0 {
                return Err(ArtError::EmptyLevel { depth });
            }
            let index = rng.random_range(0..width);
            let white = level.get_mut(index).ok_or(ArtError::EmptyLevel { depth })?;
            white.set_color(HsvColor::WHITE);
            let white_id = white.id();
            locked.insert(white_id);
            trace!(depth, nodes = width, white = %white_id, "locked white tile");
            Ok(())
        })
    }

    /// Collapse every node at depth `depth_limit` or deeper
    ///
    /// Nodes above the limit are expanded when they have children. The
    /// resulting presentation depends only on `depth_limit`, so repeated or
    /// alternating calls are reversible. A limit of zero or less shows the
    /// root as a single tile.
    pub fn set_depth_limit(&mut self, depth_limit: i32) {
        let limit = usize::try_from(depth_limit).unwrap_or(0);
        for_each_level_mut(&mut self.root, |depth, level| {
            for node in level.iter_mut() {
                let expanded = depth < limit && !node.is_structural_leaf();
                node.set_expanded(expanded);
            }
        });
    }

    /// Collapse every branch whose laid-out rectangle is under `size` on either side
    ///
    /// Rectangles are measured after the stroke gaps of their ancestors are
    /// taken out, so changing the stroke width changes which branches fit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is negative or not finite
    pub fn set_min_tile_size(&mut self, size: f64) -> Result<()> {
        if !size.is_finite() || size < 0.0 {
            return Err(invalid_parameter(
                "min_tile_size",
                &size,
                &"must be a finite non-negative number",
            ));
        }
        let rects = node_rects(&self.root, self.bounds());
        for_each_breadth_first_mut(&mut self.root, |node| {
            let fits = rects.get(&node.id()).is_some_and(|rect| rect.fits(size));
            node.set_expanded(fits && !node.is_structural_leaf());
        });
        Ok(())
    }

    /// Set the gap between sibling tiles on every node
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `stroke_width` is negative or not finite
    pub fn set_stroke_width(&mut self, stroke_width: f64) -> Result<()> {
        if !stroke_width.is_finite() || stroke_width < 0.0 {
            return Err(invalid_parameter(
                "stroke_width",
                &stroke_width,
                &"must be a finite non-negative number",
            ));
        }
        for_each_breadth_first_mut(&mut self.root, |node| {
            node.set_stroke_width(stroke_width);
        });
        Ok(())
    }

    /// Set saturation on every node except the locked white tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `saturation` lies outside `[0, 1]`
    pub fn set_saturation(&mut self, saturation: f64) -> Result<()> {
        let saturation = ensure_unit_interval("saturation", saturation)?;
        let locked = &self.locked_white_nodes;
        for_each_breadth_first_mut(&mut self.root, |node| {
            if !locked.contains(&node.id()) {
                node.set_saturation(saturation);
            }
        });
        Ok(())
    }

    /// Set brightness on every node except the locked white tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `brightness` lies outside `[0, 1]`
    pub fn set_brightness(&mut self, brightness: f64) -> Result<()> {
        let brightness = ensure_unit_interval("brightness", brightness)?;
        let locked = &self.locked_white_nodes;
        for_each_breadth_first_mut(&mut self.root, |node| {
            if !locked.contains(&node.id()) {
                node.set_brightness(brightness);
            }
        });
        Ok(())
    }

    /// Tiles currently presented, laid out over the generated size
    pub fn tiles(&self) -> Vec<Tile> {
        presented_tiles(&self.root, self.bounds())
    }

    fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(0.0, 0.0, f64::from(size.width), f64::from(size.height))
    }

    /// Install the callback run when a tile is clicked, replacing any previous one
    pub fn register_click_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ArtworkNode) + 'static,
    {
        self.click_handler = Some(Box::new(handler));
    }

    /// Run the click handler on the node with identity `id`
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if no such node exists
    pub fn click(&mut self, id: NodeId) -> Result<()> {
        let node = self
            .root
            .find_mut(id)
            .ok_or(ArtError::UnknownNode { id })?;
        if let Some(handler) = self.click_handler.as_mut() {
            handler(node);
        }
        Ok(())
    }

    /// Click whichever presented tile covers the point `(x, y)`
    ///
    /// Returns the identity of the clicked node, or `None` when the point
    /// falls on a stroke gap or outside the artwork.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if the layout refers to a missing node
    pub fn click_at(&mut self, x: f64, y: f64) -> Result<Option<NodeId>> {
        let tiles = self.tiles();
        let Some(id) = tile_at(&tiles, x, y).map(|tile| tile.node) else {
            return Ok(None);
        };
        self.click(id)?;
        Ok(Some(id))
    }
}
