//! Artwork tree nodes with structural children and a presentation flag
//!
//! A node either renders as one flat tile or shows its children laid out
//! along its orientation. Collapsing a node only flips `expanded`; the
//! children stay owned by the node, so presentation changes never touch
//! the generated structure.

use crate::color::hsv::{HUE_LIMIT, HsvColor};
use std::fmt;

/// Stable identity of a node within one generated tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis along which a branch lays out its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side, splitting the width
    Horizontal,
    /// Children stacked, splitting the height
    Vertical,
}

impl Orientation {
    /// The other axis
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Integer size allotted to a node at generation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width in layout units
    pub width: u32,
    /// Height in layout units
    pub height: u32,
}

impl Extent {
    /// Create an extent
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length along the subdivision axis of `orientation`
    pub const fn along(self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Copy with the length along `orientation` replaced
    pub const fn with_along(self, orientation: Orientation, length: u32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(length, self.height),
            Orientation::Vertical => Self::new(self.width, length),
        }
    }
}

/// A node of the artwork tree
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkNode {
    id: NodeId,
    children: Vec<ArtworkNode>,
    layout_weight: u32,
    orientation: Orientation,
    extent: Extent,
    color: HsvColor,
    expanded: bool,
    stroke_width: f64,
}

impl ArtworkNode {
    /// Create a structural leaf, collapsed and white
    pub const fn leaf(
        id: NodeId,
        layout_weight: u32,
        orientation: Orientation,
        extent: Extent,
    ) -> Self {
        Self {
            id,
            children: Vec::new(),
            layout_weight,
            orientation,
            extent,
            color: HsvColor::WHITE,
            expanded: false,
            stroke_width: 0.0,
        }
    }

    /// Create a branch owning `children`, expanded and white
    ///
    /// An empty `children` vector produces a structural leaf.
    pub fn branch(
        id: NodeId,
        layout_weight: u32,
        orientation: Orientation,
        extent: Extent,
        children: Vec<Self>,
    ) -> Self {
        let expanded = !children.is_empty();
        Self {
            id,
            children,
            layout_weight,
            orientation,
            extent,
            color: HsvColor::WHITE,
            expanded,
            stroke_width: 0.0,
        }
    }

    /// Identity of the node within its tree
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Structural children in layout order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Share of the parent's extent relative to the siblings
    pub const fn layout_weight(&self) -> u32 {
        self.layout_weight
    }

    /// Axis the children are laid out along
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size allotted at generation time
    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Current tile color
    pub const fn color(&self) -> HsvColor {
        self.color
    }

    /// Gap left between consecutive children
    pub const fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Whether the node is set to show its children
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the node owns no children
    pub fn is_structural_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the node currently renders as a single flat tile
    pub fn is_leaf_presented(&self) -> bool {
        self.children.is_empty() || !self.expanded
    }

    /// Show or hide the children without touching them
    pub const fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Replace the tile color
    pub const fn set_color(&mut self, color: HsvColor) {
        self.color = color;
    }

    /// Replace the hue channel
    pub const fn set_hue(&mut self, hue: f64) {
        self.color.hue = hue;
    }

    /// Replace the saturation channel
    pub const fn set_saturation(&mut self, saturation: f64) {
        self.color.saturation = saturation;
    }

    /// Replace the brightness channel
    pub const fn set_brightness(&mut self, brightness: f64) {
        self.color.brightness = brightness;
    }

    /// Replace the gap between consecutive children
    pub const fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
    }

    /// Advance the hue by `fraction` of the hue circle, wrapping around
    pub fn rotate_hue(&mut self, fraction: f64) {
        let turns = (self.color.hue / HUE_LIMIT + fraction).rem_euclid(1.0);
        self.color.hue = turns * HUE_LIMIT;
    }

    /// Look up a node of this subtree by identity
    pub fn find(&self, id: NodeId) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Look up a node of this subtree by identity, mutably
    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Self> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path in edges
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
