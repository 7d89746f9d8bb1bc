//! Tile rectangles of the presented tree
//!
//! A presented branch divides its rectangle along its orientation. Children
//! get shares proportional to their layout weights, after the stroke gaps
//! between consecutive children are taken out.

use crate::color::hsv::HsvColor;
use crate::tree::node::{ArtworkNode, NodeId, Orientation};
use std::collections::HashMap;

/// Axis-aligned rectangle in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal size
    pub width: f64,
    /// Vertical size
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside, counting the top and left edges only
    pub const fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Whether both sides reach `size`
    pub const fn fits(&self, size: f64) -> bool {
        self.width >= size && self.height >= size
    }

    /// Area covered
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    const fn length_along(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    // Sub-rectangle starting `offset` along the axis with `length` along it
    const fn slice_along(&self, orientation: Orientation, offset: f64, length: f64) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.x + offset, self.y, length, self.height),
            Orientation::Vertical => Self::new(self.x, self.y + offset, self.width, length),
        }
    }
}

/// A flat colored rectangle standing for one presented node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Node rendered by the tile
    pub node: NodeId,
    /// Area covered by the tile
    pub rect: Rect,
    /// Fill color
    pub color: HsvColor,
}

/// Lay out every presented tile of `root` inside `bounds`
///
/// Tiles come out in depth-first, left-to-right order and never overlap.
pub fn presented_tiles(root: &ArtworkNode, bounds: Rect) -> Vec<Tile> {
    let mut tiles = Vec::new();
    layout_node(root, bounds, &mut tiles);
    tiles
}

fn layout_node(node: &ArtworkNode, rect: Rect, tiles: &mut Vec<Tile>) {
    if node.is_leaf_presented() {
        tiles.push(Tile {
            node: node.id(),
            rect,
            color: node.color(),
        });
        return;
    }

    for (child, child_rect) in node.children().iter().zip(child_rects(node, rect)) {
        layout_node(child, child_rect, tiles);
    }
}

/// Rectangle every node of `root` covers when fully expanded
///
/// A node's rectangle depends only on its ancestors, so collapsing or
/// expanding nodes never moves it.
pub fn node_rects(root: &ArtworkNode, bounds: Rect) -> HashMap<NodeId, Rect> {
    let mut rects = HashMap::with_capacity(root.node_count());
    let mut stack = vec![(root, bounds)];
    while let Some((node, rect)) = stack.pop() {
        rects.insert(node.id(), rect);
        stack.extend(node.children().iter().zip(child_rects(node, rect)));
    }
    rects
}

// Split `rect` among the children of `node` along its orientation
fn child_rects(node: &ArtworkNode, rect: Rect) -> Vec<Rect> {
    let children = node.children();
    let orientation = node.orientation();
    let length = rect.length_along(orientation);
    let gap_count = children.len().saturating_sub(1) as f64;
    // Strokes wider than the rectangle shrink until the gaps fit inside it
    let stroke = if gap_count > 0.0 {
        node.stroke_width().min(length / gap_count)
    } else {
        0.0
    };
    let available = (length - stroke * gap_count).max(0.0);

    let total_weight: f64 = children
        .iter()
        .map(|child| f64::from(child.layout_weight()))
        .sum();

    let mut offset = 0.0;
    children
        .iter()
        .map(|child| {
            let share = if total_weight > 0.0 {
                f64::from(child.layout_weight()) / total_weight
            } else {
                1.0 / children.len() as f64
            };
            let child_length = available * share;
            let slice = rect.slice_along(orientation, offset, child_length);
            offset += child_length + stroke;
            slice
        })
        .collect()
}

/// Find the tile covering the point `(x, y)`
pub fn tile_at(tiles: &[Tile], x: f64, y: f64) -> Option<&Tile> {
    tiles.iter().find(|tile| tile.rect.contains(x, y))
}
