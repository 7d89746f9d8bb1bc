//! Level-order traversal of artwork trees
//!
//! Read-only walks are exposed as iterators. Mutating walks take a visitor,
//! because a node's children cannot be queued while the node itself is
//! lent out mutably. Both kinds visit siblings left to right and never
//! reorder nodes during a walk.

use crate::io::error::Result;
use crate::tree::node::ArtworkNode;
use std::collections::VecDeque;

/// Breadth-first iterator over a subtree, root first
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a ArtworkNode>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a ArtworkNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children());
        Some(node)
    }
}

/// Visit every node of `root`'s subtree exactly once, level by level
pub fn breadth_first(root: &ArtworkNode) -> BreadthFirst<'_> {
    BreadthFirst {
        queue: VecDeque::from([root]),
    }
}

/// Lazy iterator over tree levels; level `k` holds every node at depth `k`
pub struct Levels<'a> {
    next_level: Vec<&'a ArtworkNode>,
}

impl<'a> Iterator for Levels<'a> {
    type Item = Vec<&'a ArtworkNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_level.is_empty() {
            return None;
        }
        let current = std::mem::take(&mut self.next_level);
        self.next_level = current
            .iter()
            .flat_map(|node| node.children().iter())
            .collect();
        Some(current)
    }
}

/// Group the nodes of `root`'s subtree by depth, starting at the root
pub fn levels(root: &ArtworkNode) -> Levels<'_> {
    Levels {
        next_level: vec![root],
    }
}

/// Apply `visit` to every node in breadth-first order
pub fn for_each_breadth_first_mut<F>(root: &mut ArtworkNode, mut visit: F)
where
    F: FnMut(&mut ArtworkNode),
{
    let mut queue: VecDeque<&mut ArtworkNode> = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.children_mut().iter_mut());
    }
}

/// Apply a fallible `visit` to every node in breadth-first order
///
/// # Errors
///
/// Stops at and returns the first error produced by `visit`
pub fn try_for_each_breadth_first_mut<F>(root: &mut ArtworkNode, mut visit: F) -> Result<()>
where
    F: FnMut(&mut ArtworkNode) -> Result<()>,
{
    let mut queue: VecDeque<&mut ArtworkNode> = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        visit(node)?;
        queue.extend(node.children_mut().iter_mut());
    }
    Ok(())
}

/// Hand each level of the tree to `visit` together with its depth
///
/// # Errors
///
/// Stops at and returns the first error produced by `visit`
pub fn try_for_each_level_mut<F>(root: &mut ArtworkNode, mut visit: F) -> Result<()>
where
    F: FnMut(usize, &mut [&mut ArtworkNode]) -> Result<()>,
{
    let mut level: Vec<&mut ArtworkNode> = vec![root];
    let mut depth = 0;
    while !level.is_empty() {
        visit(depth, level.as_mut_slice())?;
        level = level
            .into_iter()
            .flat_map(|node| node.children_mut().iter_mut())
            .collect();
        depth += 1;
    }
    Ok(())
}

/// Hand each level of the tree to `visit` together with its depth
pub fn for_each_level_mut<F>(root: &mut ArtworkNode, mut visit: F)
where
    F: FnMut(usize, &mut [&mut ArtworkNode]),
{
    let mut level: Vec<&mut ArtworkNode> = vec![root];
    let mut depth = 0;
    while !level.is_empty() {
        visit(depth, level.as_mut_slice());
        level = level
            .into_iter()
            .flat_map(|node| node.children_mut().iter_mut())
            .collect();
        depth += 1;
    }
}
