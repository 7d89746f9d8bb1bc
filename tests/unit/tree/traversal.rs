//! Tests for breadth-first and per-level tree walks

#[cfg(test)]
mod tests {
    use modern_art::ArtError;
    use modern_art::tree::node::{ArtworkNode, Extent, NodeId, Orientation};
    use modern_art::tree::traversal::{
        breadth_first, for_each_breadth_first_mut, for_each_level_mut, levels,
        try_for_each_breadth_first_mut, try_for_each_level_mut,
    };

    fn leaf(id: u32) -> ArtworkNode {
        ArtworkNode::leaf(NodeId(id), 1, Orientation::Horizontal, Extent::new(10, 10))
    }

    fn branch(id: u32, children: Vec<ArtworkNode>) -> ArtworkNode {
        ArtworkNode::branch(
            NodeId(id),
            1,
            Orientation::Vertical,
            Extent::new(10, 10),
            children,
        )
    }

    //        0
    //      / | \
    //     1  2  3
    //    / \     \
    //   4   5     6
    //             |
    //             7
    fn sample_tree() -> ArtworkNode {
        branch(
            0,
            vec![
                branch(1, vec![leaf(4), leaf(5)]),
                leaf(2),
                branch(3, vec![branch(6, vec![leaf(7)])]),
            ],
        )
    }

    fn ids<'a>(nodes: impl IntoIterator<Item = &'a ArtworkNode>) -> Vec<u32> {
        nodes.into_iter().map(|node| node.id().0).collect()
    }

    // Tests breadth-first visits each node once, level by level, left to right
    // Verified by switching the queue to a stack
    #[test]
    fn test_breadth_first_order() {
        let root = sample_tree();
        assert_eq!(ids(breadth_first(&root)), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    // Tests levels group nodes by depth and stop after the deepest level
    // Verified by yielding a trailing empty level
    #[test]
    fn test_levels_group_by_depth() {
        let root = sample_tree();
        let grouped: Vec<Vec<u32>> = levels(&root).map(ids).collect();

        assert_eq!(
            grouped,
            vec![vec![0], vec![1, 2, 3], vec![4, 5, 6], vec![7]]
        );
        assert_eq!(levels(&leaf(9)).count(), 1);
    }

    // Tests level walks include collapsed subtrees, since collapsing only hides them
    // Verified by skipping children of collapsed nodes
    #[test]
    fn test_walks_ignore_presentation() {
        let mut root = sample_tree();
        root.set_expanded(false);

        assert_eq!(breadth_first(&root).count(), 8);
        assert_eq!(levels(&root).count(), 4);
    }

    // Tests the mutable breadth-first walk visits in the same order as the iterator
    // Verified by visiting children before their parent
    #[test]
    fn test_for_each_breadth_first_mut_order() {
        let mut root = sample_tree();
        let mut visited = Vec::new();
        for_each_breadth_first_mut(&mut root, |node| {
            visited.push(node.id().0);
            node.set_stroke_width(2.0);
        });

        assert_eq!(visited, ids(breadth_first(&root)));
        assert!(
            breadth_first(&root).all(|node| (node.stroke_width() - 2.0).abs() < f64::EPSILON)
        );
    }

    // Tests the fallible walk stops at the first error
    // Verified by continuing after an error
    #[test]
    fn test_try_for_each_breadth_first_mut_stops_on_error() {
        let mut root = sample_tree();
        let mut visited = Vec::new();
        let result = try_for_each_breadth_first_mut(&mut root, |node| {
            visited.push(node.id().0);
            if node.id() == NodeId(2) {
                return Err(ArtError::UnknownNode { id: node.id() });
            }
            Ok(())
        });

        assert!(matches!(result, Err(ArtError::UnknownNode { id: NodeId(2) })));
        assert_eq!(visited, vec![0, 1, 2]);
    }

    // Tests mutable level walks report depths and whole levels
    // Verified by numbering depths from one
    #[test]
    fn test_for_each_level_mut_reports_depths() {
        let mut root = sample_tree();
        let mut seen = Vec::new();
        for_each_level_mut(&mut root, |depth, level| {
            seen.push((depth, level.iter().map(|node| node.id().0).collect::<Vec<_>>()));
            for node in level.iter_mut() {
                node.set_brightness(depth as f64 / 10.0);
            }
        });

        assert_eq!(
            seen,
            vec![
                (0, vec![0]),
                (1, vec![1, 2, 3]),
                (2, vec![4, 5, 6]),
                (3, vec![7]),
            ]
        );
        let brightness = root.find(NodeId(7)).map(|node| node.color().brightness);
        assert_eq!(brightness, Some(0.3));
    }

    // Tests the fallible level walk propagates visitor errors
    // Verified by ignoring the visitor result
    #[test]
    fn test_try_for_each_level_mut_propagates_errors() {
        let mut root = sample_tree();
        let mut deepest = 0;
        let result = try_for_each_level_mut(&mut root, |depth, _level| {
            deepest = depth;
            if depth == 2 {
                return Err(ArtError::EmptyLevel { depth });
            }
            Ok(())
        });

        assert!(matches!(result, Err(ArtError::EmptyLevel { depth: 2 })));
        assert_eq!(deepest, 2);
    }
}
