//! Tests for recoloring, white locking and presentation edits on artworks

#[cfg(test)]
mod tests {
    use modern_art::color::hsv::{Channel, HsvColor};
    use modern_art::color::sampler::ColorSequence;
    use modern_art::tree::node::{ArtworkNode, Extent, NodeId, Orientation};
    use modern_art::tree::traversal::{breadth_first, levels};
    use modern_art::{ArtError, Artwork, Result};
    use std::cell::Cell;
    use std::rc::Rc;

    // Hands out hues 0, 10, 20, ... so draw order is visible in the tree
    struct Counting {
        drawn: u32,
    }

    impl ColorSequence for Counting {
        fn next_color(&mut self) -> Result<HsvColor> {
            let hue = f64::from(self.drawn * 10);
            self.drawn += 1;
            Ok(HsvColor::new(hue, 0.5, 0.5))
        }
    }

    struct Failing;

    impl ColorSequence for Failing {
        fn next_color(&mut self) -> Result<HsvColor> {
            Err(ArtError::ChannelOutOfRange {
                channel: Channel::Hue,
                value: 400.0,
                min: 0.0,
                max: 360.0,
            })
        }
    }

    //   0 (horizontal, 100x50)
    //   +-- 1 (weight 2)
    //   +-- 2 (weight 3, vertical)
    //       +-- 3 (weight 2)
    //       +-- 4 (weight 3)
    fn sample_tree() -> ArtworkNode {
        let inner = ArtworkNode::branch(
            NodeId(2),
            3,
            Orientation::Vertical,
            Extent::new(60, 50),
            vec![
                ArtworkNode::leaf(NodeId(3), 2, Orientation::Horizontal, Extent::new(60, 20)),
                ArtworkNode::leaf(NodeId(4), 3, Orientation::Horizontal, Extent::new(60, 30)),
            ],
        );
        ArtworkNode::branch(
            NodeId(0),
            1,
            Orientation::Horizontal,
            Extent::new(100, 50),
            vec![
                ArtworkNode::leaf(NodeId(1), 2, Orientation::Vertical, Extent::new(40, 50)),
                inner,
            ],
        )
    }

    fn sample_artwork(force_white_nodes: bool) -> Artwork {
        Artwork::new(sample_tree(), force_white_nodes, 17)
    }

    fn tile_ids(artwork: &Artwork) -> Vec<u32> {
        artwork.tiles().iter().map(|tile| tile.node.0).collect()
    }

    // Tests plain recoloring draws one color per node in breadth-first order
    // Verified by recoloring depth-first
    #[test]
    fn test_recolor_breadth_first_order() {
        let mut artwork = sample_artwork(false);
        let mut sequence = Counting { drawn: 0 };
        artwork.recolor(&mut sequence).expect("Recolor failed");

        let hues: Vec<f64> = breadth_first(artwork.root())
            .map(|node| node.color().hue)
            .collect();
        assert_eq!(hues, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert!(artwork.locked_white_nodes().is_empty());
    }

    // Tests force-white recoloring leaves exactly one locked white node per level
    // Verified by choosing the white node before coloring the level
    #[test]
    fn test_recolor_force_white_one_per_level() {
        for seed in 0..20 {
            let mut artwork = Artwork::new(sample_tree(), true, seed);
            artwork
                .recolor(&mut Counting { drawn: 0 })
                .expect("Recolor failed");

            for level in levels(artwork.root()) {
                let white: Vec<_> = level
                    .iter()
                    .filter(|node| node.color() == HsvColor::WHITE)
                    .collect();
                assert_eq!(white.len(), 1, "seed {seed}");
                assert!(white.iter().all(|node| artwork.is_locked(node.id())));
            }
            assert_eq!(artwork.locked_white_nodes().len(), 3);
        }
    }

    // Tests a recolor replaces the previous locked set
    // Verified by accumulating locked nodes across recolors
    #[test]
    fn test_recolor_resets_locked_nodes() {
        let mut artwork = sample_artwork(true);
        let mut sequence = Counting { drawn: 0 };
        artwork.recolor(&mut sequence).expect("Recolor failed");
        assert_eq!(artwork.locked_white_nodes().len(), 3);

        artwork.set_force_white_nodes(false);
        artwork.recolor(&mut sequence).expect("Recolor failed");
        assert!(artwork.locked_white_nodes().is_empty());
        assert!(breadth_first(artwork.root()).all(|node| !node.color().is_white()));
    }

    // Tests sampler failures surface instead of being clamped
    // Verified by skipping nodes whose color fails
    #[test]
    fn test_recolor_propagates_sampler_errors() {
        for force_white in [false, true] {
            let mut artwork = sample_artwork(force_white);
            let result = artwork.recolor(&mut Failing);
            assert!(matches!(result, Err(ArtError::ChannelOutOfRange { .. })));
        }
    }

    // Tests saturation and brightness sweeps skip locked white nodes
    // Verified by applying sweeps to every node
    #[test]
    fn test_sweeps_preserve_locked_white_nodes() {
        let mut artwork = sample_artwork(true);
        artwork
            .recolor(&mut Counting { drawn: 0 })
            .expect("Recolor failed");

        artwork.set_saturation(0.9).expect("Valid saturation rejected");
        artwork.set_brightness(0.2).expect("Valid brightness rejected");

        for node in breadth_first(artwork.root()) {
            if artwork.is_locked(node.id()) {
                assert_eq!(node.color(), HsvColor::WHITE);
            } else {
                assert!((node.color().saturation - 0.9).abs() < f64::EPSILON);
                assert!((node.color().brightness - 0.2).abs() < f64::EPSILON);
            }
        }

        assert!(artwork.set_saturation(1.1).is_err());
        assert!(artwork.set_brightness(-0.1).is_err());
        assert!(artwork.set_brightness(f64::NAN).is_err());
    }

    // Tests depth limits collapse at the limit and expand above it
    // Verified by collapsing only nodes strictly below the limit
    #[test]
    fn test_set_depth_limit_presentation() {
        let mut artwork = sample_artwork(false);
        assert_eq!(tile_ids(&artwork), vec![1, 3, 4]);

        artwork.set_depth_limit(0);
        assert_eq!(tile_ids(&artwork), vec![0]);

        artwork.set_depth_limit(1);
        assert_eq!(tile_ids(&artwork), vec![1, 2]);

        artwork.set_depth_limit(-3);
        assert_eq!(tile_ids(&artwork), vec![0]);

        artwork.set_depth_limit(10);
        assert_eq!(tile_ids(&artwork), vec![1, 3, 4]);
        assert_eq!(artwork.root().node_count(), 5);
    }

    // Tests repeated depth limits are idempotent and leave colors untouched
    // Verified by toggling expansion instead of assigning it
    #[test]
    fn test_set_depth_limit_is_idempotent_and_reversible() {
        let mut artwork = sample_artwork(false);
        artwork
            .recolor(&mut Counting { drawn: 0 })
            .expect("Recolor failed");
        let original = artwork.root().clone();

        artwork.set_depth_limit(1);
        let limited = artwork.root().clone();
        artwork.set_depth_limit(1);
        assert_eq!(artwork.root(), &limited);

        artwork.set_depth_limit(5);
        assert_eq!(artwork.root(), &original);
    }

    // Tests minimum tile size collapses branches too small on either side
    // Verified by comparing only widths
    #[test]
    fn test_set_min_tile_size() {
        let mut artwork = sample_artwork(false);

        artwork.set_min_tile_size(55.0).expect("Valid size rejected");
        assert_eq!(tile_ids(&artwork), vec![0]);

        artwork.set_min_tile_size(50.0).expect("Valid size rejected");
        assert_eq!(tile_ids(&artwork), vec![1, 3, 4]);

        assert!(artwork.set_min_tile_size(-1.0).is_err());
    }

    // Tests minimum tile size measures tiles after stroke gaps are removed
    // Verified by comparing against the generated extent
    #[test]
    fn test_set_min_tile_size_accounts_for_strokes() {
        let mut artwork = sample_artwork(false);

        // 100 - 24 leaves 76 to share 2:3, so node 2 is 45.6 wide
        artwork.set_stroke_width(24.0).expect("Valid stroke rejected");
        artwork.set_min_tile_size(50.0).expect("Valid size rejected");
        assert_eq!(tile_ids(&artwork), vec![1, 2]);

        artwork.set_min_tile_size(45.0).expect("Valid size rejected");
        assert_eq!(tile_ids(&artwork), vec![1, 3, 4]);

        artwork.set_stroke_width(0.0).expect("Valid stroke rejected");
        artwork.set_min_tile_size(50.0).expect("Valid size rejected");
        assert_eq!(tile_ids(&artwork), vec![1, 3, 4]);
    }

    // Tests stroke width reaches every node and rejects negatives
    // Verified by setting the root stroke only
    #[test]
    fn test_set_stroke_width() {
        let mut artwork = sample_artwork(false);
        artwork.set_stroke_width(4.0).expect("Valid stroke rejected");

        assert!(
            breadth_first(artwork.root()).all(|node| (node.stroke_width() - 4.0).abs() < f64::EPSILON)
        );
        assert!(artwork.set_stroke_width(-0.5).is_err());
        assert!(artwork.set_stroke_width(f64::INFINITY).is_err());
    }

    // Tests click dispatch by identity and by point
    // Verified by dispatching clicks to the root
    #[test]
    fn test_click_handlers() {
        let mut artwork = sample_artwork(false);
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        artwork.register_click_handler(move |node| {
            counter.set(counter.get() + 1);
            node.set_hue(200.0);
        });

        artwork.click(NodeId(3)).expect("Known node rejected");
        let hue = artwork.node(NodeId(3)).map(|node| node.color().hue);
        assert_eq!(hue, Some(200.0));

        // Node 4 covers x in [40, 100), y in [20, 50)
        let clicked = artwork.click_at(70.0, 35.0).expect("Click failed");
        assert_eq!(clicked, Some(NodeId(4)));
        assert_eq!(artwork.click_at(500.0, 35.0).expect("Click failed"), None);

        assert!(matches!(
            artwork.click(NodeId(99)),
            Err(ArtError::UnknownNode { id: NodeId(99) })
        ));
        assert_eq!(clicks.get(), 2);
    }

    // Tests clicks without a handler are accepted and change nothing
    // Verified by requiring a handler
    #[test]
    fn test_click_without_handler() {
        let mut artwork = sample_artwork(false);
        let before = artwork.root().clone();

        assert!(artwork.click(NodeId(1)).is_ok());
        assert_eq!(artwork.root(), &before);
        assert!(!artwork.force_white_nodes());
        assert_eq!(artwork.size(), Extent::new(100, 50));
    }
}
