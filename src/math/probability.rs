//! Depth-dependent probability curves driving tree generation

/// Golden ratio conjugate, `(sqrt(5) - 1) / 2`
///
/// Repeatedly adding it modulo 1 yields a low-discrepancy sequence: any
/// short run of the sequence spreads evenly over the unit interval.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// Probability that a node at `depth` terminates as a structural leaf
///
/// Follows `1 - sqrt((max_depth - depth) / max_depth)`: zero at the root,
/// increasing monotonically, and exactly one at `max_depth`. Depths at or
/// beyond the maximum (including a zero maximum) always terminate.
pub fn leaf_probability(depth: u32, max_depth: u32) -> f64 {
    if depth >= max_depth {
        return 1.0;
    }
    let remaining = f64::from(max_depth - depth) / f64::from(max_depth);
    1.0 - remaining.sqrt()
}

/// Largest number of children a branch at `depth` may receive
///
/// The extra fan-out above `min_children` shrinks linearly with depth:
/// `min + round((1 - depth / max_depth) * (max - min))`.
pub fn max_children_at_depth(
    depth: u32,
    max_depth: u32,
    min_children: u32,
    max_children: u32,
) -> u32 {
    if max_depth == 0 || depth >= max_depth {
        return min_children;
    }
    let spread = f64::from(max_children.saturating_sub(min_children));
    let depth_progress = f64::from(depth) / f64::from(max_depth);
    let extra = ((1.0 - depth_progress) * spread).round() as u32;
    min_children + extra
}

/// Node count of the largest tree the fan-out bounds allow
///
/// Every level is assumed full, each branch taking its largest child count.
/// Saturates at `u64::MAX`.
pub fn max_node_count(max_depth: u32, min_children: u32, max_children: u32) -> u64 {
    let mut level_width: u64 = 1;
    let mut total: u64 = 1;
    for depth in 0..max_depth {
        let fan_out = max_children_at_depth(depth, max_depth, min_children, max_children);
        level_width = level_width.saturating_mul(u64::from(fan_out));
        total = total.saturating_add(level_width);
    }
    total
}
