//! Proportional division of an integer extent among weighted siblings

/// Split `total` units among `weights` proportionally
///
/// Boundaries are placed at `round(total * cumulative_weight / weight_sum)`,
/// so every share is non-negative, no share exceeds `total`, each share is
/// within one unit of its exact proportional value, and the shares sum to
/// exactly `total`. A zero weight sum divides evenly.
pub fn apportion(total: u32, weights: &[u32]) -> Vec<u32> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    let total_wide = u64::from(total);

    let mut shares = Vec::with_capacity(weights.len());
    let mut cumulative: u64 = 0;
    let mut previous_boundary: u64 = 0;

    for (index, &weight) in weights.iter().enumerate() {
        cumulative += if weight_sum == 0 { 1 } else { u64::from(weight) };
        let denominator = if weight_sum == 0 {
            weights.len() as u64
        } else {
            weight_sum
        };

        // Rounded integer division keeps boundaries exact for large extents
        let boundary = if index + 1 == weights.len() {
            total_wide
        } else {
            (total_wide * cumulative * 2 + denominator) / (denominator * 2)
        };

        shares.push((boundary - previous_boundary) as u32);
        previous_boundary = boundary;
    }

    shares
}
