//! Group statistics over inch-space shots.
//!
//! Every function here is pure: no hidden state, no I/O, and edge cases
//! resolve to documented default values instead of errors so render paths
//! can call them unguarded.

use serde::{Deserialize, Serialize};

use crate::shot::InchShot;

/// Inches subtended by one minute of angle at 100 yards.
pub const MOA_INCHES_PER_100YD: f64 = 1.047;

/// Computed statistics for one shot group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    pub shot_count: usize,
    /// Group centroid, inches relative to POA.
    pub center_x_in: f64,
    pub center_y_in: f64,
    /// Largest distance between any two shots, inches.
    pub extreme_spread_in: f64,
    /// Average distance from shot to centroid, inches.
    pub mean_radius_in: f64,
    /// Extreme spread as an angle at the firing distance.
    pub group_size_moa: f64,
}

/// Componentwise arithmetic mean of the shot coordinates. `(0, 0)` for an
/// empty slice.
pub fn group_center(shots: &[InchShot]) -> (f64, f64) {
    if shots.is_empty() {
        return (0.0, 0.0);
    }
    let n = shots.len() as f64;
    let (sx, sy) = shots
        .iter()
        .fold((0.0, 0.0), |(sx, sy), s| (sx + s.x_in, sy + s.y_in));
    (sx / n, sy / n)
}

/// Extreme spread: the farthest-apart pair of shots.
///
/// Exhaustive scan over all unordered pairs. This is the conventional
/// marksmanship measurement, which is *not* the minimum-enclosing-circle
/// diameter; a hull-based algorithm would report different numbers for
/// non-trivial groups. Zero for fewer than two shots.
pub fn extreme_spread(shots: &[InchShot]) -> f64 {
    let mut max_dist = 0.0f64;
    for (i, a) in shots.iter().enumerate() {
        for b in &shots[i + 1..] {
            max_dist = max_dist.max(a.distance_to(b.x_in, b.y_in));
        }
    }
    max_dist
}

/// Average distance from each shot to `center`. Zero for an empty slice.
pub fn mean_radius(shots: &[InchShot], center: (f64, f64)) -> f64 {
    if shots.is_empty() {
        return 0.0;
    }
    let total: f64 = shots.iter().map(|s| s.distance_to(center.0, center.1)).sum();
    total / shots.len() as f64
}

/// Linear group size at a distance, expressed as minutes of angle.
///
/// Returns 0 for non-positive distances instead of dividing by zero.
pub fn inches_to_moa(inches: f64, distance_yards: f64) -> f64 {
    if distance_yards <= 0.0 {
        return 0.0;
    }
    inches * 100.0 / (distance_yards * MOA_INCHES_PER_100YD)
}

/// Inverse of [`inches_to_moa`], with the same zero-distance guard.
pub fn moa_to_inches(moa: f64, distance_yards: f64) -> f64 {
    if distance_yards <= 0.0 {
        return 0.0;
    }
    moa * distance_yards * MOA_INCHES_PER_100YD / 100.0
}

/// Compute the full statistics block for a group at a firing distance.
pub fn compute_group_metrics(shots: &[InchShot], distance_yards: f64) -> GroupMetrics {
    let center = group_center(shots);
    let spread = extreme_spread(shots);
    GroupMetrics {
        shot_count: shots.len(),
        center_x_in: center.0,
        center_y_in: center.1,
        extreme_spread_in: spread,
        mean_radius_in: mean_radius(shots, center),
        group_size_moa: inches_to_moa(spread, distance_yards),
    }
}
