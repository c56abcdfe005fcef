use crate::frame::{CircleCandidate, ImageCenter};

use super::config::{CenterFilterConfig, ProximityMode};

/// Returns true if the candidate's center is close enough to the image center.
///
/// In `PerAxis` mode the x and y offsets are each compared against the
/// tolerance, so the accepted region is a square, not a disc. Both
/// comparisons are strict.
pub fn is_near_center(
    candidate: &CircleCandidate,
    center: ImageCenter,
    config: &CenterFilterConfig,
) -> bool {
    let dx = (center.x as f32 - candidate.x).abs();
    let dy = (center.y as f32 - candidate.y).abs();
    match config.mode {
        ProximityMode::PerAxis => dx < config.tolerance && dy < config.tolerance,
        ProximityMode::Radial => dx * dx + dy * dy < config.tolerance * config.tolerance,
    }
}

/// Keep only candidates centered near the image center, preserving order.
pub fn filter_near_center(
    candidates: &[CircleCandidate],
    center: ImageCenter,
    config: &CenterFilterConfig,
) -> Vec<CircleCandidate> {
    candidates
        .iter()
        .filter(|c| is_near_center(c, center, config))
        .copied()
        .collect()
}
