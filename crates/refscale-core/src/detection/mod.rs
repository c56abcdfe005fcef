pub mod config;
pub mod edges;
pub mod hough;
pub mod median;
pub mod proximity;
pub mod smooth;

pub use config::{CenterFilterConfig, DetectionConfig, HoughParams, ProximityMode};
pub use hough::hough_circles;
pub use proximity::{filter_near_center, is_near_center};

use tracing::info;

use crate::error::{RefscaleError, Result};
use crate::frame::{CircleCandidate, Frame, ImageCenter};

use median::median_blur;

/// Result of one detection pass over a photo.
#[derive(Clone, Debug)]
pub struct DetectionReport {
    pub width: u32,
    pub height: u32,
    pub center: ImageCenter,
    /// Every circle the transform found, rounded to whole pixels.
    pub candidates: Vec<CircleCandidate>,
    /// Candidates whose center passed the proximity filter.
    pub kept: Vec<CircleCandidate>,
}

/// Detect circles in a grayscale frame and keep the ones near its center.
///
/// Pipeline: median blur -> gradient Hough transform -> round to whole
/// pixels -> center proximity filter.
pub fn detect_reference_circles(frame: &Frame, config: &DetectionConfig) -> Result<DetectionReport> {
    config.validate()?;
    if frame.is_empty() {
        return Err(RefscaleError::InvalidDimensions {
            width: frame.width() as u32,
            height: frame.height() as u32,
        });
    }

    let blurred = median_blur(&frame.data, config.median_ksize);
    let candidates: Vec<CircleCandidate> = hough_circles(&blurred, &config.hough)?
        .into_iter()
        .map(CircleCandidate::rounded)
        .collect();

    let center = frame.center();
    let kept = filter_near_center(&candidates, center, &config.center);

    info!(
        width = frame.width(),
        height = frame.height(),
        candidates = candidates.len(),
        kept = kept.len(),
        mode = %config.center.mode,
        "Circle detection complete"
    );

    Ok(DetectionReport {
        width: frame.width() as u32,
        height: frame.height() as u32,
        center,
        candidates,
        kept,
    })
}
