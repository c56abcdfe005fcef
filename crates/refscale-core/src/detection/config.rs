use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CENTER_TOLERANCE, DEFAULT_HOUGH_DP, DEFAULT_HOUGH_MAX_RADIUS, DEFAULT_HOUGH_MIN_DIST,
    DEFAULT_HOUGH_MIN_RADIUS, DEFAULT_HOUGH_PARAM1, DEFAULT_HOUGH_PARAM2, DEFAULT_MEDIAN_KSIZE,
};
use crate::error::{RefscaleError, Result};

/// Parameters of the gradient Hough circle transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughParams {
    /// Inverse accumulator resolution. 1 = full resolution, 2 = half.
    #[serde(default = "default_dp")]
    pub dp: f32,
    /// Minimum distance between accepted centers (px).
    #[serde(default = "default_min_dist")]
    pub min_dist: f32,
    /// Upper Canny threshold on the Sobel L1 gradient magnitude.
    #[serde(default = "default_param1")]
    pub param1: f32,
    /// Accumulator votes a center needs.
    #[serde(default = "default_param2")]
    pub param2: f32,
    #[serde(default = "default_min_radius")]
    pub min_radius: u32,
    /// Zero searches up to the larger image dimension.
    #[serde(default = "default_max_radius")]
    pub max_radius: u32,
}

fn default_dp() -> f32 {
    DEFAULT_HOUGH_DP
}
fn default_min_dist() -> f32 {
    DEFAULT_HOUGH_MIN_DIST
}
fn default_param1() -> f32 {
    DEFAULT_HOUGH_PARAM1
}
fn default_param2() -> f32 {
    DEFAULT_HOUGH_PARAM2
}
fn default_min_radius() -> u32 {
    DEFAULT_HOUGH_MIN_RADIUS
}
fn default_max_radius() -> u32 {
    DEFAULT_HOUGH_MAX_RADIUS
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            dp: DEFAULT_HOUGH_DP,
            min_dist: DEFAULT_HOUGH_MIN_DIST,
            param1: DEFAULT_HOUGH_PARAM1,
            param2: DEFAULT_HOUGH_PARAM2,
            min_radius: DEFAULT_HOUGH_MIN_RADIUS,
            max_radius: DEFAULT_HOUGH_MAX_RADIUS,
        }
    }
}

impl HoughParams {
    pub fn validate(&self) -> Result<()> {
        if self.dp.is_nan() || self.dp < 1.0 {
            return Err(invalid(format!("dp must be >= 1, got {}", self.dp)));
        }
        if self.min_dist.is_nan() || self.min_dist <= 0.0 {
            return Err(invalid(format!("min_dist must be > 0, got {}", self.min_dist)));
        }
        if self.param1.is_nan() || self.param1 <= 0.0 {
            return Err(invalid(format!("param1 must be > 0, got {}", self.param1)));
        }
        if self.param2.is_nan() || self.param2 <= 0.0 {
            return Err(invalid(format!("param2 must be > 0, got {}", self.param2)));
        }
        if self.max_radius != 0 && self.max_radius < self.min_radius {
            return Err(invalid(format!(
                "max_radius ({}) is smaller than min_radius ({})",
                self.max_radius, self.min_radius
            )));
        }
        Ok(())
    }

    /// Upper radius bound for an image of the given size.
    pub fn effective_max_radius(&self, width: usize, height: usize) -> u32 {
        if self.max_radius == 0 {
            width.max(height) as u32
        } else {
            self.max_radius
        }
    }
}

/// How a candidate's distance from the image center is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityMode {
    /// Each axis is checked independently: a square box around the center.
    #[default]
    PerAxis,
    /// True Euclidean distance: a disc around the center.
    Radial,
}

impl fmt::Display for ProximityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProximityMode::PerAxis => write!(f, "Per-axis"),
            ProximityMode::Radial => write!(f, "Radial"),
        }
    }
}

/// Which detected circles count as "the object in the middle of the photo".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterFilterConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f32,
    #[serde(default)]
    pub mode: ProximityMode,
}

fn default_tolerance() -> f32 {
    DEFAULT_CENTER_TOLERANCE
}

impl Default for CenterFilterConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_CENTER_TOLERANCE,
            mode: ProximityMode::default(),
        }
    }
}

/// Configuration for a full detection pass over one photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Median blur kernel size applied to the grayscale image. Odd; 1 disables.
    #[serde(default = "default_median_ksize")]
    pub median_ksize: usize,
    #[serde(default)]
    pub hough: HoughParams,
    #[serde(default)]
    pub center: CenterFilterConfig,
}

fn default_median_ksize() -> usize {
    DEFAULT_MEDIAN_KSIZE
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            median_ksize: DEFAULT_MEDIAN_KSIZE,
            hough: HoughParams::default(),
            center: CenterFilterConfig::default(),
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.median_ksize == 0 || self.median_ksize % 2 == 0 {
            return Err(invalid(format!(
                "median_ksize must be odd and >= 1, got {}",
                self.median_ksize
            )));
        }
        if self.center.tolerance.is_nan() || self.center.tolerance < 0.0 {
            return Err(invalid(format!(
                "center tolerance must be >= 0, got {}",
                self.center.tolerance
            )));
        }
        self.hough.validate()
    }
}

fn invalid(msg: String) -> RefscaleError {
    RefscaleError::InvalidParameter(msg)
}
