use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_MARGIN, DEFAULT_DIAMETER_IN, DEFAULT_LOGICAL_DPI};
use crate::detection::DetectionConfig;
use crate::display::ScreenMetrics;
use crate::error::{RefscaleError, Result};

/// How the reference circle is scaled and laid out on screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Physical width of the display in millimeters. Zero means unknown, in
    /// which case `logical_dpi` is used.
    #[serde(default)]
    pub physical_width_mm: f32,
    #[serde(default = "default_logical_dpi")]
    pub logical_dpi: f32,
    /// Space kept clear around the circle (px).
    #[serde(default = "default_canvas_margin")]
    pub canvas_margin: f32,
    /// Diameter the sizing screen opens with (inches).
    #[serde(default = "default_diameter_in")]
    pub default_diameter_in: f32,
}

fn default_logical_dpi() -> f32 {
    DEFAULT_LOGICAL_DPI
}
fn default_canvas_margin() -> f32 {
    DEFAULT_CANVAS_MARGIN
}
fn default_diameter_in() -> f32 {
    DEFAULT_DIAMETER_IN
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            physical_width_mm: 0.0,
            logical_dpi: DEFAULT_LOGICAL_DPI,
            canvas_margin: DEFAULT_CANVAS_MARGIN,
            default_diameter_in: DEFAULT_DIAMETER_IN,
        }
    }
}

impl DisplayConfig {
    /// Screen metrics for a display `pixel_width` pixels wide.
    pub fn metrics(&self, pixel_width: f32) -> ScreenMetrics {
        ScreenMetrics::new(pixel_width, self.physical_width_mm, self.logical_dpi)
    }

    pub fn validate(&self) -> Result<()> {
        if self.logical_dpi.is_nan() || self.logical_dpi <= 0.0 {
            return Err(RefscaleError::InvalidParameter(format!(
                "logical_dpi must be > 0, got {}",
                self.logical_dpi
            )));
        }
        if self.canvas_margin.is_nan() || self.canvas_margin < 0.0 {
            return Err(RefscaleError::InvalidParameter(format!(
                "canvas_margin must be >= 0, got {}",
                self.canvas_margin
            )));
        }
        Ok(())
    }
}

/// Everything that can be set from a config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        self.detection.validate()
    }
}
