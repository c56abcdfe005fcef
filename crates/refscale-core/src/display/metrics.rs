use crate::consts::{DEFAULT_CANVAS_MARGIN, DEFAULT_LOGICAL_DPI};

/// Size information for the display the reference circle is drawn on.
///
/// `pixel_width` and the resulting pixel diameters share one unit, whatever
/// the caller draws in (device pixels or logical points).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Horizontal pixel count of the display.
    pub pixel_width: f32,
    /// Horizontal physical width in millimeters. Zero when unknown.
    pub physical_width_mm: f32,
    /// Logical dots per inch, used when the physical width is unknown.
    pub logical_dpi: f32,
}

impl ScreenMetrics {
    pub fn new(pixel_width: f32, physical_width_mm: f32, logical_dpi: f32) -> Self {
        Self {
            pixel_width,
            physical_width_mm,
            logical_dpi,
        }
    }

    /// Metrics for a display whose physical size is not reported.
    pub fn dpi_only(logical_dpi: f32) -> Self {
        Self::new(0.0, 0.0, logical_dpi)
    }

    /// True when the physical width can be used for scaling.
    pub fn has_physical_size(&self) -> bool {
        self.physical_width_mm.is_finite() && self.physical_width_mm > 0.0
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::dpi_only(DEFAULT_LOGICAL_DPI)
    }
}

/// The area available for drawing the reference circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasArea {
    pub width: f32,
    pub height: f32,
    /// Space reserved on all four sides.
    pub margin: f32,
}

impl CanvasArea {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Largest diameter that fits inside the margins. Never negative.
    pub fn max_diameter(&self) -> f32 {
        (self.width.min(self.height) - 2.0 * self.margin).max(0.0)
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for CanvasArea {
    fn default() -> Self {
        Self::new(700.0, 700.0, DEFAULT_CANVAS_MARGIN)
    }
}
