use crate::consts::{DEFAULT_DIAMETER_IN, SLIDER_MAX_MM, SLIDER_MIN_MM, SLIDER_TICKS_PER_MM};

use super::convert::{fit_diameter, inches_to_mm, mm_to_inches, mm_to_px};
use super::metrics::{CanvasArea, ScreenMetrics};

/// The on-screen reference circle, sized in physical millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceCircle {
    diameter_mm: f32,
}

impl ReferenceCircle {
    /// Create a circle with the given diameter. Negative values become zero.
    pub fn from_mm(diameter_mm: f32) -> Self {
        Self {
            diameter_mm: diameter_mm.max(0.0),
        }
    }

    pub fn from_inches(diameter_in: f32) -> Self {
        Self::from_mm(inches_to_mm(diameter_in))
    }

    /// Diameter from a slider position measured in tenths of a millimeter.
    pub fn from_slider_ticks(ticks: u32) -> Self {
        Self::from_mm(ticks as f32 / SLIDER_TICKS_PER_MM)
    }

    pub fn diameter_mm(&self) -> f32 {
        self.diameter_mm
    }

    pub fn diameter_in(&self) -> f32 {
        mm_to_inches(self.diameter_mm)
    }

    pub fn set_diameter_mm(&mut self, mm: f32) {
        self.diameter_mm = mm.max(0.0);
    }

    /// Slider position for this diameter, clamped to the slider's range.
    pub fn slider_ticks(&self) -> u32 {
        let mm = self.diameter_mm.clamp(SLIDER_MIN_MM, SLIDER_MAX_MM);
        (mm * SLIDER_TICKS_PER_MM).round() as u32
    }

    /// Text shown under the canvas, e.g. `Diameter: 1.50 in (38.10 mm)`.
    pub fn readout(&self) -> String {
        format!(
            "Diameter: {:.2} in ({:.2} mm)",
            self.diameter_in(),
            self.diameter_mm
        )
    }

    /// Where and how large to draw this circle on a canvas.
    pub fn layout(&self, metrics: &ScreenMetrics, area: &CanvasArea) -> CircleLayout {
        let requested_px = mm_to_px(metrics, self.diameter_mm);
        let diameter_px = fit_diameter(requested_px, area);
        let (center_x, center_y) = area.center();
        CircleLayout {
            center_x,
            center_y,
            diameter_px,
            requested_px,
        }
    }
}

impl Default for ReferenceCircle {
    fn default() -> Self {
        Self::from_inches(DEFAULT_DIAMETER_IN)
    }
}

/// Slider range in ticks, as `(min, max)`.
pub fn slider_tick_range() -> (u32, u32) {
    (
        (SLIDER_MIN_MM * SLIDER_TICKS_PER_MM).round() as u32,
        (SLIDER_MAX_MM * SLIDER_TICKS_PER_MM).round() as u32,
    )
}

/// Resolved drawing geometry for a reference circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleLayout {
    pub center_x: f32,
    pub center_y: f32,
    /// Diameter actually drawn, after clamping to the canvas.
    pub diameter_px: f32,
    /// Diameter the physical size asked for, before clamping.
    pub requested_px: f32,
}

impl CircleLayout {
    pub fn radius(&self) -> f32 {
        self.diameter_px / 2.0
    }

    /// True when the canvas was too small for the true size.
    pub fn is_clamped(&self) -> bool {
        self.diameter_px < self.requested_px
    }

    /// Bounding square as `(left, top, size)`.
    pub fn bounding_box(&self) -> (f32, f32, f32) {
        let r = self.radius();
        (self.center_x - r, self.center_y - r, self.diameter_px)
    }

    /// End points of the horizontal diameter line, snapped to whole pixels.
    pub fn diameter_line(&self) -> ((f32, f32), (f32, f32)) {
        let r = self.radius();
        (
            ((self.center_x - r).trunc(), self.center_y.trunc()),
            ((self.center_x + r).trunc(), self.center_y.trunc()),
        )
    }
}
