use crate::consts::MM_PER_INCH;

use super::metrics::{CanvasArea, ScreenMetrics};

/// Convert a physical length in millimeters to pixels on the given display.
///
/// Scales linearly by the display's pixel width over its physical width.
/// When the physical width is unknown (zero, negative or not finite) the
/// logical DPI is used instead, and that check happens before any division.
pub fn mm_to_px(metrics: &ScreenMetrics, mm: f32) -> f32 {
    let mm = mm.max(0.0);
    if !metrics.has_physical_size() {
        return (mm / MM_PER_INCH) * metrics.logical_dpi.max(0.0);
    }
    (mm / metrics.physical_width_mm) * metrics.pixel_width.max(0.0)
}

/// Inverse of [`mm_to_px`].
pub fn px_to_mm(metrics: &ScreenMetrics, px: f32) -> f32 {
    let px = px.max(0.0);
    if !metrics.has_physical_size() {
        if metrics.logical_dpi <= 0.0 {
            return 0.0;
        }
        return px / metrics.logical_dpi * MM_PER_INCH;
    }
    if metrics.pixel_width <= 0.0 {
        return 0.0;
    }
    px / metrics.pixel_width * metrics.physical_width_mm
}

/// Clamp a pixel diameter so the circle stays inside the canvas margins.
pub fn fit_diameter(diameter_px: f32, area: &CanvasArea) -> f32 {
    diameter_px.max(0.0).min(area.max_diameter())
}

pub fn mm_to_inches(mm: f32) -> f32 {
    mm / MM_PER_INCH
}

pub fn inches_to_mm(inches: f32) -> f32 {
    inches * MM_PER_INCH
}
