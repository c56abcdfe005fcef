use image::{Rgb, RgbImage};

use crate::consts::{
    OVERLAY_BOUNDS_COLOR, OVERLAY_BOUNDS_THICKNESS, OVERLAY_CENTER_THICKNESS,
    OVERLAY_CIRCLE_COLOR, OVERLAY_CIRCLE_THICKNESS, OVERLAY_TOLERANCE_COLOR,
    OVERLAY_TOLERANCE_THICKNESS,
};
use crate::detection::{DetectionConfig, DetectionReport};

/// Draw a circle outline `thickness` pixels wide, centered on radius `r`.
///
/// Parts falling outside the image are clipped.
pub fn draw_ring(img: &mut RgbImage, cx: f32, cy: f32, r: f32, thickness: u32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let half = thickness.max(1) as f32 / 2.0;
    let inner = (r - half).max(0.0);
    let outer = r + half;

    let min_x = (cx - outer).floor().max(0.0) as u32;
    let max_x = ((cx + outer).ceil().max(0.0) as u32).min(w - 1);
    let min_y = (cy - outer).floor().max(0.0) as u32;
    let max_y = ((cy + outer).ceil().max(0.0) as u32).min(h - 1);

    let inner_sq = inner * inner;
    let outer_sq = outer * outer;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let d_sq = dx * dx + dy * dy;
            if d_sq >= inner_sq && d_sq <= outer_sq {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

/// Draw the detection result over the photo.
///
/// Red: the center tolerance. Yellow: the min and max radius searched.
/// Blue: each accepted circle and its center point.
pub fn annotate(img: &mut RgbImage, report: &DetectionReport, config: &DetectionConfig) {
    let cx = report.center.x as f32;
    let cy = report.center.y as f32;

    draw_ring(
        img,
        cx,
        cy,
        config.center.tolerance,
        OVERLAY_TOLERANCE_THICKNESS,
        OVERLAY_TOLERANCE_COLOR,
    );

    let max_radius = config
        .hough
        .effective_max_radius(report.width as usize, report.height as usize);
    for r in [config.hough.min_radius, max_radius] {
        draw_ring(
            img,
            cx,
            cy,
            r as f32,
            OVERLAY_BOUNDS_THICKNESS,
            OVERLAY_BOUNDS_COLOR,
        );
    }

    for circle in &report.kept {
        draw_ring(
            img,
            circle.x,
            circle.y,
            circle.radius,
            OVERLAY_CIRCLE_THICKNESS,
            OVERLAY_CIRCLE_COLOR,
        );
        draw_ring(
            img,
            circle.x,
            circle.y,
            1.0,
            OVERLAY_CENTER_THICKNESS,
            OVERLAY_CIRCLE_COLOR,
        );
    }
}
