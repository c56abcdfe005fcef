#![allow(dead_code)]

use image::{Rgb, RgbImage};
use ndarray::Array2;

use refscale_core::frame::Frame;

/// Build a dark frame with bright filled disks.
///
/// Each disk is `(center_x, center_y, radius)` in pixels.
pub fn disk_frame(width: usize, height: usize, disks: &[(f32, f32, f32)]) -> Frame {
    let mut data = Array2::<f32>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            for &(cx, cy, r) in disks {
                let dx = col as f32 - cx;
                let dy = row as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    data[[row, col]] = 1.0;
                }
            }
        }
    }
    Frame::new(data)
}

/// Same as [`disk_frame`] but as an RGB image with a grey disk on black.
pub fn disk_rgb(width: u32, height: u32, cx: f32, cy: f32, r: f32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if dx * dx + dy * dy <= r * r {
            *pixel = Rgb([220, 220, 220]);
        }
    }
    img
}

/// Absolute distance helper for loose position checks.
pub fn close(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}
