use std::path::Path;

use image::{ImageFormat, RgbImage};
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{RefscaleError, Result};
use crate::frame::Frame;

/// A photo loaded for detection: the colour image for drawing on, and its
/// grayscale version for the detector.
pub struct Photo {
    pub rgb: RgbImage,
    pub gray: Frame,
}

/// Load an image file as 8-bit RGB plus a BT.601 grayscale frame.
pub fn load_photo(path: &Path) -> Result<Photo> {
    let rgb = image::open(path)?.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(RefscaleError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    let gray = rgb_to_gray(&rgb);
    Ok(Photo { rgb, gray })
}

/// Convert RGB to grayscale with ITU-R BT.601 weights.
pub fn rgb_to_gray(rgb: &RgbImage) -> Frame {
    let (w, h) = rgb.dimensions();
    let mut data = Array2::<f32>::zeros((h as usize, w as usize));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let luma = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        data[[row as usize, col as usize]] = luma / 255.0;
    }

    Frame::new(data)
}

/// Save an RGB image as PNG.
pub fn save_png(rgb: &RgbImage, path: &Path) -> Result<()> {
    rgb.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGB image, choosing the format from the file extension.
pub fn save_image(rgb: &RgbImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") | None => save_png(rgb, path),
        Some(_) => {
            rgb.save(path)?;
            Ok(())
        }
    }
}
