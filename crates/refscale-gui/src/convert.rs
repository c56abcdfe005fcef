use image::RgbImage;

/// Convert an 8-bit RGB image to an egui ColorImage.
pub fn rgb_to_color_image(rgb: &RgbImage) -> egui::ColorImage {
    let (w, h) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| egui::Color32::from_rgb(p[0], p[1], p[2]))
        .collect();

    egui::ColorImage {
        size: [w as usize, h as usize],
        pixels,
        source_size: Default::default(),
    }
}
