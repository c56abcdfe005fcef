mod common;

use approx::assert_relative_eq;
use image::{Rgb, RgbImage};

use refscale_core::detection::{CenterFilterConfig, DetectionConfig, DetectionReport, HoughParams};
use refscale_core::frame::{CircleCandidate, ImageCenter};
use refscale_core::io::image_io::{load_photo, rgb_to_gray, save_png};
use refscale_core::io::overlay::{annotate, draw_ring};

use common::disk_rgb;

#[test]
fn test_save_load_photo_roundtrip() {
    let img = disk_rgb(64, 48, 32.0, 24.0, 10.0);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("disk.png");

    save_png(&img, &path).unwrap();
    let photo = load_photo(&path).unwrap();

    assert_eq!(photo.rgb.dimensions(), (64, 48));
    assert_eq!(photo.gray.width(), 64);
    assert_eq!(photo.gray.height(), 48);
    assert_relative_eq!(photo.gray.data[[24, 32]], 220.0 / 255.0, epsilon = 1e-3);
    assert_relative_eq!(photo.gray.data[[0, 0]], 0.0, epsilon = 1e-6);
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_photo(&dir.path().join("nope.jpeg")).is_err());
}

#[test]
fn test_gray_uses_bt601_weights() {
    let mut img = RgbImage::new(3, 1);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 255, 0]));
    img.put_pixel(2, 0, Rgb([0, 0, 255]));
    let gray = rgb_to_gray(&img);
    assert_relative_eq!(gray.data[[0, 0]], 0.299, epsilon = 1e-4);
    assert_relative_eq!(gray.data[[0, 1]], 0.587, epsilon = 1e-4);
    assert_relative_eq!(gray.data[[0, 2]], 0.114, epsilon = 1e-4);
}

#[test]
fn test_draw_ring_clips_outside_image() {
    let mut img = RgbImage::new(20, 20);
    draw_ring(&mut img, 0.0, 0.0, 10.0, 2, [1, 2, 3]);
    assert_eq!(img.get_pixel(10, 0).0, [1, 2, 3]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);

    // Entirely off-canvas: nothing drawn, no panic.
    draw_ring(&mut img, 500.0, 500.0, 5.0, 3, [9, 9, 9]);
}

#[test]
fn test_annotate_draws_tolerance_bounds_and_kept() {
    let mut img = RgbImage::new(200, 200);
    let config = DetectionConfig {
        median_ksize: 1,
        hough: HoughParams {
            min_radius: 20,
            max_radius: 30,
            ..Default::default()
        },
        center: CenterFilterConfig::default(),
    };
    let kept = CircleCandidate::new(100.0, 100.0, 50.0);
    let report = DetectionReport {
        width: 200,
        height: 200,
        center: ImageCenter { x: 100, y: 100 },
        candidates: vec![kept],
        kept: vec![kept],
    };

    annotate(&mut img, &report, &config);

    assert_eq!(img.get_pixel(170, 100).0, [200, 0, 0]);
    assert_eq!(img.get_pixel(120, 100).0, [200, 200, 0]);
    assert_eq!(img.get_pixel(150, 100).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(100, 100).0, [0, 0, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0]);
}
