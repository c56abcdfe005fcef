mod common;

use approx::assert_relative_eq;
use ndarray::Array2;

use refscale_core::detection::edges::canny;
use refscale_core::detection::median::median_blur;
use refscale_core::detection::smooth::gaussian_blur;
use refscale_core::detection::{
    detect_reference_circles, hough_circles, CenterFilterConfig, DetectionConfig, HoughParams,
    ProximityMode,
};
use refscale_core::error::RefscaleError;
use refscale_core::frame::Frame;

use common::{close, disk_frame};

fn small_params(min_radius: u32, max_radius: u32, min_dist: f32) -> HoughParams {
    HoughParams {
        dp: 1.0,
        min_dist,
        param1: 100.0,
        param2: 15.0,
        min_radius,
        max_radius,
    }
}

// ---------------------------------------------------------------------------
// Median blur
// ---------------------------------------------------------------------------

#[test]
fn test_median_removes_impulse() {
    let mut data = Array2::<f32>::from_elem((9, 9), 0.5);
    data[[4, 4]] = 1.0;
    data[[0, 0]] = 0.0;
    let out = median_blur(&data, 3);
    for &v in out.iter() {
        assert_relative_eq!(v, 0.5, epsilon = 1e-2);
    }
}

#[test]
fn test_median_ksize_one_is_identity() {
    let data = Array2::from_shape_fn((5, 7), |(r, c)| (r * 7 + c) as f32 / 35.0);
    assert_eq!(median_blur(&data, 1), data);
}

#[test]
fn test_median_preserves_step_edge() {
    let data = Array2::from_shape_fn((8, 8), |(_, c)| if c < 4 { 0.0 } else { 1.0 });
    assert_eq!(median_blur(&data, 3), data);
}

#[test]
fn test_gaussian_blur_spreads_impulse_symmetrically() {
    let mut data = Array2::<f32>::zeros((21, 21));
    data[[10, 10]] = 1.0;
    let out = gaussian_blur(&data, 2.0);
    assert_relative_eq!(out.sum(), 1.0, epsilon = 1e-4);
    assert!(out[[10, 10]] < 1.0);
    assert_relative_eq!(out[[10, 7]], out[[10, 13]], epsilon = 1e-6);
    assert_relative_eq!(out[[7, 10]], out[[10, 7]], epsilon = 1e-6);
    assert!(out[[10, 11]] > out[[10, 12]]);
}

#[test]
fn test_gaussian_blur_zero_sigma_is_identity() {
    let data = Array2::from_shape_fn((4, 6), |(r, c)| (r + c) as f32);
    assert_eq!(gaussian_blur(&data, 0.0), data);
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

#[test]
fn test_canny_flat_image_has_no_edges() {
    let data = Array2::<f32>::from_elem((32, 32), 0.7);
    assert!(canny(&data, 50.0, 100.0).points.is_empty());
}

#[test]
fn test_canny_thin_edge_on_disk() {
    let frame = disk_frame(120, 120, &[(60.0, 60.0, 30.0)]);
    let edges = canny(&frame.data, 50.0, 100.0);
    assert!(!edges.points.is_empty());
    for &(row, col) in &edges.points {
        let d = ((row as f32 - 60.0).powi(2) + (col as f32 - 60.0).powi(2)).sqrt();
        assert!(close(d, 30.0, 2.0), "edge pixel ({row}, {col}) at distance {d}");
    }
    // A one-pixel contour is roughly as long as the circumference, not twice it.
    let circumference = 2.0 * std::f32::consts::PI * 30.0;
    assert!((edges.points.len() as f32) < circumference * 1.6);
}

// ---------------------------------------------------------------------------
// Hough transform
// ---------------------------------------------------------------------------

#[test]
fn test_hough_finds_single_disk() {
    let frame = disk_frame(200, 200, &[(100.0, 100.0, 40.0)]);
    let circles = hough_circles(&frame.data, &small_params(30, 50, 20.0)).unwrap();
    assert!(!circles.is_empty());
    let best = circles[0];
    assert!(close(best.x, 100.0, 2.0), "x = {}", best.x);
    assert!(close(best.y, 100.0, 2.0), "y = {}", best.y);
    assert!(close(best.radius, 40.0, 2.0), "r = {}", best.radius);
}

#[test]
fn test_hough_coarse_accumulator_keeps_full_precision() {
    let frame = disk_frame(200, 200, &[(100.0, 100.0, 40.0)]);
    let mut params = small_params(30, 50, 20.0);
    params.dp = 2.0;
    let circles = hough_circles(&frame.data, &params).unwrap();
    assert!(!circles.is_empty());
    let best = circles[0];
    assert!(close(best.x, 100.0, 2.0), "x = {}", best.x);
    assert!(close(best.y, 100.0, 2.0), "y = {}", best.y);
    assert!(close(best.radius, 40.0, 2.0), "r = {}", best.radius);
}

#[test]
fn test_hough_strongest_circle_first() {
    let frame = disk_frame(300, 200, &[(80.0, 100.0, 25.0), (210.0, 100.0, 45.0)]);
    let circles = hough_circles(&frame.data, &small_params(20, 50, 50.0)).unwrap();
    assert!(circles.len() >= 2, "{circles:?}");
    assert!(close(circles[0].x, 210.0, 2.0), "{circles:?}");
    assert!(close(circles[0].radius, 45.0, 2.0), "{circles:?}");
}

#[test]
fn test_hough_finds_two_separate_disks() {
    let frame = disk_frame(300, 200, &[(80.0, 100.0, 30.0), (220.0, 100.0, 30.0)]);
    let circles = hough_circles(&frame.data, &small_params(20, 40, 50.0)).unwrap();
    let near = |x: f32| circles.iter().any(|c| close(c.x, x, 2.0) && close(c.y, 100.0, 2.0));
    assert!(near(80.0), "left disk missing: {circles:?}");
    assert!(near(220.0), "right disk missing: {circles:?}");
}

#[test]
fn test_hough_blank_image_finds_nothing() {
    let frame = Frame::new(Array2::<f32>::zeros((100, 100)));
    let circles = hough_circles(&frame.data, &small_params(10, 40, 20.0)).unwrap();
    assert!(circles.is_empty());
}

#[test]
fn test_hough_radius_out_of_range_finds_nothing() {
    let frame = disk_frame(200, 200, &[(100.0, 100.0, 40.0)]);
    let circles = hough_circles(&frame.data, &small_params(60, 80, 20.0)).unwrap();
    assert!(circles.iter().all(|c| !close(c.radius, 40.0, 2.0)));
}

#[test]
fn test_hough_rejects_bad_params() {
    let frame = disk_frame(50, 50, &[]);
    let mut params = small_params(10, 20, 10.0);
    params.dp = 0.5;
    assert!(matches!(
        hough_circles(&frame.data, &params),
        Err(RefscaleError::InvalidParameter(_))
    ));

    let mut params = small_params(30, 20, 10.0);
    params.dp = 1.0;
    assert!(hough_circles(&frame.data, &params).is_err());
}

#[test]
fn test_hough_empty_image_is_error() {
    let data = Array2::<f32>::zeros((0, 0));
    assert!(matches!(
        hough_circles(&data, &HoughParams::default()),
        Err(RefscaleError::EmptyImage)
    ));
}

// ---------------------------------------------------------------------------
// Full detection pass
// ---------------------------------------------------------------------------

#[test]
fn test_detection_keeps_only_centered_circle() {
    let frame = disk_frame(400, 300, &[(200.0, 150.0, 60.0), (340.0, 60.0, 30.0)]);
    let config = DetectionConfig {
        median_ksize: 5,
        hough: small_params(20, 80, 40.0),
        center: CenterFilterConfig {
            tolerance: 20.0,
            mode: ProximityMode::PerAxis,
        },
    };

    let report = detect_reference_circles(&frame, &config).unwrap();
    assert_eq!((report.width, report.height), (400, 300));
    assert_eq!((report.center.x, report.center.y), (200, 150));
    assert!(report.candidates.len() >= 2, "{:?}", report.candidates);
    assert_eq!(report.kept.len(), 1, "{:?}", report.kept);

    let kept = report.kept[0];
    assert!(close(kept.x, 200.0, 2.0));
    assert!(close(kept.y, 150.0, 2.0));
    assert!(close(kept.radius, 60.0, 3.0));
    assert_eq!(kept.x, kept.x.round());
    assert_eq!(kept.radius, kept.radius.round());
}

#[test]
fn test_detection_large_disk_with_default_settings() {
    let frame = disk_frame(1000, 800, &[(500.0, 400.0, 300.0)]);
    let report = detect_reference_circles(&frame, &DetectionConfig::default()).unwrap();
    assert_eq!(report.kept.len(), 1, "{:?}", report.kept);

    let kept = report.kept[0];
    assert!(close(kept.x, 500.0, 2.0), "x = {}", kept.x);
    assert!(close(kept.y, 400.0, 2.0), "y = {}", kept.y);
    assert!(close(kept.radius, 300.0, 3.0), "r = {}", kept.radius);
}

#[test]
fn test_detection_without_circles_is_empty_not_error() {
    let frame = Frame::new(Array2::<f32>::from_elem((120, 160), 0.3));
    let config = DetectionConfig {
        median_ksize: 3,
        hough: small_params(10, 40, 20.0),
        ..Default::default()
    };
    let report = detect_reference_circles(&frame, &config).unwrap();
    assert!(report.candidates.is_empty());
    assert!(report.kept.is_empty());
}

#[test]
fn test_detection_rejects_even_kernel() {
    let frame = disk_frame(50, 50, &[]);
    let config = DetectionConfig {
        median_ksize: 4,
        ..Default::default()
    };
    assert!(matches!(
        detect_reference_circles(&frame, &config),
        Err(RefscaleError::InvalidParameter(_))
    ));
}
