use refscale_core::detection::{filter_near_center, is_near_center, CenterFilterConfig, ProximityMode};
use refscale_core::frame::{CircleCandidate, ImageCenter};

fn per_axis(tolerance: f32) -> CenterFilterConfig {
    CenterFilterConfig {
        tolerance,
        mode: ProximityMode::PerAxis,
    }
}

#[test]
fn test_image_center_uses_integer_division() {
    assert_eq!(ImageCenter::of(1920, 1080), ImageCenter { x: 960, y: 540 });
    assert_eq!(ImageCenter::of(1921, 1081), ImageCenter { x: 960, y: 540 });
}

#[test]
fn test_candidate_within_tolerance_kept() {
    let center = ImageCenter { x: 960, y: 540 };
    let c = CircleCandidate::new(1000.0, 560.0, 50.0);
    assert!(is_near_center(&c, center, &per_axis(70.0)));
}

#[test]
fn test_candidate_outside_on_one_axis_rejected() {
    let center = ImageCenter { x: 960, y: 540 };
    let c = CircleCandidate::new(1050.0, 540.0, 50.0);
    assert!(!is_near_center(&c, center, &per_axis(70.0)));
}

#[test]
fn test_tolerance_boundary_is_strict() {
    let center = ImageCenter { x: 960, y: 540 };
    let on_edge = CircleCandidate::new(1030.0, 540.0, 50.0);
    let inside = CircleCandidate::new(1029.0, 540.0, 50.0);
    assert!(!is_near_center(&on_edge, center, &per_axis(70.0)));
    assert!(is_near_center(&inside, center, &per_axis(70.0)));
}

#[test]
fn test_per_axis_accepts_diagonal_corner() {
    // 69 px on both axes is ~97.6 px away radially: kept per axis only.
    let center = ImageCenter { x: 960, y: 540 };
    let corner = CircleCandidate::new(1029.0, 609.0, 50.0);
    assert!(is_near_center(&corner, center, &per_axis(70.0)));

    let radial = CenterFilterConfig {
        tolerance: 70.0,
        mode: ProximityMode::Radial,
    };
    assert!(!is_near_center(&corner, center, &radial));
}

#[test]
fn test_default_mode_is_per_axis() {
    assert_eq!(CenterFilterConfig::default().mode, ProximityMode::PerAxis);
    assert_eq!(CenterFilterConfig::default().tolerance, 70.0);
}

#[test]
fn test_filter_preserves_order() {
    let center = ImageCenter { x: 960, y: 540 };
    let candidates = vec![
        CircleCandidate::new(1000.0, 560.0, 300.0),
        CircleCandidate::new(1050.0, 540.0, 300.0),
        CircleCandidate::new(930.0, 500.0, 260.0),
    ];
    let kept = filter_near_center(&candidates, center, &per_axis(70.0));
    assert_eq!(kept, vec![candidates[0], candidates[2]]);
}

#[test]
fn test_filter_empty_input() {
    let kept = filter_near_center(&[], ImageCenter { x: 10, y: 10 }, &per_axis(70.0));
    assert!(kept.is_empty());
}

#[test]
fn test_candidate_rounding() {
    let c = CircleCandidate::new(10.4, 20.5, 30.6).rounded();
    assert_eq!(c, CircleCandidate::new(10.0, 21.0, 31.0));
    assert_eq!(c.to_string(), "10 21 31");
}
