use refscale_core::config::{AppConfig, DisplayConfig};
use refscale_core::detection::{DetectionConfig, HoughParams, ProximityMode};
use refscale_core::error::RefscaleError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_hough_defaults() {
    let p = HoughParams::default();
    assert_eq!(p.dp, 1.0);
    assert_eq!(p.min_dist, 100.0);
    assert_eq!(p.param1, 300.0);
    assert_eq!(p.param2, 15.0);
    assert_eq!(p.min_radius, 250);
    assert_eq!(p.max_radius, 400);
}

#[test]
fn test_detection_defaults() {
    let d = DetectionConfig::default();
    assert_eq!(d.median_ksize, 21);
    assert_eq!(d.center.tolerance, 70.0);
    assert_eq!(d.center.mode, ProximityMode::PerAxis);
    assert!(d.validate().is_ok());
}

#[test]
fn test_display_defaults() {
    let d = DisplayConfig::default();
    assert_eq!(d.physical_width_mm, 0.0);
    assert_eq!(d.logical_dpi, 96.0);
    assert_eq!(d.canvas_margin, 30.0);
    assert_eq!(d.default_diameter_in, 1.5);
    assert!(!d.metrics(1920.0).has_physical_size());
}

#[test]
fn test_effective_max_radius_zero_means_image_size() {
    let p = HoughParams {
        max_radius: 0,
        ..Default::default()
    };
    assert_eq!(p.effective_max_radius(640, 480), 640);
    assert_eq!(HoughParams::default().effective_max_radius(640, 480), 400);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn test_app_config_json_roundtrip() {
    let mut config = AppConfig::default();
    config.display.physical_width_mm = 344.0;
    config.detection.center.mode = ProximityMode::Radial;

    let json = serde_json::to_string(&config).unwrap();
    let back: AppConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let json = r#"{ "detection": { "hough": { "param2": 30.0 }, "center": { "mode": "radial" } } }"#;
    let config: AppConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.detection.hough.param2, 30.0);
    assert_eq!(config.detection.hough.param1, 300.0);
    assert_eq!(config.detection.median_ksize, 21);
    assert_eq!(config.detection.center.mode, ProximityMode::Radial);
    assert_eq!(config.detection.center.tolerance, 70.0);
    assert_eq!(config.display, DisplayConfig::default());
}

#[test]
fn test_proximity_mode_serialized_snake_case() {
    let json = serde_json::to_string(&ProximityMode::PerAxis).unwrap();
    assert_eq!(json, "\"per_axis\"");
    assert_eq!(format!("{}", ProximityMode::PerAxis), "Per-axis");
    assert_eq!(format!("{}", ProximityMode::Radial), "Radial");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = AppConfig::default();
    config.display.logical_dpi = 0.0;
    assert!(matches!(config.validate(), Err(RefscaleError::InvalidParameter(_))));

    let mut config = AppConfig::default();
    config.detection.hough.min_dist = 0.0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.detection.center.tolerance = -1.0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.detection.hough.param1 = f32::NAN;
    assert!(config.validate().is_err());
}
