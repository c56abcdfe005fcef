use refscale_core::config::DisplayConfig;
use refscale_core::display::{ReferenceCircle, ScreenMetrics};

/// Reference circle shown on the sizing screen.
#[derive(Default)]
pub struct SizingState {
    pub circle: ReferenceCircle,
    /// Where the circle came from, shown above the canvas.
    pub source: Option<String>,
}

impl SizingState {
    /// Reset to the configured starting diameter.
    pub fn reset(&mut self, display: &DisplayConfig) {
        self.circle = ReferenceCircle::from_inches(display.default_diameter_in);
        self.source = None;
    }

    pub fn show_coin(&mut self, name: &str, diameter_mm: f32) {
        self.circle = ReferenceCircle::from_mm(diameter_mm);
        self.source = Some(name.to_string());
    }
}

/// Screen metrics for the monitor the window is on.
///
/// `monitor_width` is in egui points; the circle is drawn in the same unit.
/// An unknown monitor falls back to the configured DPI.
pub fn screen_metrics(display: &DisplayConfig, monitor_width: Option<f32>) -> ScreenMetrics {
    match monitor_width {
        Some(w) if w > 0.0 => display.metrics(w),
        _ => ScreenMetrics::dpi_only(display.logical_dpi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_uses_configured_diameter() {
        let mut state = SizingState::default();
        state.show_coin("Quarter", 24.26);
        let display = DisplayConfig {
            default_diameter_in: 2.0,
            ..Default::default()
        };
        state.reset(&display);
        assert!((state.circle.diameter_mm() - 50.8).abs() < 1e-4);
        assert!(state.source.is_none());
    }

    #[test]
    fn unknown_monitor_uses_dpi() {
        let display = DisplayConfig {
            physical_width_mm: 300.0,
            ..Default::default()
        };
        let metrics = screen_metrics(&display, None);
        assert!(!metrics.has_physical_size());
        let metrics = screen_metrics(&display, Some(1500.0));
        assert!(metrics.has_physical_size());
        assert_eq!(metrics.pixel_width, 1500.0);
    }
}
