use std::path::Path;
use std::time::Duration;

use console::Style;
use refscale_core::detection::{DetectionConfig, DetectionReport};
use refscale_core::display::convert::px_to_mm;
use refscale_core::display::{CanvasArea, CircleLayout, ReferenceCircle, ScreenMetrics};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

/// Searched radius range, with `max_radius == 0` resolved to the image size.
fn radius_range(config: &DetectionConfig, report: &DetectionReport) -> String {
    let h = &config.hough;
    format!(
        "{}..{}",
        h.min_radius,
        h.effective_max_radius(report.width as usize, report.height as usize)
    )
}

pub fn print_detection_summary(
    input: &Path,
    config: &DetectionConfig,
    report: &DetectionReport,
    elapsed: Duration,
) {
    let s = Styles::new();
    print_title(&s, "Circle Detection");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", report.width, report.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Center"),
        s.value.apply_to(format!("({}, {})", report.center.x, report.center.y))
    );
    println!();

    let h = &config.hough;
    println!("  {}", s.header.apply_to("Hough Transform"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Median"),
        s.value.apply_to(config.median_ksize)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("dp"),
        s.value.apply_to(h.dp)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min dist"),
        s.value.apply_to(h.min_dist)
    );
    println!(
        "    {:<12}{} / {}",
        s.label.apply_to("Thresholds"),
        s.value.apply_to(h.param1),
        s.value.apply_to(h.param2)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Radius"),
        s.value.apply_to(radius_range(config, report))
    );
    println!();

    println!("  {}", s.header.apply_to("Center Filter"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(config.center.mode)
    );
    println!(
        "    {:<12}{} px",
        s.label.apply_to("Tolerance"),
        s.value.apply_to(config.center.tolerance)
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Candidates"),
        s.value.apply_to(report.candidates.len())
    );
    let kept = if report.kept.is_empty() {
        s.warn.apply_to("0".to_string())
    } else {
        s.method.apply_to(report.kept.len().to_string())
    };
    println!("  {:<14}{}", s.label.apply_to("Kept"), kept);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Elapsed"),
        s.value.apply_to(format!("{:.2}s", elapsed.as_secs_f64()))
    );
    println!();
}

pub fn print_size_summary(
    circle: &ReferenceCircle,
    coin: Option<&str>,
    metrics: &ScreenMetrics,
    area: &CanvasArea,
    layout: &CircleLayout,
) {
    let s = Styles::new();
    print_title(&s, "Reference Circle");

    if let Some(name) = coin {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Coin"),
            s.method.apply_to(name)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Diameter"),
        s.value.apply_to(format!(
            "{:.2} mm ({:.3} in)",
            circle.diameter_mm(),
            circle.diameter_in()
        ))
    );
    println!();

    println!("  {}", s.header.apply_to("Display"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Width"),
        s.value.apply_to(format!("{} px", metrics.pixel_width))
    );
    if metrics.has_physical_size() {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Physical"),
            s.value.apply_to(format!("{} mm", metrics.physical_width_mm))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Physical"),
            s.warn.apply_to(format!("unknown, using {} dpi", metrics.logical_dpi))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!(
            "{}x{} (margin {})",
            area.width, area.height, area.margin
        ))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Requested"),
        s.value.apply_to(format!("{:.1} px", layout.requested_px))
    );
    let drawn = format!(
        "{:.1} px ({:.2} mm)",
        layout.diameter_px,
        px_to_mm(metrics, layout.diameter_px)
    );
    if layout.is_clamped() {
        println!(
            "  {:<14}{} {}",
            s.label.apply_to("Drawn"),
            s.value.apply_to(drawn),
            s.warn.apply_to("(clamped to canvas)")
        );
    } else {
        println!("  {:<14}{}", s.label.apply_to("Drawn"), s.value.apply_to(drawn));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use refscale_core::frame::ImageCenter;

    use super::*;

    fn report(width: u32, height: u32) -> DetectionReport {
        DetectionReport {
            width,
            height,
            center: ImageCenter::of(width, height),
            candidates: Vec::new(),
            kept: Vec::new(),
        }
    }

    #[test]
    fn test_radius_range_resolves_unbounded_max() {
        let mut config = DetectionConfig::default();
        config.hough.min_radius = 10;
        config.hough.max_radius = 0;
        let expected = config.hough.effective_max_radius(640, 480);
        assert_ne!(expected, 0);
        assert_eq!(radius_range(&config, &report(640, 480)), format!("10..{expected}"));
    }

    #[test]
    fn test_radius_range_keeps_explicit_max() {
        let config = DetectionConfig::default();
        let h = &config.hough;
        assert_eq!(
            radius_range(&config, &report(1000, 800)),
            format!("{}..{}", h.min_radius, h.max_radius)
        );
    }
}
