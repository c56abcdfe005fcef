use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use refscale_core::display::convert::inches_to_mm;
use refscale_core::display::{CanvasArea, Coin, ReferenceCircle};

use crate::summary::print_size_summary;

/// Accept a coin name in any case, e.g. `dime` or `Quarter`.
fn parse_coin(s: &str) -> Result<Coin, String> {
    s.parse::<Coin>().map_err(|e| e.to_string())
}

#[derive(Args)]
pub struct SizeArgs {
    /// Diameter in millimeters
    #[arg(long, conflicts_with_all = ["inches", "coin"])]
    pub mm: Option<f32>,

    /// Diameter in inches
    #[arg(long, conflicts_with = "coin")]
    pub inches: Option<f32>,

    /// Use a coin's diameter (penny, nickel, dime, quarter)
    #[arg(long, value_parser = parse_coin)]
    pub coin: Option<Coin>,

    /// Horizontal resolution of the display (px)
    #[arg(long, default_value = "1920")]
    pub pixel_width: f32,

    /// Physical display width in mm (0 = unknown, use --dpi)
    #[arg(long)]
    pub physical_width_mm: Option<f32>,

    /// Logical DPI used when the physical width is unknown
    #[arg(long)]
    pub dpi: Option<f32>,

    /// Canvas width (px)
    #[arg(long, default_value = "700")]
    pub canvas_width: f32,

    /// Canvas height (px)
    #[arg(long, default_value = "700")]
    pub canvas_height: f32,

    /// Margin kept clear around the circle (px)
    #[arg(long)]
    pub margin: Option<f32>,

    /// TOML config file (see `refscale config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &SizeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(mm) = args.physical_width_mm {
        config.display.physical_width_mm = mm;
    }
    if let Some(dpi) = args.dpi {
        config.display.logical_dpi = dpi;
    }
    if let Some(margin) = args.margin {
        config.display.canvas_margin = margin;
    }
    config.display.validate()?;

    let (diameter_mm, label) = match (args.mm, args.inches, args.coin) {
        (Some(mm), _, _) => (mm, None),
        (_, Some(inches), _) => (inches_to_mm(inches), None),
        (_, _, Some(coin)) => (coin.diameter_mm(), Some(coin.name())),
        (None, None, None) => (inches_to_mm(config.display.default_diameter_in), None),
    };
    if diameter_mm < 0.0 {
        bail!("Diameter must not be negative, got {diameter_mm} mm");
    }

    let metrics = config.display.metrics(args.pixel_width);
    let area = CanvasArea::new(
        args.canvas_width,
        args.canvas_height,
        config.display.canvas_margin,
    );
    let circle = ReferenceCircle::from_mm(diameter_mm);
    let layout = circle.layout(&metrics, &area);

    print_size_summary(&circle, label, &metrics, &area, &layout);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coin_ignores_case() {
        assert_eq!(parse_coin("dime"), Ok(Coin::Dime));
        assert_eq!(parse_coin("QUARTER"), Ok(Coin::Quarter));
    }

    #[test]
    fn test_parse_coin_rejects_unknown() {
        let err = parse_coin("euro").unwrap_err();
        assert!(err.contains("euro"), "{err}");
    }
}
