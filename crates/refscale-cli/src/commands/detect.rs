use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use refscale_core::detection::{detect_reference_circles, ProximityMode};
use refscale_core::io::image_io::{load_photo, save_image};
use refscale_core::io::overlay::annotate;
use tracing::debug;

use crate::summary::print_detection_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum ProximityArg {
    /// Check x and y offsets separately (square region)
    PerAxis,
    /// Check the straight-line distance (round region)
    Radial,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Input photo
    pub image: PathBuf,

    /// Write an annotated copy of the photo here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file (see `refscale config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Median blur kernel size (odd)
    #[arg(long)]
    pub median: Option<usize>,

    /// Inverse accumulator resolution
    #[arg(long)]
    pub dp: Option<f32>,

    /// Minimum distance between circle centers (px)
    #[arg(long)]
    pub min_dist: Option<f32>,

    /// Upper Canny edge threshold
    #[arg(long)]
    pub param1: Option<f32>,

    /// Accumulator vote threshold
    #[arg(long)]
    pub param2: Option<f32>,

    /// Smallest radius to search (px)
    #[arg(long)]
    pub min_radius: Option<u32>,

    /// Largest radius to search (px, 0 = image size)
    #[arg(long)]
    pub max_radius: Option<u32>,

    /// Keep circles whose center is this close to the image center (px)
    #[arg(long)]
    pub tolerance: Option<f32>,

    /// How closeness to the image center is measured
    #[arg(long, value_enum)]
    pub proximity: Option<ProximityArg>,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?.detection;
    let hough = &mut config.hough;
    if let Some(v) = args.dp {
        hough.dp = v;
    }
    if let Some(v) = args.min_dist {
        hough.min_dist = v;
    }
    if let Some(v) = args.param1 {
        hough.param1 = v;
    }
    if let Some(v) = args.param2 {
        hough.param2 = v;
    }
    if let Some(v) = args.min_radius {
        hough.min_radius = v;
    }
    if let Some(v) = args.max_radius {
        hough.max_radius = v;
    }
    if let Some(v) = args.median {
        config.median_ksize = v;
    }
    if let Some(v) = args.tolerance {
        config.center.tolerance = v;
    }
    if let Some(p) = args.proximity {
        config.center.mode = match p {
            ProximityArg::PerAxis => ProximityMode::PerAxis,
            ProximityArg::Radial => ProximityMode::Radial,
        };
    }
    config.validate()?;
    debug!(?config, "Detection settings");

    let photo = load_photo(&args.image)
        .with_context(|| format!("Failed to load image {}", args.image.display()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message("Detecting circles...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let report = detect_reference_circles(&photo.gray, &config);
    pb.finish_and_clear();
    let report = report?;

    print_detection_summary(&args.image, &config, &report, start.elapsed());

    if report.kept.is_empty() {
        println!("No circles detected near the image center");
    } else {
        for circle in &report.kept {
            println!("{circle}");
        }
    }

    if let Some(ref output) = args.output {
        let mut annotated = photo.rgb;
        annotate(&mut annotated, &report, &config);
        save_image(&annotated, output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Annotated image saved to {}", output.display());
    }

    Ok(())
}
