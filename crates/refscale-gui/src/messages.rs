use std::path::PathBuf;
use std::time::Duration;

use image::RgbImage;
use refscale_core::config::AppConfig;
use refscale_core::detection::{DetectionConfig, DetectionReport};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Load a photo, detect circles near its center and annotate it.
    Detect {
        path: PathBuf,
        config: DetectionConfig,
    },

    /// Save the last annotated photo to disk.
    SaveAnnotated { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A photo was picked in the file dialog; the UI starts detection.
    PhotoChosen {
        path: PathBuf,
    },
    DetectionComplete {
        path: PathBuf,
        report: DetectionReport,
        annotated: RgbImage,
        elapsed: Duration,
    },
    ImageSaved {
        path: PathBuf,
    },
    ConfigImported {
        config: AppConfig,
    },
    /// The running detection job stopped without a report.
    DetectionFailed {
        message: String,
    },
    /// Any other failure; does not affect a running detection job.
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
