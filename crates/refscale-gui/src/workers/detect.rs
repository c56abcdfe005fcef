use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use image::RgbImage;
use refscale_core::detection::{detect_reference_circles, DetectionConfig};
use refscale_core::io::image_io::{load_photo, save_image};
use refscale_core::io::overlay::annotate;

use crate::messages::WorkerResult;

use super::{send, send_error};

pub(super) fn handle_detect(
    path: &Path,
    config: &DetectionConfig,
    annotated: &mut Option<RgbImage>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let photo = match load_photo(path) {
        Ok(p) => p,
        Err(e) => {
            send_detection_failed(tx, ctx, format!("Failed to load {}: {e}", path.display()));
            return;
        }
    };

    let report = match detect_reference_circles(&photo.gray, config) {
        Ok(r) => r,
        Err(e) => {
            send_detection_failed(tx, ctx, format!("Detection failed: {e}"));
            return;
        }
    };

    let mut image = photo.rgb;
    annotate(&mut image, &report, config);
    *annotated = Some(image.clone());

    send(
        tx,
        ctx,
        WorkerResult::DetectionComplete {
            path: path.to_path_buf(),
            report,
            annotated: image,
            elapsed: start.elapsed(),
        },
    );
}

fn send_detection_failed(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, message: String) {
    send(tx, ctx, WorkerResult::DetectionFailed { message });
}

pub(super) fn handle_save_annotated(
    path: &Path,
    annotated: Option<&RgbImage>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let Some(image) = annotated else {
        send_error(tx, ctx, "No annotated image to save");
        return;
    };
    match save_image(image, path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Failed to save {}: {e}", path.display())),
    }
}
