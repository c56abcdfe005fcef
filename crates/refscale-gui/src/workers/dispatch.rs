use std::sync::mpsc;

use image::RgbImage;

use crate::messages::{WorkerCommand, WorkerResult};

use super::detect;

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("refscale-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    // Last annotated photo, kept for "Save Annotated".
    let mut annotated: Option<RgbImage> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Detect { path, config } => {
                detect::handle_detect(&path, &config, &mut annotated, &tx, &ctx);
            }
            WorkerCommand::SaveAnnotated { path } => {
                detect::handle_save_annotated(&path, annotated.as_ref(), &tx, &ctx);
            }
        }
    }
}
