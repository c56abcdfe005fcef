use std::sync::mpsc;

use image::RgbImage;
use refscale_core::config::AppConfig;

use crate::convert::rgb_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{CoinState, DetectState, SizingState, UIState, View};
use crate::workers;

pub struct RefscaleApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub view: View,
    /// View whose title the window currently carries.
    titled_view: View,
    pub config: AppConfig,
    pub ui_state: UIState,
    pub sizing: SizingState,
    pub coins: CoinState,
    pub detect: DetectState,
    pub show_about: bool,
}

impl RefscaleApp {
    pub fn new(ctx: &egui::Context) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;
        let config = AppConfig::default();
        let mut sizing = SizingState::default();
        sizing.reset(&config.display);

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            view: View::default(),
            titled_view: View::default(),
            config,
            ui_state: UIState::default(),
            sizing,
            coins: CoinState::default(),
            detect: DetectState::default(),
            show_about: false,
        })
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::PhotoChosen { path } => {
                    self.start_detection(path);
                }
                WorkerResult::DetectionComplete {
                    path,
                    report,
                    annotated,
                    elapsed,
                } => {
                    self.ui_state.busy = false;
                    self.ui_state.add_log(format!(
                        "{}: {} candidates, {} near center ({})",
                        path.display(),
                        report.candidates.len(),
                        report.kept.len(),
                        format_duration(elapsed)
                    ));
                    self.update_preview_texture(ctx, &annotated);
                    self.detect.status = Some(if report.kept.is_empty() {
                        "No circles detected".to_string()
                    } else {
                        format!("{} circle(s) near the center", report.kept.len())
                    });
                    self.detect.path = Some(path);
                    self.detect.report = Some(report);
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = config;
                    self.sizing.reset(&self.config.display);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::DetectionFailed { message } => {
                    self.ui_state.report_error(&message, true);
                    self.detect.status = Some("Detection failed".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.report_error(&message, false);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_preview_texture(&mut self, ctx: &egui::Context, rgb: &RgbImage) {
        let image = rgb_to_color_image(rgb);
        let texture = ctx.load_texture("detection", image, egui::TextureOptions::LINEAR);
        self.detect.texture = Some(texture);
    }

    /// Run detection on `path` with the current detection settings.
    pub fn start_detection(&mut self, path: std::path::PathBuf) {
        if let Err(e) = self.config.detection.validate() {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        self.ui_state.busy = true;
        self.detect.status = Some("Detecting...".into());
        self.send_command(WorkerCommand::Detect {
            path,
            config: self.config.detection.clone(),
        });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        if self.titled_view != self.view {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.view.title().into()));
            self.titled_view = self.view;
        }
    }
}

impl eframe::App for RefscaleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        // The sizing canvas keeps the full height for the circle.
        if self.view != View::CircleSizing {
            panels::status::show(ctx, self);
        }
        match self.view {
            View::Menu => panels::menu::show(ctx, self),
            View::CircleSizing => panels::sizing::show(ctx, self),
            View::CoinReference => panels::coins::show(ctx, self),
            View::Detection => panels::detect::show(ctx, self),
        }
        self.sync_title(ctx);

        // About dialog
        if self.show_about {
            egui::Window::new("About RefScale")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("RefScale");
                        ui.label("True-size reference circles and circle detection");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
