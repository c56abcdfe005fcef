use refscale_core::detection::ProximityMode;

use crate::app::RefscaleApp;
use crate::messages::{WorkerCommand, WorkerResult};

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::SidePanel::left("detect_controls")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            show_actions(ui, app);
            ui.separator();
            show_params(ui, app);
            ui.separator();
            show_candidates(ui, app);
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.add_space(4.0);
                super::nav_buttons(ui, app);
            });
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        match app.detect.texture {
            Some(ref texture) => {
                let tex_size = texture.size_vec2();
                let scale = (rect.width() / tex_size.x)
                    .min(rect.height() / tex_size.y)
                    .min(1.0);
                let img_rect = egui::Rect::from_center_size(rect.center(), tex_size * scale);
                ui.painter().image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Open a photo to find the circle in its center")
                            .size(16.0)
                            .color(egui::Color32::from_gray(100)),
                    );
                });
            }
        }
    });
}

fn show_actions(ui: &mut egui::Ui, app: &mut RefscaleApp) {
    let idle = !app.ui_state.busy;
    if ui
        .add_enabled(idle, egui::Button::new("Open Image..."))
        .clicked()
    {
        open_image(ui.ctx(), app);
    }

    let rerun = idle && app.detect.path.is_some();
    if ui.add_enabled(rerun, egui::Button::new("Detect Again")).clicked() {
        if let Some(path) = app.detect.path.clone() {
            app.start_detection(path);
        }
    }

    let can_save = idle && app.detect.texture.is_some();
    if ui
        .add_enabled(can_save, egui::Button::new("Save Annotated..."))
        .clicked()
    {
        save_annotated(app);
    }

    if let Some(ref status) = app.detect.status {
        ui.small(status);
    }
}

fn show_params(ui: &mut egui::Ui, app: &mut RefscaleApp) {
    let config = &mut app.config.detection;
    ui.strong("Detection");
    egui::Grid::new("detect_params")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Min radius");
            ui.add(egui::DragValue::new(&mut config.hough.min_radius).range(0..=10_000));
            ui.end_row();

            ui.label("Max radius");
            ui.add(egui::DragValue::new(&mut config.hough.max_radius).range(0..=10_000));
            ui.end_row();

            ui.label("Vote threshold");
            ui.add(
                egui::DragValue::new(&mut config.hough.param2)
                    .range(1.0..=1000.0)
                    .speed(0.5),
            );
            ui.end_row();

            ui.label("Tolerance");
            ui.add(
                egui::DragValue::new(&mut config.center.tolerance)
                    .range(0.0..=10_000.0)
                    .suffix(" px"),
            );
            ui.end_row();

            ui.label("Proximity");
            egui::ComboBox::from_id_salt("proximity_mode")
                .selected_text(config.center.mode.to_string())
                .show_ui(ui, |ui| {
                    for mode in [ProximityMode::PerAxis, ProximityMode::Radial] {
                        ui.selectable_value(&mut config.center.mode, mode, mode.to_string());
                    }
                });
            ui.end_row();
        });
}

fn show_candidates(ui: &mut egui::Ui, app: &RefscaleApp) {
    let Some(ref report) = app.detect.report else {
        return;
    };
    ui.strong(format!(
        "Near center ({}x{}, center {} {})",
        report.width, report.height, report.center.x, report.center.y
    ));
    egui::ScrollArea::vertical()
        .max_height(160.0)
        .show(ui, |ui| {
            if report.kept.is_empty() {
                ui.label("No circles detected");
            }
            for circle in &report.kept {
                ui.monospace(circle.to_string());
            }
        });
}

pub(crate) fn open_image(ctx: &egui::Context, app: &RefscaleApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::PhotoChosen { path });
            ctx.request_repaint();
        }
    });
}

fn save_annotated(app: &RefscaleApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .set_file_name("detected.png")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveAnnotated { path });
        }
    });
}
