use std::path::Path;

use anyhow::{Context, Result};
use refscale_core::config::AppConfig;

use crate::app::RefscaleApp;
use crate::messages::WorkerResult;
use crate::states::View;
use crate::workers::{send, send_error};

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.config = AppConfig::default();
                    app.sizing.reset(&app.config.display);
                    app.ui_state.add_log("Config reset to defaults".into());
                }
            });

            ui.menu_button("View", |ui| {
                for view in [
                    View::Menu,
                    View::CircleSizing,
                    View::CoinReference,
                    View::Detection,
                ] {
                    if ui.radio(app.view == view, view.title()).clicked() {
                        ui.close();
                        app.set_view(view);
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_image(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_image(ctx: &egui::Context, app: &mut RefscaleApp) {
    if app.ui_state.busy {
        return;
    }
    app.set_view(View::Detection);
    super::detect::open_image(ctx, app);
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn import_config(ctx: &egui::Context, app: &RefscaleApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        match read_config(&path) {
            Ok(config) => send(&result_tx, &ctx, WorkerResult::ConfigImported { config }),
            Err(e) => send_error(&result_tx, &ctx, format!("{e:#}")),
        }
    });
}

fn export_config(ctx: &egui::Context, app: &RefscaleApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    let config = app.config.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("refscale.toml")
            .save_file()
        else {
            return;
        };
        let written = toml::to_string_pretty(&config)
            .context("Failed to serialize config")
            .and_then(|content| {
                std::fs::write(&path, content)
                    .with_context(|| format!("Failed to write {}", path.display()))
            });
        match written {
            Ok(()) => send(
                &result_tx,
                &ctx,
                WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
            ),
            Err(e) => send_error(&result_tx, &ctx, format!("{e:#}")),
        }
    });
}
