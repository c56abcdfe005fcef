pub mod coins;
pub mod detect;
pub mod menu;
pub mod menu_bar;
pub mod sizing;
pub mod status;

/// Row of "Return to Menu" and "Exit Program" buttons shared by the screens.
pub(crate) fn nav_buttons(ui: &mut egui::Ui, app: &mut crate::app::RefscaleApp) {
    ui.horizontal(|ui| {
        if ui.button("Return to Menu").clicked() {
            app.set_view(app.view.back());
        }
        if ui.button("Exit Program").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
