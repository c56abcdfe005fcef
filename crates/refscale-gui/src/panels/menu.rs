use crate::app::RefscaleApp;
use crate::states::View;

const BUTTON_SIZE: [f32; 2] = [220.0, 40.0];

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.heading("Choose a reference");
            ui.add_space(16.0);

            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Keyring")).clicked() {
                app.sizing.reset(&app.config.display);
                app.set_view(View::CircleSizing);
            }
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("U.S. Coin")).clicked() {
                app.set_view(View::CoinReference);
            }
            if ui
                .add_sized(BUTTON_SIZE, egui::Button::new("Detect from Photo"))
                .clicked()
            {
                app.set_view(View::Detection);
            }
            ui.add_space(16.0);
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Exit")).clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
