use refscale_core::display::Coin;

use crate::app::RefscaleApp;
use crate::states::View;

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading("Pick a coin");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                for coin in Coin::ALL {
                    let selected = app.coins.selected == Some(coin);
                    if ui.selectable_label(selected, coin.name()).clicked() {
                        app.coins.selected = Some(coin);
                    }
                }
            });

            ui.add_space(12.0);
            ui.label(app.coins.label());
            ui.add_space(12.0);

            let chosen = app.coins.selected;
            if ui
                .add_enabled(chosen.is_some(), egui::Button::new("Show on Screen"))
                .clicked()
            {
                if let Some(coin) = chosen {
                    app.sizing.show_coin(coin.name(), coin.diameter_mm());
                    app.set_view(View::CircleSizing);
                }
            }

            ui.add_space(24.0);
            super::nav_buttons(ui, app);
        });
    });
}
