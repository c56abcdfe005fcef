use crate::app::RefscaleApp;

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if app.ui_state.busy {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text("Detecting...")
                    .animate(true),
            );
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.add_space(2.0);
    });
}
