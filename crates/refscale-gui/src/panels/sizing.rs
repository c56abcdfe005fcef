use refscale_core::consts::CIRCLE_PEN_WIDTH;
use refscale_core::display::reference::slider_tick_range;
use refscale_core::display::{CanvasArea, ReferenceCircle};

use crate::app::RefscaleApp;
use crate::states::screen_metrics;

pub fn show(ctx: &egui::Context, app: &mut RefscaleApp) {
    egui::TopBottomPanel::bottom("sizing_controls").show(ctx, |ui| {
        ui.add_space(4.0);
        show_slider(ui, app);
        ui.label(app.sizing.circle.readout());
        show_calibration(ui, app);
        ui.add_space(4.0);
        super::nav_buttons(ui, app);
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(ref source) = app.sizing.source {
            ui.label(source);
        }
        show_canvas(ctx, ui, app);
    });
}

fn show_slider(ui: &mut egui::Ui, app: &mut RefscaleApp) {
    let (min, max) = slider_tick_range();
    let mut ticks = app.sizing.circle.slider_ticks();
    ui.spacing_mut().slider_width = ui.available_width();
    let response = ui.add(egui::Slider::new(&mut ticks, min..=max).show_value(false));
    if response.changed() {
        app.sizing.circle = ReferenceCircle::from_slider_ticks(ticks);
        app.sizing.source = None;
    }
}

fn show_calibration(ui: &mut egui::Ui, app: &mut RefscaleApp) {
    egui::CollapsingHeader::new("Display calibration").show(ui, |ui| {
        let display = &mut app.config.display;
        ui.horizontal(|ui| {
            ui.label("Screen width");
            ui.add(
                egui::DragValue::new(&mut display.physical_width_mm)
                    .range(0.0..=3000.0)
                    .speed(1.0)
                    .suffix(" mm"),
            );
            ui.small("(0 = unknown)");
        });
        ui.horizontal(|ui| {
            ui.label("Logical DPI");
            ui.add(
                egui::DragValue::new(&mut display.logical_dpi)
                    .range(1.0..=1000.0)
                    .speed(1.0),
            );
        });
    });
}

fn show_canvas(ctx: &egui::Context, ui: &mut egui::Ui, app: &RefscaleApp) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

    let monitor_width = ctx.input(|i| i.viewport().monitor_size).map(|s| s.x);
    let metrics = screen_metrics(&app.config.display, monitor_width);
    let area = CanvasArea::new(rect.width(), rect.height(), app.config.display.canvas_margin);
    let layout = app.sizing.circle.layout(&metrics, &area);

    let origin = rect.min.to_vec2();
    let stroke = egui::Stroke::new(CIRCLE_PEN_WIDTH, egui::Color32::BLACK);
    let (left, top, size) = layout.bounding_box();
    let bounds = egui::Rect::from_min_size(egui::pos2(left, top) + origin, egui::vec2(size, size));
    painter.circle_stroke(bounds.center(), bounds.width() / 2.0, stroke);

    let ((x0, y0), (x1, y1)) = layout.diameter_line();
    painter.line_segment(
        [egui::pos2(x0, y0) + origin, egui::pos2(x1, y1) + origin],
        stroke,
    );

    if layout.is_clamped() {
        painter.text(
            rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            "Too large for the window, shown smaller than true size",
            egui::FontId::proportional(13.0),
            egui::Color32::from_rgb(200, 0, 0),
        );
    }
}
