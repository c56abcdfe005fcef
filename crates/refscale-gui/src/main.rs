mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use states::View;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 700.0])
            .with_min_inner_size([400.0, 400.0])
            .with_title(View::default().title()),
        ..Default::default()
    };

    eframe::run_native(
        "RefScale",
        options,
        Box::new(|cc| Ok(Box::new(app::RefscaleApp::new(&cc.egui_ctx)?))),
    )
}
