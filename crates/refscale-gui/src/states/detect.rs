use std::path::PathBuf;

use refscale_core::detection::DetectionReport;

/// Photo detection screen state.
#[derive(Default)]
pub struct DetectState {
    pub path: Option<PathBuf>,
    pub report: Option<DetectionReport>,
    pub texture: Option<egui::TextureHandle>,
    pub status: Option<String>,
}
