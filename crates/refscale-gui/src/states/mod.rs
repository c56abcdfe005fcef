mod coins;
mod detect;
mod sizing;
mod ui;
mod view;

pub use coins::CoinState;
pub use detect::DetectState;
pub use sizing::{screen_metrics, SizingState};
pub use ui::UIState;
pub use view::View;
