pub mod coins;
pub mod convert;
pub mod metrics;
pub mod reference;

pub use coins::Coin;
pub use convert::{fit_diameter, mm_to_px};
pub use metrics::{CanvasArea, ScreenMetrics};
pub use reference::{CircleLayout, ReferenceCircle};
