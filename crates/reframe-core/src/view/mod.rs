pub mod guide;
pub mod state;
pub mod target;

pub use guide::{fit_rect, GuideRect};
pub use state::{ViewState, ZoomDirection};
pub use target::{SizePreset, TargetSelection, TargetSize};
