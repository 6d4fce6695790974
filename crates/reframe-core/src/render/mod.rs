pub mod engine;
pub mod mapping;
pub mod surface;

pub use engine::{render_export, render_preview};
pub use mapping::{export_scale_ratio, export_transform, preview_transform, SurfaceTransform};
pub use surface::Surface;
