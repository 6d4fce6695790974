//! Preview-to-export coordinate mapping.
//!
//! Both render paths draw the image centered on an origin placed at the
//! surface center plus the pan offset, scaled uniformly. The export path
//! reuses the preview transform multiplied by a single scale ratio.

use tiny_skia::Transform;

use crate::config::ExportScaleMode;
use crate::view::{GuideRect, TargetSize, ViewState};

/// Uniform scale about an origin at (`translate_x`, `translate_y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl SurfaceTransform {
    /// Map a point given relative to the image center onto the surface.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.translate_x + x * self.scale,
            self.translate_y + y * self.scale,
        )
    }

    pub fn to_skia(&self) -> Transform {
        Transform::from_translate(self.translate_x as f32, self.translate_y as f32)
            .pre_scale(self.scale as f32, self.scale as f32)
    }
}

/// Transform used for the interactive preview.
pub fn preview_transform(view: &ViewState, preview_w: u32, preview_h: u32) -> SurfaceTransform {
    SurfaceTransform {
        translate_x: preview_w as f64 / 2.0 + view.offset_x,
        translate_y: preview_h as f64 / 2.0 + view.offset_y,
        scale: view.scale,
    }
}

/// Factor converting preview pixels into export pixels.
pub fn export_scale_ratio(
    mode: ExportScaleMode,
    preview_w: u32,
    preview_h: u32,
    target: TargetSize,
) -> f64 {
    match mode {
        ExportScaleMode::PreviewWidth => target.width as f64 / preview_w as f64,
        ExportScaleMode::GuideMatched => {
            let guide = GuideRect::centered(preview_w, preview_h, target.width, target.height);
            target.width as f64 / guide.width
        }
    }
}

/// Transform used for the export surface: the preview transform with the
/// offset and scale multiplied by [`export_scale_ratio`].
pub fn export_transform(
    view: &ViewState,
    preview_w: u32,
    preview_h: u32,
    target: TargetSize,
    mode: ExportScaleMode,
) -> SurfaceTransform {
    let ratio = export_scale_ratio(mode, preview_w, preview_h, target);
    SurfaceTransform {
        translate_x: target.width as f64 / 2.0 + view.offset_x * ratio,
        translate_y: target.height as f64 / 2.0 + view.offset_y * ratio,
        scale: view.scale * ratio,
    }
}
