use tiny_skia::{
    Color, FilterQuality, Paint, PathBuilder, Pattern, Rect, SpreadMode, Stroke, Transform,
};
use tracing::debug;

use crate::config::{ExportScaleMode, GuideConfig};
use crate::error::Result;
use crate::io::source::SourceImage;
use crate::render::mapping::{export_transform, preview_transform, SurfaceTransform};
use crate::render::surface::Surface;
use crate::view::{GuideRect, TargetSize, ViewState};

/// Redraw the preview: image under the current view transform, then the
/// crop guide for `target`. Leaves the surface transparent if nothing is loaded.
pub fn render_preview(
    surface: &mut Surface,
    view: &ViewState,
    source: Option<&SourceImage>,
    target: TargetSize,
    guide: &GuideConfig,
) {
    surface.clear();

    let Some(source) = source.filter(|_| view.image_loaded) else {
        return;
    };

    let (w, h) = (surface.width(), surface.height());
    draw_centered(surface, source.surface(), preview_transform(view, w, h));

    let rect = GuideRect::centered(w, h, target.width, target.height);
    stroke_guide(surface, &rect, guide);
}

/// Rasterize the current framing at `target` resolution on an opaque white
/// background.
pub fn render_export(
    view: &ViewState,
    source: &SourceImage,
    target: TargetSize,
    preview_w: u32,
    preview_h: u32,
    mode: ExportScaleMode,
) -> Result<Surface> {
    let mut surface = Surface::new(target.width, target.height)?;
    surface.fill(Color::WHITE);

    let transform = export_transform(view, preview_w, preview_h, target, mode);
    debug!(
        scale = transform.scale,
        tx = transform.translate_x,
        ty = transform.translate_y,
        %mode,
        "Rendering export surface"
    );
    draw_centered(&mut surface, source.surface(), transform);

    Ok(surface)
}

/// Draw `image` with its center at the transform origin, bicubic-filtered.
fn draw_centered(dst: &mut Surface, image: &Surface, transform: SurfaceTransform) {
    let w = image.width() as f32;
    let h = image.height() as f32;
    let Some(rect) = Rect::from_xywh(-w / 2.0, -h / 2.0, w, h) else {
        return;
    };

    let shader = Pattern::new(
        image.pixmap().as_ref(),
        SpreadMode::Pad,
        FilterQuality::Bicubic,
        1.0,
        Transform::from_translate(-w / 2.0, -h / 2.0),
    );
    let paint = Paint {
        shader,
        anti_alias: true,
        ..Paint::default()
    };

    dst.pixmap_mut()
        .fill_rect(rect, &paint, transform.to_skia(), None);
}

fn stroke_guide(surface: &mut Surface, rect: &GuideRect, guide: &GuideConfig) {
    if guide.line_width <= 0.0 {
        return;
    }
    let Some(r) = Rect::from_xywh(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    ) else {
        return;
    };

    let path = PathBuilder::from_rect(r);
    let mut paint = Paint::default();
    let [red, green, blue] = guide.color;
    paint.set_color_rgba8(red, green, blue, 255);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: guide.line_width,
        ..Stroke::default()
    };
    surface
        .pixmap_mut()
        .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}
