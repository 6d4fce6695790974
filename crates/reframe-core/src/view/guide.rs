/// Crop-guide rectangle in preview pixels, centered on the preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Largest `target_w:target_h` rectangle that fits inside the container.
///
/// When the container is wider than the target aspect the height is the
/// limiting side; otherwise the width is.
pub fn fit_rect(container_w: f64, container_h: f64, target_w: f64, target_h: f64) -> (f64, f64) {
    let target_ar = target_w / target_h;
    let container_ar = container_w / container_h;

    if container_ar > target_ar {
        (container_h * target_ar, container_h)
    } else {
        (container_w, container_w / target_ar)
    }
}

impl GuideRect {
    /// Guide for a `target_w`x`target_h` export inside a preview surface.
    pub fn centered(preview_w: u32, preview_h: u32, target_w: u32, target_h: u32) -> Self {
        let (pw, ph) = (preview_w as f64, preview_h as f64);
        let (width, height) = fit_rect(pw, ph, target_w as f64, target_h as f64);
        Self {
            x: (pw - width) / 2.0,
            y: (ph - height) / 2.0,
            width,
            height,
        }
    }
}
