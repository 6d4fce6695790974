use tracing::debug;

use crate::config::ZoomConfig;

/// Pan/zoom transform applied to the source image in preview space.
///
/// `offset_x`/`offset_y` are preview pixels relative to the preview center.
/// Offsets are unbounded: panning the image fully out of view is allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub image_loaded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            image_loaded: false,
        }
    }
}

/// Direction of one wheel tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Negative wheel delta (scrolling up) zooms in; anything else zooms out.
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            Self::In
        } else {
            Self::Out
        }
    }

    pub fn factor(self, zoom: &ZoomConfig) -> f64 {
        match self {
            Self::In => zoom.zoom_in_factor,
            Self::Out => zoom.zoom_out_factor,
        }
    }
}

/// Scale that shows the whole image inside the preview without cropping.
pub fn fit_scale(preview_w: u32, preview_h: u32, image_w: u32, image_h: u32) -> f64 {
    let fit_x = preview_w as f64 / image_w as f64;
    let fit_y = preview_h as f64 / image_h as f64;
    fit_x.min(fit_y)
}

/// The single place scale limits are enforced. With no limits configured the
/// scale passes through untouched.
///
/// Unbounded zoom-out multiplies by `zoom_out_factor` each tick, so after
/// roughly 14 500 ticks at 0.95 the scale underflows to subnormals and then
/// to `0.0`, from which zoom-in cannot recover. Setting `min_scale` is the
/// way to keep the scale strictly positive.
pub fn constrain_scale(scale: f64, zoom: &ZoomConfig) -> f64 {
    let mut s = scale;
    if let Some(min) = zoom.min_scale {
        s = s.max(min);
    }
    if let Some(max) = zoom.max_scale {
        s = s.min(max);
    }
    s
}

impl ViewState {
    /// Reset for a freshly decoded image: fit it to the preview, center it.
    pub fn fit_image(&mut self, preview_w: u32, preview_h: u32, image_w: u32, image_h: u32) {
        self.scale = fit_scale(preview_w, preview_h, image_w, image_h);
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.image_loaded = true;
        debug!(scale = self.scale, image_w, image_h, "View fitted to image");
    }

    /// Add a pointer delta (preview pixels) to the pan offset.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiply the scale by one wheel tick in `direction`.
    pub fn apply_zoom(&mut self, direction: ZoomDirection, zoom: &ZoomConfig) {
        let next = self.scale * direction.factor(zoom);
        self.scale = constrain_scale(next, zoom);
        debug!(?direction, scale = self.scale, "Zoom applied");
    }
}
