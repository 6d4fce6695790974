use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    EXPORT_FILE_PREFIX, GUIDE_COLOR, GUIDE_LINE_WIDTH, JPEG_QUALITY, PREVIEW_HEIGHT,
    PREVIEW_WIDTH, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::error::{ReframeError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub guide: GuideConfig,
}

impl WidgetConfig {
    /// Reject values the render and interaction paths cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(ReframeError::Config(format!(
                "preview size must be non-zero, got {}x{}",
                self.preview.width, self.preview.height
            )));
        }

        for (name, factor) in [
            ("zoom_in_factor", self.zoom.zoom_in_factor),
            ("zoom_out_factor", self.zoom.zoom_out_factor),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(ReframeError::Config(format!(
                    "{name} must be a positive number, got {factor}"
                )));
            }
        }

        for (name, limit) in [
            ("min_scale", self.zoom.min_scale),
            ("max_scale", self.zoom.max_scale),
        ] {
            if let Some(v) = limit {
                if !v.is_finite() || v <= 0.0 {
                    return Err(ReframeError::Config(format!(
                        "{name} must be a positive number, got {v}"
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.zoom.min_scale, self.zoom.max_scale) {
            if min > max {
                return Err(ReframeError::Config(format!(
                    "min_scale ({min}) exceeds max_scale ({max})"
                )));
            }
        }

        let q = self.export.jpeg_quality;
        if !(q > 0.0 && q <= 1.0) {
            return Err(ReframeError::Config(format!(
                "jpeg_quality must be in (0, 1], got {q}"
            )));
        }

        if self.guide.line_width.is_nan() || self.guide.line_width < 0.0 {
            return Err(ReframeError::Config(format!(
                "guide line_width must be >= 0, got {}",
                self.guide.line_width
            )));
        }

        Ok(())
    }
}

/// Fixed pixel size of the interactive preview surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: PREVIEW_WIDTH,
            height: PREVIEW_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Lower scale bound. `None` leaves zoom-out unbounded.
    pub min_scale: Option<f64>,
    /// Upper scale bound. `None` leaves zoom-in unbounded.
    pub max_scale: Option<f64>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            min_scale: None,
            max_scale: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// JPEG quality factor in (0, 1].
    pub jpeg_quality: f32,
    pub scale_mode: ExportScaleMode,
    pub file_prefix: String,
}

impl ExportConfig {
    /// Quality on the 1..=100 scale used by the JPEG encoder.
    pub fn jpeg_quality_percent(&self) -> u8 {
        (self.jpeg_quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: JPEG_QUALITY,
            scale_mode: ExportScaleMode::default(),
            file_prefix: EXPORT_FILE_PREFIX.to_string(),
        }
    }
}

/// How the preview transform is mapped onto the export surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportScaleMode {
    /// `export_width / preview_width`. Matches the preview framing only when
    /// the crop guide spans the full preview width; vertical framing drifts
    /// when the guide is height-limited.
    #[default]
    PreviewWidth,
    /// Corrected mode: `export_width / guide_width`, so the exported image
    /// is exactly the region inside the crop guide.
    GuideMatched,
}

impl fmt::Display for ExportScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreviewWidth => write!(f, "Preview width"),
            Self::GuideMatched => write!(f, "Guide matched (corrected)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Stroke color as RGB.
    pub color: [u8; 3],
    pub line_width: f32,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            color: GUIDE_COLOR,
            line_width: GUIDE_LINE_WIDTH,
        }
    }
}
