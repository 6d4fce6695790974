use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use image::codecs::jpeg::JpegEncoder;
use tracing::info;

use crate::config::ExportConfig;
use crate::consts::EXPORT_MIME_TYPE;
use crate::error::Result;
use crate::render::surface::Surface;
use crate::view::TargetSize;

/// The encoded result of the last export action.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportResult {
    /// Raw JPEG bytes.
    pub payload: Vec<u8>,
    /// `data:image/jpeg;base64,...` form of `payload`.
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl ExportResult {
    /// Encode an export surface. `timestamp` goes into the file name.
    pub fn encode(
        surface: &Surface,
        target: TargetSize,
        config: &ExportConfig,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let payload = encode_jpeg(surface, config.jpeg_quality_percent())?;
        let data_uri = to_data_uri(EXPORT_MIME_TYPE, &payload);
        let file_name = export_file_name(&config.file_prefix, target, timestamp);

        info!(
            width = target.width,
            height = target.height,
            bytes = payload.len(),
            file = %file_name,
            "Export encoded"
        );

        Ok(Self {
            payload,
            data_uri,
            width: target.width,
            height: target.height,
            file_name,
        })
    }
}

/// JPEG-encode a surface. Alpha is dropped; callers paint an opaque
/// background first.
pub fn encode_jpeg(surface: &Surface, quality: u8) -> Result<Vec<u8>> {
    let rgb = surface.to_rgb_image()?;
    let mut bytes = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality))?;
    Ok(bytes)
}

pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", BASE64.encode(bytes))
}

/// ISO-8601 UTC timestamp with millisecond precision, with `:` and `.`
/// replaced so it is safe in file names.
pub fn file_safe_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// `<prefix>-<width>x<height>-<timestamp>.jpg`
pub fn export_file_name(prefix: &str, target: TargetSize, timestamp: DateTime<Utc>) -> String {
    format!(
        "{prefix}-{}x{}-{}.jpg",
        target.width,
        target.height,
        file_safe_timestamp(timestamp)
    )
}
