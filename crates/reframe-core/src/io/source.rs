use std::path::Path;

use image::ImageFormat;
use tracing::info;

use crate::error::{ReframeError, Result};
use crate::render::surface::Surface;

/// MIME type reported for files whose format cannot be determined.
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// A file picked by the user, before decoding.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving its MIME type from the extension or,
    /// failing that, the content.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let mime_type = ImageFormat::from_path(path)
            .or_else(|_| image::guess_format(&bytes))
            .map(|f| f.to_mime_type())
            .unwrap_or(UNKNOWN_MIME_TYPE);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self::new(name, mime_type, bytes))
    }

    /// The file picker only accepts `image/*`.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }

    pub fn require_image(&self) -> Result<()> {
        if self.is_image() {
            Ok(())
        } else {
            Err(ReframeError::UnsupportedMediaType(self.mime_type.clone()))
        }
    }
}

/// A decoded bitmap, ready to be drawn. Dimensions never change after load.
#[derive(Clone, Debug)]
pub struct SourceImage {
    surface: Surface,
}

impl SourceImage {
    /// Decode an encoded image (any format the `image` crate reads).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)?;
        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(ReframeError::InvalidDimensions { width, height });
        }

        let surface = Surface::from_rgba(&decoded.to_rgba8())?;
        info!(width, height, "Source image decoded");
        Ok(Self { surface })
    }

    pub fn from_surface(surface: Surface) -> Self {
        Self { surface }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}
