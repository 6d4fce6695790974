use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReframeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Cannot allocate a {width}x{height} render surface")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReframeError>;
