/// Width of the fixed preview surface, in pixels.
pub const PREVIEW_WIDTH: u32 = 500;

/// Height of the fixed preview surface, in pixels.
pub const PREVIEW_HEIGHT: u32 = 300;

/// Scale multiplier for one wheel tick in the zoom-in direction.
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Scale multiplier for one wheel tick in the zoom-out direction.
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

/// Target size selected when the widget starts.
pub const DEFAULT_TARGET_WIDTH: u32 = 1400;
pub const DEFAULT_TARGET_HEIGHT: u32 = 700;

/// "Listing Content" preset dimensions.
pub const LISTING_WIDTH: u32 = 250;
pub const LISTING_HEIGHT: u32 = 400;

/// "Header" preset dimensions.
pub const HEADER_WIDTH: u32 = 1400;
pub const HEADER_HEIGHT: u32 = 700;

/// Fallback for a blank or non-numeric custom width field.
pub const CUSTOM_FALLBACK_WIDTH: u32 = 800;

/// Fallback for a blank or non-numeric custom height field.
pub const CUSTOM_FALLBACK_HEIGHT: u32 = 600;

/// JPEG quality factor in (0, 1].
pub const JPEG_QUALITY: f32 = 0.92;

/// Prefix of synthesized export file names.
pub const EXPORT_FILE_PREFIX: &str = "resized";

/// MIME type of the exported payload.
pub const EXPORT_MIME_TYPE: &str = "image/jpeg";

/// Crop-guide stroke color (#888).
pub const GUIDE_COLOR: [u8; 3] = [0x88, 0x88, 0x88];

/// Crop-guide stroke width, in preview pixels.
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// Minimum pixel count (w*h) to use Rayon parallelism for pixel conversion.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
