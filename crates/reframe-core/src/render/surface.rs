use std::io::Cursor;

use image::{ImageFormat, RgbImage, RgbaImage};
use rayon::prelude::*;
use tiny_skia::{Color, ColorU8, Pixmap, PremultipliedColorU8};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{ReframeError, Result};

/// A fixed-size RGBA raster that the engine draws into.
///
/// Pixels are stored premultiplied, as tiny-skia requires.
#[derive(Clone, Debug)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a transparent surface. Fails for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(ReframeError::SurfaceUnavailable { width, height })?;
        Ok(Self { pixmap })
    }

    /// Build a surface from straight-alpha RGBA pixels.
    pub fn from_rgba(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let mut surface = Self::new(width, height)?;
        let src = image.as_raw();
        let dst = surface.pixmap.pixels_mut();

        if dst.len() >= PARALLEL_PIXEL_THRESHOLD {
            dst.par_iter_mut()
                .zip(src.par_chunks_exact(4))
                .for_each(|(d, s)| *d = premultiply(s));
        } else {
            dst.iter_mut()
                .zip(src.chunks_exact(4))
                .for_each(|(d, s)| *d = premultiply(s));
        }

        Ok(surface)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Straight-alpha RGBA value at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// True if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let pixels = self.pixmap.pixels();
        let data: Vec<u8> = if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
            pixels.par_iter().flat_map_iter(|p| demultiply_rgba(*p)).collect()
        } else {
            pixels.iter().flat_map(|p| demultiply_rgba(*p)).collect()
        };
        RgbaImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| ReframeError::Encode("RGBA buffer size mismatch".into()))
    }

    /// Drop alpha. Only meaningful for surfaces painted over an opaque fill.
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        let pixels = self.pixmap.pixels();
        let data: Vec<u8> = if pixels.len() >= PARALLEL_PIXEL_THRESHOLD {
            pixels.par_iter().flat_map_iter(|p| demultiply_rgb(*p)).collect()
        } else {
            pixels.iter().flat_map(|p| demultiply_rgb(*p)).collect()
        };
        RgbImage::from_raw(self.width(), self.height(), data)
            .ok_or_else(|| ReframeError::Encode("RGB buffer size mismatch".into()))
    }

    /// Encode as PNG, keeping transparency.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let rgba = self.to_rgba_image()?;
        let mut bytes = Cursor::new(Vec::new());
        rgba.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }
}

fn premultiply(rgba: &[u8]) -> PremultipliedColorU8 {
    ColorU8::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3]).premultiply()
}

fn demultiply_rgba(p: PremultipliedColorU8) -> [u8; 4] {
    let c = p.demultiply();
    [c.red(), c.green(), c.blue(), c.alpha()]
}

fn demultiply_rgb(p: PremultipliedColorU8) -> [u8; 3] {
    let c = p.demultiply();
    [c.red(), c.green(), c.blue()]
}
