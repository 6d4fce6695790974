#![allow(dead_code)]

use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

use image::{ImageFormat, Rgba, RgbaImage};
use reframe_core::config::WidgetConfig;
use reframe_core::io::SelectedFile;
use reframe_core::ImageResizerWidget;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Encode a solid-color RGBA image as PNG bytes.
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode PNG");
    buf.into_inner()
}

/// A selected PNG file with the right MIME type.
pub fn png_file(name: &str, width: u32, height: u32, color: [u8; 4]) -> SelectedFile {
    SelectedFile::new(name, "image/png", solid_png(width, height, color))
}

/// Build a widget with a notifier that counts its calls.
pub fn counting_widget(config: WidgetConfig) -> (ImageResizerWidget, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let widget = ImageResizerWidget::init(config, move || counter.set(counter.get() + 1))
        .expect("widget init");
    (widget, calls)
}

/// Widget with default config and a solid image already loaded.
pub fn widget_with_image(
    width: u32,
    height: u32,
    color: [u8; 4],
) -> (ImageResizerWidget, Rc<Cell<usize>>) {
    let (mut widget, calls) = counting_widget(WidgetConfig::default());
    widget
        .load_file(png_file("source.png", width, height, color))
        .expect("load image");
    (widget, calls)
}

/// Per-channel closeness for lossy (JPEG) comparisons.
pub fn near(actual: [u8; 3], expected: [u8; 3], tolerance: u8) -> bool {
    actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance)
}

/// Same as [`near`] for an optional straight-alpha RGBA pixel.
pub fn near_rgba(actual: Option<[u8; 4]>, expected: [u8; 4], tolerance: u8) -> bool {
    actual.is_some_and(|a| a.iter().zip(expected.iter()).all(|(a, e)| a.abs_diff(*e) <= tolerance))
}
