use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::Args;
use reframe_core::WidgetEvent;

use super::framing::{build_widget, write_preview, FramingArgs};
use crate::summary::print_export_summary;

#[derive(Args)]
pub struct ExportArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub framing: FramingArgs,

    /// Directory to write the exported JPEG into
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Also save the framed preview as PNG
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Print the widget outputs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Frame, export and save. Returns the path of the written JPEG.
pub fn export_to_disk(args: &ExportArgs) -> Result<PathBuf> {
    let notified = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notified);
    let mut widget = build_widget(&args.file, &args.framing, move || {
        counter.set(counter.get() + 1)
    })?;

    let effect = widget.dispatch(WidgetEvent::ExportRequested)?;
    let Some(result) = widget.last_export().filter(|_| notified.get() > 0) else {
        bail!("Export produced no output ({effect:?})");
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;
    let out_path = args.out_dir.join(&result.file_name);
    std::fs::write(&out_path, &result.payload)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    if let Some(ref path) = args.preview {
        write_preview(widget.preview(), path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&widget.get_outputs())?);
    } else {
        print_export_summary(&widget, &args.file, &out_path, args.preview.as_deref());
    }

    widget.destroy();
    Ok(out_path)
}

pub fn run(args: &ExportArgs) -> Result<()> {
    export_to_disk(args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::framing::PresetArg;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn write_png(dir: &std::path::Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("source.png");
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn export_writes_named_jpeg_at_target_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), 100, 50);
        let out_dir = dir.path().join("out");
        let preview = dir.path().join("preview.png");

        let args = ExportArgs {
            file: input,
            framing: FramingArgs {
                preset: Some(PresetArg::Listing),
                ..FramingArgs::default()
            },
            out_dir: out_dir.clone(),
            preview: Some(preview.clone()),
            json: true,
        };
        let path = export_to_disk(&args).unwrap();

        assert!(path.starts_with(&out_dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("resized-250x400-"), "{name}");
        assert!(name.ends_with(".jpg"));

        let jpeg = image::open(&path).unwrap();
        assert_eq!(jpeg.dimensions(), (250, 400));
        assert_eq!(image::open(&preview).unwrap().dimensions(), (500, 300));
    }

    #[test]
    fn export_custom_size_from_width_and_height() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), 40, 40);

        let args = ExportArgs {
            file: input,
            framing: FramingArgs {
                width: Some("320".into()),
                height: Some("240px".into()),
                zoom_in: 3,
                ..FramingArgs::default()
            },
            out_dir: dir.path().to_path_buf(),
            preview: None,
            json: true,
        };
        let path = export_to_disk(&args).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (320, 240));
    }
}
