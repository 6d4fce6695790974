use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use reframe_core::config::{ExportScaleMode, WidgetConfig};
use reframe_core::interaction::PointerEvent;
use reframe_core::io::SelectedFile;
use reframe_core::render::Surface;
use reframe_core::view::SizePreset;
use reframe_core::widget::OutputNotifier;
use reframe_core::{ImageResizerWidget, WidgetEvent};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Listing Content (250x400)
    Listing,
    /// Header (1400x700)
    Header,
    /// Custom size from --width / --height
    Custom,
}

impl From<PresetArg> for SizePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Listing => SizePreset::ListingContent,
            PresetArg::Header => SizePreset::Header,
            PresetArg::Custom => SizePreset::Custom,
        }
    }
}

/// Flags shared by every command that frames an image.
#[derive(Args, Clone, Debug, Default)]
pub struct FramingArgs {
    /// Target size preset
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Custom target width (implies --preset custom)
    #[arg(long)]
    pub width: Option<String>,

    /// Custom target height (implies --preset custom)
    #[arg(long)]
    pub height: Option<String>,

    /// Drag the image by DX,DY preview pixels (repeatable)
    #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
    pub pan: Vec<(f64, f64)>,

    /// Number of zoom-in wheel steps
    #[arg(long, default_value = "0")]
    pub zoom_in: u32,

    /// Number of zoom-out wheel steps
    #[arg(long, default_value = "0")]
    pub zoom_out: u32,

    /// Widget config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Map the crop guide exactly onto the export
    #[arg(long)]
    pub guide_matched: bool,
}

/// Parse a `DX,DY` pan offset.
pub fn parse_pan(s: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let dx: f64 = dx
        .trim()
        .parse()
        .map_err(|_| format!("invalid DX '{}'", dx.trim()))?;
    let dy: f64 = dy
        .trim()
        .parse()
        .map_err(|_| format!("invalid DY '{}'", dy.trim()))?;
    if !dx.is_finite() || !dy.is_finite() {
        return Err(format!("pan offsets must be finite, got '{s}'"));
    }
    Ok((dx, dy))
}

/// Load the config file if given, then apply command-line overrides.
pub fn load_config(args: &FramingArgs) -> Result<WidgetConfig> {
    let mut config: WidgetConfig = if let Some(ref path) = args.config {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).context("Invalid widget config")?
    } else {
        WidgetConfig::default()
    };

    if args.guide_matched {
        config.export.scale_mode = ExportScaleMode::GuideMatched;
    }
    Ok(config)
}

/// Translate the framing flags into the event sequence a user would produce:
/// custom fields, preset choice, one drag per pan, then wheel steps.
pub fn framing_events(args: &FramingArgs, config: &WidgetConfig) -> Vec<WidgetEvent> {
    let mut events = Vec::new();

    if let Some(ref w) = args.width {
        events.push(WidgetEvent::CustomWidthChanged(w.clone()));
    }
    if let Some(ref h) = args.height {
        events.push(WidgetEvent::CustomHeightChanged(h.clone()));
    }

    let preset = match args.preset {
        Some(p) => Some(SizePreset::from(p)),
        None if args.width.is_some() || args.height.is_some() => Some(SizePreset::Custom),
        None => None,
    };
    if let Some(preset) = preset {
        events.push(WidgetEvent::PresetSelected(preset));
    }

    // Drags start at the preview center so the press always lands inside.
    let cx = config.preview.width as f64 / 2.0;
    let cy = config.preview.height as f64 / 2.0;
    for &(dx, dy) in &args.pan {
        events.push(WidgetEvent::Pointer(PointerEvent::Down { x: cx, y: cy }));
        events.push(WidgetEvent::Pointer(PointerEvent::Move {
            x: cx + dx,
            y: cy + dy,
        }));
        events.push(WidgetEvent::Pointer(PointerEvent::Up));
    }

    for _ in 0..args.zoom_in {
        events.push(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: -1.0 }));
    }
    for _ in 0..args.zoom_out {
        events.push(WidgetEvent::Pointer(PointerEvent::Wheel { delta_y: 1.0 }));
    }

    events
}

/// Create a widget, load `file` into it and replay the framing flags.
pub fn build_widget(
    file: &Path,
    args: &FramingArgs,
    notifier: impl OutputNotifier + 'static,
) -> Result<ImageResizerWidget> {
    let config = load_config(args)?;
    let events = framing_events(args, &config);

    let selected = SelectedFile::from_path(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    selected
        .require_image()
        .with_context(|| format!("{} is not an image", file.display()))?;

    let mut widget = ImageResizerWidget::init(config, notifier)?;
    widget
        .load_file(selected)
        .with_context(|| format!("Failed to decode {}", file.display()))?;

    for event in events {
        let effect = widget.dispatch(event)?;
        debug!(?effect, "Framing event applied");
    }
    Ok(widget)
}

pub fn write_preview(surface: &Surface, path: &Path) -> Result<()> {
    let png = surface.encode_png()?;
    std::fs::write(path, png)
        .with_context(|| format!("Failed to write preview to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pan_accepts_signed_offsets() {
        assert_eq!(parse_pan("10,-20"), Ok((10.0, -20.0)));
        assert_eq!(parse_pan(" -3.5 , 4 "), Ok((-3.5, 4.0)));
    }

    #[test]
    fn parse_pan_rejects_malformed_input() {
        assert!(parse_pan("10").is_err());
        assert!(parse_pan("a,1").is_err());
        assert!(parse_pan("1,inf").is_err());
    }

    #[test]
    fn width_alone_implies_custom_preset() {
        let args = FramingArgs {
            width: Some("320".into()),
            ..FramingArgs::default()
        };
        let events = framing_events(&args, &WidgetConfig::default());
        assert!(matches!(
            events.as_slice(),
            [
                WidgetEvent::CustomWidthChanged(w),
                WidgetEvent::PresetSelected(SizePreset::Custom),
            ] if w == "320"
        ));
    }

    #[test]
    fn pan_becomes_drag_from_preview_center() {
        let args = FramingArgs {
            pan: vec![(15.0, -5.0)],
            zoom_out: 2,
            ..FramingArgs::default()
        };
        let events = framing_events(&args, &WidgetConfig::default());
        assert_eq!(events.len(), 5);
        assert!(matches!(
            events[0],
            WidgetEvent::Pointer(PointerEvent::Down { x, y }) if x == 250.0 && y == 150.0
        ));
        assert!(matches!(
            events[1],
            WidgetEvent::Pointer(PointerEvent::Move { x, y }) if x == 265.0 && y == 145.0
        ));
        assert!(matches!(events[2], WidgetEvent::Pointer(PointerEvent::Up)));
        assert!(matches!(
            events[4],
            WidgetEvent::Pointer(PointerEvent::Wheel { delta_y }) if delta_y > 0.0
        ));
    }

    #[test]
    fn guide_matched_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widget.toml");
        std::fs::write(&path, "[export]\njpeg_quality = 0.5\n").unwrap();

        let args = FramingArgs {
            config: Some(path),
            guide_matched: true,
            ..FramingArgs::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.export.jpeg_quality, 0.5);
        assert_eq!(config.export.scale_mode, ExportScaleMode::GuideMatched);
    }

    #[test]
    fn build_widget_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let err = build_widget(&path, &FramingArgs::default(), || {}).err().unwrap();
        assert!(err.to_string().contains("not an image"));
    }
}
