use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use reframe_core::io::{SelectedFile, SourceImage};
use reframe_core::view::state::fit_scale;

use super::framing::{load_config, FramingArgs};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Widget config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(&FramingArgs {
        config: args.config.clone(),
        ..FramingArgs::default()
    })?;

    let file = SelectedFile::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    file.require_image()
        .with_context(|| format!("{} is not an image", args.file.display()))?;
    let image = SourceImage::decode(&file.bytes)?;

    let (pw, ph) = (config.preview.width, config.preview.height);
    let scale = fit_scale(pw, ph, image.width(), image.height());

    println!("File:        {}", args.file.display());
    println!("Type:        {}", file.mime_type);
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Size:        {:.1} KB", file.bytes.len() as f64 / 1024.0);
    println!("Preview:     {}x{}", pw, ph);
    println!("Fit scale:   {:.4}", scale);
    println!(
        "Fitted:      {:.0}x{:.0}",
        image.width() as f64 * scale,
        image.height() as f64 * scale
    );

    Ok(())
}
