use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::framing::{build_widget, write_preview, FramingArgs};

#[derive(Args)]
pub struct PreviewArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub framing: FramingArgs,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &PreviewArgs) -> Result<()> {
    let widget = build_widget(&args.file, &args.framing, || {})?;
    write_preview(widget.preview(), &args.output)?;

    let view = widget.view();
    println!("Target:  {} ({})", widget.target_size(), widget.preset());
    println!(
        "View:    scale {:.4}, offset ({:.1}, {:.1})",
        view.scale, view.offset_x, view.offset_y
    );
    println!("Preview saved to {}", args.output.display());

    widget.destroy();
    Ok(())
}
