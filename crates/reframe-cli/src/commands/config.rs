use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use reframe_core::config::{ExportScaleMode, WidgetConfig};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Start from the guide-matched export mapping
    #[arg(long)]
    pub guide_matched: bool,
}

/// Starting config for `args`: defaults, optionally with the corrected mapping.
pub fn template(args: &ConfigArgs) -> WidgetConfig {
    let mut config = WidgetConfig::default();
    if args.guide_matched {
        config.export.scale_mode = ExportScaleMode::GuideMatched;
    }
    config
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let rendered = toml::to_string_pretty(&template(args)).context("Failed to render config")?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            println!("Config template saved to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
