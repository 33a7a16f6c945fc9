use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use spendly_icon_gen::render::{generate_icons, RenderOptions};
use spendly_icon_gen::theme::Palette;

#[derive(Debug, Parser)]
#[clap(
    name = "spendly-icon-gen",
    about = "Generate the Spendly app icon set (opaque icon + adaptive-icon foreground)"
)]
struct Args {
    /// Canvas size in pixels; outputs are size x size.
    #[clap(short, long, default_value_t = 1024)]
    size: u32,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "assets/icon")]
    output: PathBuf,

    /// JSON file overriding the brand palette (CSS color strings for
    /// primary, secondary, background, surface).
    #[clap(long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Generate only the full-background icon.png
    #[clap(long, conflicts_with = "foreground_only")]
    icon_only: bool,

    /// Generate only the transparent icon_foreground.png
    #[clap(long)]
    foreground_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let palette = match &args.palette {
        Some(path) => Palette::from_path(path)?,
        None => Palette::default_brand(),
    };

    generate_icons(&RenderOptions {
        size: args.size,
        output: args.output,
        palette,
        icon_only: args.icon_only,
        foreground_only: args.foreground_only,
    })
}
