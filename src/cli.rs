//! CLI argument parsing with clap.

use clap::Parser;

/// Place images on a drawing board and render it to PNG.
#[derive(Parser, Debug)]
#[command(name = "drawpad", version, about)]
pub struct Cli {
    /// Images to place, each as `designator[@x,y[,degrees]]`.
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Output PNG path (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Board width in pixels (overrides config).
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Board height in pixels (overrides config).
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Background color as `#rrggbb` or `#rrggbbaa` (overrides config).
    #[arg(short, long)]
    pub background: Option<String>,

    /// Write a YAML trace of every canvas call to this path.
    #[arg(long)]
    pub trace: Option<String>,

    /// Print each image's state instead of rendering.
    #[arg(long)]
    pub probe: bool,

    /// With `--probe`, print JSON lines instead of text.
    #[arg(long, requires = "probe")]
    pub json: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
