//! Drawpad - render images onto a drawing board.

mod cli;

use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use drawpad::adapters::raster::{parse_color, RasterCanvas};
use drawpad::adapters::recording::RecordingCanvas;
use drawpad::config::{self, Config};
use drawpad::output::{resolve_output_path, save_surface};
use drawpad::placement::parse_placement;
use drawpad::trace::recorder::TraceRecorder;
use drawpad::{Board, CanvasContext, Image, PadError, Resolver};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PadError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)?;

    // Validate every placement before touching any resource.
    let placements =
        cli.images.iter().map(|spec| parse_placement(spec)).collect::<Result<Vec<_>, _>>()?;
    let background = parse_color(cli.background.as_deref().unwrap_or(&config.board.background))?;
    let width = cli.width.unwrap_or(config.board.width);
    let height = cli.height.unwrap_or(config.board.height);
    if width == 0 || height == 0 {
        return Err(PadError::InvalidArgument(format!("Board size {width}x{height} must be non-zero")));
    }

    let resolver = Resolver::from_config(&config)?;
    let images = placements
        .iter()
        .map(|p| Image::new(&resolver, p.x, p.y, &p.designator, p.degrees))
        .collect::<Result<Vec<_>, _>>()?;

    if cli.probe {
        for image in &images {
            if cli.json {
                let line = serde_json::to_string(&image.info())
                    .map_err(|e| PadError::Encode(format!("Failed to serialize image info: {e}")))?;
                println!("{line}");
            } else {
                println!("{image}");
            }
        }
        return Ok(());
    }

    let canvas = RasterCanvas::new(width, height, background);
    let raster = if let Some(trace_path) = cli.trace.as_deref() {
        let recorder = TraceRecorder::new(trace_path, trace_name(&images));
        let recording = render(RecordingCanvas::new(canvas, recorder), images)?;
        let (raster, recorder) = recording.into_parts();
        let written = recorder.finish()?;
        eprintln!("Trace saved: {}", written.display());
        raster
    } else {
        render(canvas, images)?
    };

    let output_path = resolve_output_path(cli.output.as_deref(), &placements[0].designator);
    save_surface(raster.surface(), &output_path)?;
    eprintln!("Saved: {}", output_path.display());
    Ok(())
}

/// Place every image on a board over `canvas`, render, and hand the canvas back.
fn render<C: CanvasContext>(canvas: C, images: Vec<Image>) -> Result<C, PadError> {
    let mut board = Board::new(canvas);
    for image in images {
        board.add(Box::new(image));
    }
    board.render_all()?;
    Ok(board.into_context())
}

fn trace_name(images: &[Image]) -> String {
    let names: Vec<&str> = images.iter().map(Image::source_designator).collect();
    format!("render-{}", names.join("+"))
}
