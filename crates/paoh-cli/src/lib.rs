//! CLI logic for the PAOH plot tool.
//!
//! Reads JSON event rows, lays them out and writes the SVG plot.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use paoh::{PaohError, PlotBuilder};

use error_adapter::warning_reportables;

/// Run the PAOH CLI application
///
/// This function processes the input file through the PAOH pipeline
/// and writes the resulting SVG to the output file. Row warnings are
/// reported but do not stop the run.
///
/// # Errors
///
/// Returns `PaohError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), PaohError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing events"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_canvas_overrides(app_config, args.width, args.height)?;

    let source = fs::read_to_string(&args.input)?;

    let builder = PlotBuilder::new(app_config);
    let parsed = builder.parse(&source)?;

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in warning_reportables(parsed.warnings(), &source) {
        let mut writer = String::new();
        if reporter.render_report(&mut writer, &reportable).is_ok() {
            warn!("{writer}");
        }
    }

    let svg = builder.render_svg(parsed.dataset())?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
