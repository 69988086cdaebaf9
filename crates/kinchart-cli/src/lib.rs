//! CLI logic for the Kinchart family tree renderer.
//!
//! This module contains the core CLI logic: it resolves configuration, reads
//! a chart request and writes the rendered chart.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use kinchart::{
    ChartBuilder, KinchartError, export::OutputFormat, page::PageSpec, request::ChartRequest,
};

/// Run the Kinchart CLI application
///
/// This function reads the input request, applies configuration and
/// command-line overrides, renders the chart and writes it to the output
/// file. The output format follows the output file extension and falls back
/// to SVG.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `KinchartError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input or an unknown page format
/// - Empty member lists
/// - Export errors
pub fn run(args: &Args) -> Result<(), KinchartError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing family chart"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let request = ChartRequest::from_json(&source)?;
    request.apply_to(&mut app_config)?;

    if let Some(format) = &args.format {
        let page = format
            .parse::<PageSpec>()
            .map_err(|err| KinchartError::Input(err.to_string()))?;
        app_config.set_page(page);
    }
    if let Some(title) = &args.title {
        app_config.content_mut().set_title(title.clone());
    }

    let format = output_format(Path::new(&args.output));
    debug!(format:%, page:% = app_config.page(); "Resolved output settings");

    let builder = ChartBuilder::new(app_config);
    let bytes = builder.build(request.members(), format)?;

    fs::write(&args.output, bytes)?;

    info!(output_file = args.output; "Chart exported successfully");

    Ok(())
}

fn output_format(path: &Path) -> OutputFormat {
    OutputFormat::from_path(path).unwrap_or_else(|| {
        debug!(path:? = path; "Unrecognized output extension, writing SVG");
        OutputFormat::Svg
    })
}
