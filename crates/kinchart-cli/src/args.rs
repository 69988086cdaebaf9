//! Command-line argument definitions for the Kinchart CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, per-run overrides and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Kinchart family tree renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file (member array or chart request)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; `.pdf` selects PDF output
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page format (A4, A4_LANDSCAPE, A3, A3_LANDSCAPE)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Chart title, overriding the request and configuration
    #[arg(short, long)]
    pub title: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
