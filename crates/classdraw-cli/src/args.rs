//! Command-line argument definitions for the Classdraw CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, base64 export,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Classdraw renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram model (JSON)
    #[arg(help = "Path to the input diagram model")]
    pub input: String,

    /// Path to the output PNG file
    #[arg(short, long, default_value = "out.png")]
    pub output: String,

    /// Print the base64-encoded PNG to stdout instead of writing a file
    #[arg(long)]
    pub base64: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
