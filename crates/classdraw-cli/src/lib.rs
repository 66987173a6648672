//! CLI logic for the Classdraw renderer.
//!
//! This module contains the core CLI logic: load the configuration and the
//! JSON diagram model, render it, and export the PNG to a file or as base64
//! on stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use base64::Engine;
use log::info;

use classdraw::{ClassdrawError, DiagramRenderer};

/// Run the Classdraw CLI application
///
/// This function renders the input model and either writes the PNG to the
/// output file or prints it base64-encoded on stdout.
///
/// # Errors
///
/// Returns `ClassdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid diagram models
/// - Font loading errors
/// - PNG encoding errors
pub fn run(args: &Args) -> Result<(), ClassdrawError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        base64 = args.base64;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = DiagramRenderer::new(app_config)?;
    let diagram = renderer.parse(&source)?;
    let png = renderer.render_png(&diagram)?;

    if args.base64 {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", encode_base64(&png))?;
        info!(bytes = png.len(); "PNG exported as base64");
    } else {
        fs::write(&args.output, &png)?;
        info!(output_file = args.output; "PNG exported successfully");
    }

    Ok(())
}

/// Encode PNG bytes with the standard base64 alphabet.
pub fn encode_base64(png: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(png)
}
