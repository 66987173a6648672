//! Raster drawing primitives for diagram rendering.
//!
//! This module provides the pieces the renderer composes a diagram from:
//!
//! - [`Canvas`] - An RGBA raster surface with line, polygon and outline primitives
//! - [`StrokeDefinition`] / [`StrokeStyle`] - How lines are drawn (solid or dashed)
//! - [`TextMeasure`] / [`TextEngine`] - The text capability supplied by the host
//! - [`FontTextEngine`] - The `cosmic-text` implementation of the text capability
mod canvas;
mod error;
mod stroke;
mod text;

pub use canvas::Canvas;
pub use error::DrawError;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontTextEngine, TextEngine, TextMeasure};
