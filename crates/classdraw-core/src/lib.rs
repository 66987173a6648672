//! Classdraw Core Types and Definitions
//!
//! This crate provides the foundational types for rendering class diagrams
//! into raster images. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and the arrowhead / dash computations ([`geometry`] module)
//! - **Draw**: The raster canvas, strokes and text capabilities ([`draw`] module)
//! - **Semantic**: The diagram model handed to the renderer ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
