//! Error types for Classdraw operations.
//!
//! This module provides the main error type [`ClassdrawError`] which wraps
//! various error conditions that can occur while loading and rendering a
//! diagram.

use std::io;

use thiserror::Error;

use classdraw_core::draw::DrawError;

/// The main error type for Classdraw operations.
///
/// Rendering never fails on diagram content: unknown kinds fall back to
/// defaults and malformed connectors are skipped. Errors come from reading
/// the model, the resources a render needs (fonts, the canvas), configuration
/// and encoding the result.
#[derive(Debug, Error)]
pub enum ClassdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram model: {err}")]
    Model { err: serde_json::Error, src: String },

    #[error("Resource error: {0}")]
    Resource(#[from] DrawError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl ClassdrawError {
    /// Create a new `Model` error with the associated model source.
    pub fn new_model_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Model {
            err,
            src: src.into(),
        }
    }
}
