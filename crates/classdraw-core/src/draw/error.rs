use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up drawing resources.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to load font file `{path}`: {source}")]
    FontFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable font available: {0}")]
    FontUnavailable(String),
}
