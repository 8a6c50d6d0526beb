use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while planning, writing and rendering artifacts.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("section {index} does not exist, the case has {count} section(s)")]
    InvalidSection { index: usize, count: usize },

    #[error("failed to write design file '{path}': {message}")]
    Write { path: PathBuf, message: String },

    #[error("failed to launch renderer for '{path}'")]
    RenderLaunch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render of '{path}' failed: {reason}")]
    Render { path: PathBuf, reason: String },
}
