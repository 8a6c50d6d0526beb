use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read layout '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("layout is not valid JSON after repair")]
    Parse(#[source] serde_json::Error),

    #[error("unexpected layout structure: {0}")]
    Shape(String),
}
