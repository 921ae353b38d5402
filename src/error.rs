use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an icon generation run.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("input drawable not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The drawable is not well-formed XML.
    #[error("failed to parse vector drawable: {0}")]
    Parse(String),

    /// The synthesized SVG was rejected or could not be rendered.
    #[error("failed to rasterize SVG: {0}")]
    Rasterize(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
