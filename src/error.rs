// src/error.rs
use std::path::PathBuf;

/// Error taxonomy for the NDVI pipeline. Each variant corresponds to one
/// pipeline stage; none are recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("band matching `{pattern}` not found under {}", .directory.display())]
    BandNotFound { pattern: String, directory: PathBuf },

    #[error("failed to read raster {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("band dimensions differ: red is {red_shape:?}, nir is {nir_shape:?}")]
    ShapeMismatch {
        red_shape: (usize, usize),
        nir_shape: (usize, usize),
    },

    #[error("failed to write raster {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}

pub type IndexResult<T> = Result<T, IndexError>;

impl IndexError {
    pub fn read(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        IndexError::Read {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        IndexError::Write {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
