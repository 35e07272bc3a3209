//! The Byte Source port (spec.md §4.2).

use thiserror::Error;

/// Failures opening or reading a byte source.
///
/// Mirrors the teacher's `BlockDeviceError` one-thiserror-enum-per-concern
/// convention (`domain::repositories::block_device::BlockDeviceError` in
/// the teacher).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("permission denied opening {path}")]
    PermissionDenied { path: String },

    #[error("source not found: {path}")]
    NotFound { path: String },

    #[error("I/O error reading source: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn from_open_error(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => SourceError::PermissionDenied {
                path: path.display().to_string(),
            },
            std::io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.display().to_string(),
            },
            other => SourceError::Io(std::io::Error::new(other, err)),
        }
    }
}
