//! The Writer port (spec.md §4.5).

use std::path::PathBuf;
use thiserror::Error;

/// Failures emitting a recovered artifact to disk.
///
/// Grounded on `domain::repositories::file_writer::FileWriterError` in the
/// teacher; `UnsafePath` is new (the teacher's `LocalFileWriter` performed
/// no directory-confinement check at all — a real gap, closed here).
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("sanitized path '{attempted}' escapes output directory '{base_dir}'")]
    UnsafePath {
        base_dir: String,
        attempted: String,
    },

    #[error("I/O error writing artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes carved bytes to the configured output directory under a
/// sanitized, confinement-checked name.
pub trait RecordWriter {
    /// Writes `bytes` under `name` (pre-sanitization), returning the final
    /// on-disk path.
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, WriterError>;

    /// Best-effort removal of a previously-written artifact (used when
    /// image validation rejects a candidate after it has been written).
    fn remove(&self, path: &std::path::Path) -> Result<(), WriterError>;

    fn output_dir(&self) -> &std::path::Path;
}
