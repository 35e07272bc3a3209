//! The Writer adapter (spec.md §4.5).

use crate::domain::repositories::writer::{RecordWriter, WriterError};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes recovered artifacts under a configured output directory,
/// sanitizing names and refusing to write outside it.
///
/// Grounded on `infrastructure::persistence::local_file_writer::LocalFileWriter`
/// in the teacher, which created the parent directory and wrote the file
/// but performed no sanitization or confinement check at all — both are
/// added here to satisfy spec.md §4.5 and the `UnsafePath` error in §7.
pub struct LocalWriter {
    base_dir: PathBuf,
}

impl LocalWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Keeps `[A-Za-z0-9._-]`, replacing every other character with `_`.
    pub fn sanitize(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl RecordWriter for LocalWriter {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, WriterError> {
        fs::create_dir_all(&self.base_dir)?;

        let sanitized = Self::sanitize(name);
        let candidate = self.base_dir.join(&sanitized);

        // Canonicalize the *parent* the file will live under (the base
        // directory), then re-join the sanitized leaf name, so the
        // confinement check works even before `candidate` itself exists.
        let canonical_base = self.base_dir.canonicalize()?;
        let resolved = canonical_base.join(&sanitized);

        if !resolved.starts_with(&canonical_base) {
            return Err(WriterError::UnsafePath {
                base_dir: canonical_base.display().to_string(),
                attempted: resolved.display().to_string(),
            });
        }

        fs::write(&candidate, bytes)?;
        Ok(candidate)
    }

    fn remove(&self, path: &Path) -> Result<(), WriterError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WriterError::Io(e)),
        }
    }

    fn output_dir(&self) -> &Path {
        &self.base_dir
    }
}
