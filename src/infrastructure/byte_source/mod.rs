//! Concrete Byte Source adapters and the mode-selecting entry point
//! `ByteSource::open` (spec.md §4.2, §6 `open_source`).

mod mapped;
mod streamed;

pub use mapped::MappedSource;
pub use streamed::StreamedSource;

use crate::domain::repositories::byte_source::SourceError;
use std::path::Path;

/// Either a mapped or a streamed source, selected at open time.
///
/// Grounded on `crates/argos_io::Reader`, a real (compiling, tested) enum
/// in the same example following this exact try-mmap-then-fall-back-to-
/// streaming shape.
pub enum ByteSource {
    Mapped(MappedSource),
    Streamed(StreamedSource),
}

impl ByteSource {
    /// Opens `path`, preferring the mapped mode and falling back to
    /// streamed when mapping is unavailable (e.g. some raw block device
    /// special files, or an empty file).
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        match MappedSource::open(path) {
            Ok(mapped) => Ok(ByteSource::Mapped(mapped)),
            Err(_) => Ok(ByteSource::Streamed(StreamedSource::open(path)?)),
        }
    }

    pub fn length(&self) -> Option<u64> {
        match self {
            ByteSource::Mapped(m) => Some(m.length()),
            ByteSource::Streamed(s) => s.length(),
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, ByteSource::Mapped(_))
    }
}
