//! The memory-mapped Byte Source (spec.md §4.2, mapped mode).

use crate::domain::repositories::byte_source::SourceError;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Zero-copy access over a memory-mapped file.
///
/// Grounded on `infrastructure::block_device::mmap_block_device::MmapBlockDevice`
/// in the teacher, and on `crates/argos_io::MmapReader`'s guard against a
/// mapping that "succeeds" but comes back empty (observed on some
/// block-device special files) — that guard is reproduced below so
/// `ByteSource::open` can fall back to the streamed reader correctly.
pub struct MappedSource {
    mmap: Mmap,
}

impl MappedSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|e| SourceError::from_open_error(path, e))?;
        let len = file.metadata()?.len();
        if len == 0 {
            return Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "cannot map an empty file",
            )));
        }
        // SAFETY: opened read-only; forensic scanning never mutates the
        // backing file for the lifetime of the mapping.
        let mmap = unsafe { Mmap::map(&file) }?;
        if mmap.is_empty() {
            return Err(SourceError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "mmap returned an empty mapping",
            )));
        }
        Ok(Self { mmap })
    }

    pub fn length(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Returns a zero-copy slice `[start, end)`, clamped to the mapping's
    /// bounds.
    pub fn slice(&self, start: u64, end: u64) -> &[u8] {
        let start = (start as usize).min(self.mmap.len());
        let end = (end as usize).min(self.mmap.len()).max(start);
        &self.mmap[start..end]
    }

    /// Searches for `pattern` within `[from, to_exclusive)`, returning its
    /// absolute start offset.
    pub fn find(&self, pattern: &[u8], from: u64, to_exclusive: u64) -> Option<u64> {
        let window = self.slice(from, to_exclusive);
        memchr::memmem::find(window, pattern).map(|rel| from + rel as u64)
    }
}
