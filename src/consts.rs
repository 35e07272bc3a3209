//! Global constants (spec.md §9: "compile-time or configuration constants;
//! they are not per-scan parameters in the core").

/// Hard ceiling on any single signature's `max_size` (256 MiB).
pub const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// A carved candidate shorter than this is discarded as noise (512 bytes).
pub const MIN_VALID_SIZE: u64 = 512;

/// Minimum distance between two accepted offsets before the later one is
/// suppressed by the dedup gate (1024 bytes).
pub const MIN_OFFSET_GAP: u64 = 1024;

/// The footer search window cap for footer-bounded carving (32 MiB).
pub const FOOTER_WINDOW: u64 = 32 * 1024 * 1024;

/// The mapped-mode window stride and the streamed-mode chunk read size
/// (64 MiB).
pub const CHUNK_LOG_BYTES: u64 = 64 * 1024 * 1024;

/// The streamed carver's incremental read size while growing a candidate
/// buffer in search of a footer (4 MiB).
pub const STREAMED_GROWTH_STEP: u64 = 4 * 1024 * 1024;

/// Default policy: emit a fixed-size candidate when no footer is found
/// within the window, rather than rejecting it outright.
pub const FALLBACK_ON_NO_FOOTER: bool = true;
