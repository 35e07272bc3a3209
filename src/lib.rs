//! Signature-driven file carving engine.
//!
//! Recovers files from raw block devices or disk images by scanning their
//! byte stream for known file-format signatures, reconstructing each
//! candidate by locating a matching footer or falling back to a bounded
//! fixed-size window, validating a small set of image formats, and writing
//! deduplicated artifacts to an output directory.
//!
//! This crate implements only the carving engine itself. Filesystem
//! interpretation, fragmented-file reconstruction, nested-format
//! detection, and any HTTP/desktop front end are explicitly out of scope —
//! see `application::scan_use_case::scan` for the one entry point an
//! embedding application needs.

pub mod application;
pub mod consts;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{FileTypeFilter, ScanOptions};
pub use application::{CancellationToken, ScanError, scan};
pub use domain::entities::{Catalog, RecoveredRecord, Signature};
pub use domain::services::catalog_loader::{CatalogError, default_catalog, load_catalog};
pub use infrastructure::byte_source::ByteSource;
pub use infrastructure::persistence::LocalWriter;
