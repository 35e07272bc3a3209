pub mod scan_options;

pub use scan_options::{FileTypeFilter, ScanOptions};
