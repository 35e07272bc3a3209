//! Application layer: the scan use case and its DTOs, orchestrating I/O
//! against the domain's pure services.

pub mod cancellation;
pub mod dto;
pub mod scan_use_case;

pub use cancellation::CancellationToken;
pub use scan_use_case::{ScanError, ScanProgress, scan};
