pub mod commands;
pub mod progress;

pub use commands::{Cli, Commands, resolve_file_type_filters};
pub use progress::ProgressReporter;
