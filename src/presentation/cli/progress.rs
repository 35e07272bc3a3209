//! Progress bar wiring for the `scan` subcommand.
//!
//! Grounded on `presentation::cli::progress::ProgressReporter` in the
//! teacher, which wraps `indicatif::ProgressBar` behind scan-shaped
//! callback constructors.

use crate::application::scan_use_case::ScanProgress;
use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn for_scan(total_bytes: Option<u64>) -> Self {
        let bar = match total_bytes {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({msg})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// A closure suitable for `application::scan_use_case::scan`'s
    /// `on_progress` parameter.
    pub fn callback(&self) -> impl FnMut(ScanProgress) + '_ {
        move |progress: ScanProgress| {
            self.bar.set_position(progress.bytes_scanned);
            self.bar
                .set_message(format!("{} recovered", progress.records_found));
        }
    }

    pub fn finish(&self, records_found: usize) {
        self.bar
            .finish_with_message(format!("done, {records_found} recovered"));
    }
}
