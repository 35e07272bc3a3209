//! CLI argument surface (spec.md §6 "CLI launcher" collaborator).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Signature-driven file carving over raw block devices and disk images.
#[derive(Debug, Parser)]
#[command(name = "argos", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a source and recover matching files into an output directory.
    Scan {
        /// Path to the raw device or disk image to scan.
        source: PathBuf,

        /// Output directory for recovered artifacts.
        #[arg(short, long, default_value = "recovered")]
        output: PathBuf,

        /// Restrict the scan to one or more extensions/signature names
        /// (repeatable). Omit to scan for every signature in the catalog.
        #[arg(short = 't', long = "type")]
        types: Vec<String>,

        /// Path to a signature document (JSON). Defaults to the catalog
        /// embedded in the binary.
        #[arg(short, long)]
        signatures: Option<PathBuf>,

        /// Disable the fixed-size fallback when no footer is found.
        #[arg(long)]
        no_fallback: bool,
    },

    /// Print the compiled signature catalog.
    ListSignatures {
        #[arg(short, long)]
        signatures: Option<PathBuf>,
    },

    /// Report basic information about a source (size, access mode).
    Info { source: PathBuf },
}

/// Resolves the `--type` flags into one `FileTypeFilter` per requested
/// extension, closing the Open Question in spec.md §9 at the CLI boundary:
/// an empty list means *one unfiltered scan*, not *none*, and a repeated
/// flag means *one scan per extension* rather than a single scan across a
/// merged filter, so each extension gets its own dedup set — matching the
/// original `/api/scan_carve` handler's per-extension loop.
///
/// Grounded on `presentation::cli::commands::parse_file_types` in the
/// teacher (which returned an empty `Vec<FileType>` for "no restriction"
/// and left callers to interpret that); here the distinction is made
/// explicit in the type itself.
pub fn resolve_file_type_filters(types: &[String]) -> Vec<crate::application::dto::FileTypeFilter> {
    use crate::application::dto::FileTypeFilter;
    if types.is_empty() {
        vec![FileTypeFilter::All]
    } else {
        types.iter().map(|t| FileTypeFilter::One(t.clone())).collect()
    }
}
