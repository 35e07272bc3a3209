//! Argos - signature-driven file carving CLI.
//!
//! Thin entry point: parses arguments, wires up logging and the
//! collaborators in `argos`, and dispatches to one of the three
//! subcommands. All carving logic lives in the library crate.

use anyhow::{Context, Result};
use argos::application::CancellationToken;
use argos::presentation::cli::{Cli, Commands, ProgressReporter, resolve_file_type_filters};
use argos::{ByteSource, LocalWriter, ScanOptions, default_catalog, load_catalog, scan};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            source,
            output,
            types,
            signatures,
            no_fallback,
        } => run_scan(&source, &output, &types, signatures.as_deref(), no_fallback),

        Commands::ListSignatures { signatures } => list_signatures(signatures.as_deref()),

        Commands::Info { source } => show_source_info(&source),
    }
}

fn load_catalog_or_default(signatures: Option<&Path>) -> Result<argos::Catalog> {
    match signatures {
        Some(path) => {
            load_catalog(path).with_context(|| format!("loading signatures from {path:?}"))
        }
        None => Ok(default_catalog()),
    }
}

fn run_scan(
    source_path: &Path,
    output: &Path,
    types: &[String],
    signatures: Option<&Path>,
    no_fallback: bool,
) -> Result<()> {
    let catalog = load_catalog_or_default(signatures)?;
    tracing::info!(signatures = catalog.len(), "catalog compiled");

    let source = ByteSource::open(source_path)
        .with_context(|| format!("opening source {source_path:?}"))?;
    tracing::info!(mapped = source.is_mapped(), "source opened");

    let writer = LocalWriter::new(output.to_path_buf());

    // The core never installs its own Ctrl-C handler (spec.md §5); this
    // binary doesn't wire one up either, but the seam is exercised the same
    // way an embedder driving cancellation from another thread would use it.
    let cancel = CancellationToken::new();

    let progress = ProgressReporter::for_scan(source.length());

    // One `scan()` call per requested extension, each with its own fresh
    // dedup set, rather than one call across a merged filter: a PNG header
    // within MIN_OFFSET_GAP of an already-accepted JPEG header must not be
    // suppressed just because both extensions were requested together.
    let mut records = Vec::new();
    for file_type in resolve_file_type_filters(types) {
        let options = ScanOptions {
            file_type,
            fallback_on_no_footer: !no_fallback,
        };
        let mut pass = scan(
            &source,
            &catalog,
            &options,
            &writer,
            &cancel,
            progress.callback(),
        )
        .context("scan failed")?;
        records.append(&mut pass);
    }
    records.sort_by(|a, b| a.offset.cmp(&b.offset).then(a.signature_name.cmp(&b.signature_name)));
    progress.finish(records.len());

    println!(
        "Recovered {} file(s) into {}",
        records.len(),
        output.display()
    );
    for record in &records {
        println!(
            "  {:>12}  {:<10}  offset {:<12}  {}",
            record.size,
            record.signature_name,
            record.offset,
            record.path.display()
        );
    }

    Ok(())
}

fn list_signatures(signatures: Option<&Path>) -> Result<()> {
    let catalog = load_catalog_or_default(signatures)?;
    for signature in catalog.signatures() {
        let header_hex: Vec<String> =
            signature.header().iter().map(|b| format!("{b:02X}")).collect();
        print!("{:<10} header {}", signature.name(), header_hex.join(" "));
        if let Some(footer) = signature.footer() {
            let footer_hex: Vec<String> = footer.iter().map(|b| format!("{b:02X}")).collect();
            print!(" | footer {}", footer_hex.join(" "));
        }
        println!(
            " | ext {} | max {}",
            signature.extension(),
            signature.max_size()
        );
    }
    Ok(())
}

fn show_source_info(source_path: &Path) -> Result<()> {
    let source = ByteSource::open(source_path)
        .with_context(|| format!("opening source {source_path:?}"))?;

    println!("Path:   {}", source_path.display());
    println!(
        "Mode:   {}",
        if source.is_mapped() { "mapped" } else { "streamed" }
    );
    match source.length() {
        Some(len) => println!("Length: {len} bytes"),
        None => println!("Length: unknown (non-seekable stream)"),
    }
    Ok(())
}
