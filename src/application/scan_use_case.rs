//! The Scanner (spec.md §4.6): the top-level driver tying the Byte Source,
//! Carver, Validator, and Writer together.

use crate::application::cancellation::CancellationToken;
use crate::application::dto::ScanOptions;
use crate::consts::{CHUNK_LOG_BYTES, FOOTER_WINDOW, MIN_VALID_SIZE, STREAMED_GROWTH_STEP};
use crate::domain::entities::{Candidate, Catalog, RecoveredRecord, Signature};
use crate::domain::repositories::{RecordWriter, SourceError, WriterError};
use crate::domain::services::carver::{CarveOutcome, CarverError, carve};
use crate::domain::services::dedup::DedupSet;
use crate::domain::services::validator::{detect_format, is_image_extension, is_valid_image};
use crate::infrastructure::byte_source::{ByteSource, MappedSource, StreamedSource};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("signature catalog error: {0}")]
    Catalog(#[from] crate::domain::services::catalog_loader::CatalogError),

    #[error("source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error during scan: {0}")]
    Io(#[from] std::io::Error),

    #[error("writer error: {0}")]
    Writer(#[from] WriterError),
}

/// One reporting step, emitted at each chunk/window boundary so a CLI (or
/// test) can drive a progress bar; purely observational, never affects
/// scan outcome.
#[derive(Debug, Clone, Copy)]
pub struct ScanProgress {
    pub bytes_scanned: u64,
    pub total_bytes: Option<u64>,
    pub records_found: usize,
}

/// Runs one scan to completion (or until cancelled), returning the
/// manifest ordered by accepted offset, then by catalog order
/// (spec.md §5 "Ordering guarantees").
pub fn scan(
    source: &ByteSource,
    catalog: &Catalog,
    options: &ScanOptions,
    writer: &dyn RecordWriter,
    cancel: &CancellationToken,
    mut on_progress: impl FnMut(ScanProgress),
) -> Result<Vec<RecoveredRecord>, ScanError> {
    let matching: Vec<(usize, &Signature)> = catalog
        .signatures()
        .iter()
        .enumerate()
        .filter(|(_, sig)| options.file_type.matches(sig))
        .collect();
    tracing::info!(signatures = matching.len(), "scan starting");

    let mut indexed = match source {
        ByteSource::Mapped(mapped) => scan_mapped(
            mapped,
            &matching,
            options.fallback_on_no_footer,
            writer,
            cancel,
            &mut on_progress,
        )?,
        ByteSource::Streamed(streamed) => scan_streamed(
            streamed,
            &matching,
            options.fallback_on_no_footer,
            writer,
            cancel,
            &mut on_progress,
        )?,
    };

    indexed.sort_by(|a, b| a.1.offset.cmp(&b.1.offset).then(a.0.cmp(&b.0)));
    tracing::info!(records = indexed.len(), "scan finished");
    Ok(indexed.into_iter().map(|(_, record)| record).collect())
}

/// Writes the carved bytes, refines the extension, runs image validation,
/// and returns the manifest entry if the candidate survives — or `None`
/// if it was rejected at any step. Shared by both scan modes.
fn finalize_candidate(
    writer: &dyn RecordWriter,
    candidate: Candidate,
) -> Result<Option<RecoveredRecord>, ScanError> {
    let Candidate {
        offset,
        signature_name,
        extension: declared_extension,
        bytes,
    } = candidate;

    if (bytes.len() as u64) < MIN_VALID_SIZE {
        tracing::debug!(offset, signature = %signature_name, size = bytes.len(), "candidate rejected: too small");
        return Ok(None);
    }

    let refined = detect_format(&bytes);
    let extension = if matches!(declared_extension.as_str(), "jpg" | "png" | "webp") {
        refined
    } else {
        declared_extension.as_str()
    };

    let name = format!(
        "recovered_{}_{}.{}",
        signature_name,
        offset,
        if extension.is_empty() { "bin" } else { extension }
    );

    let path = match writer.write(&name, &bytes) {
        Ok(path) => path,
        Err(WriterError::UnsafePath { .. }) => {
            tracing::warn!(offset, signature = %signature_name, "candidate rejected: unsafe output path");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if is_image_extension(extension) && !is_valid_image(&path, extension) {
        tracing::debug!(offset, signature = %signature_name, "candidate rejected: image validation failed");
        let _ = writer.remove(&path);
        return Ok(None);
    }

    tracing::info!(
        offset,
        signature = %signature_name,
        size = bytes.len(),
        path = %path.display(),
        "candidate accepted"
    );

    Ok(Some(RecoveredRecord {
        path,
        signature_name,
        size: bytes.len() as u64,
        offset,
    }))
}

fn scan_mapped(
    source: &MappedSource,
    matching: &[(usize, &Signature)],
    fallback_on_no_footer: bool,
    writer: &dyn RecordWriter,
    cancel: &CancellationToken,
    on_progress: &mut impl FnMut(ScanProgress),
) -> Result<Vec<(usize, RecoveredRecord)>, ScanError> {
    let length = source.length();
    let mut dedup = DedupSet::new();
    let mut records = Vec::new();
    let mut pos = 0u64;

    while pos < length {
        if cancel.is_cancelled() {
            break;
        }
        let window_end = (pos + CHUNK_LOG_BYTES).min(length);
        tracing::debug!(pos, window_end, length, "scanning mapped window");

        for &(catalog_index, signature) in matching {
            let mut search_from = pos;
            while search_from < window_end {
                let Some(idx) = source.find(signature.header(), search_from, window_end) else {
                    break;
                };
                search_from = idx + signature.header().len() as u64;

                if !dedup.admit(idx) {
                    continue;
                }

                let cap = match signature {
                    Signature::FooterBounded { max_size, .. } => (*max_size).min(FOOTER_WINDOW),
                    Signature::FixedSize { max_size, .. } => *max_size,
                };
                let buf = source.slice(idx, (idx + cap).min(length));
                let outcome = carve(signature, buf, true, fallback_on_no_footer);
                let end = match outcome {
                    CarveOutcome::Accepted { end } => end,
                    CarveOutcome::Rejected(CarverError::NoFooter) => {
                        tracing::debug!(offset = idx, signature = signature.name(), "candidate rejected: no footer");
                        continue;
                    }
                    CarveOutcome::NeedMore { .. } => continue,
                };
                let candidate = Candidate {
                    offset: idx,
                    signature_name: signature.name().to_string(),
                    extension: signature.extension().to_string(),
                    bytes: buf[..end as usize].to_vec(),
                };
                if let Some(record) = finalize_candidate(writer, candidate)? {
                    records.push((catalog_index, record));
                }
            }
        }

        pos = window_end;
        on_progress(ScanProgress {
            bytes_scanned: pos,
            total_bytes: Some(length),
            records_found: records.len(),
        });
    }

    Ok(records)
}

/// Grows `buf` (by reading further from `source`) until `carve` stops
/// returning `NeedMore`, then returns the final outcome.
fn carve_streamed_growing(
    source: &StreamedSource,
    signature: &Signature,
    buf: &mut Vec<u8>,
    rel_start: usize,
    fallback_on_no_footer: bool,
) -> Result<CarveOutcome, ScanError> {
    let mut at_eof = false;
    loop {
        let outcome = carve(signature, &buf[rel_start..], at_eof, fallback_on_no_footer);
        match outcome {
            CarveOutcome::NeedMore { .. } => {
                let more = source.read_more(STREAMED_GROWTH_STEP as usize)?;
                if more.is_empty() {
                    at_eof = true;
                } else {
                    buf.extend_from_slice(&more);
                }
            }
            other => return Ok(other),
        }
    }
}

fn scan_streamed(
    source: &StreamedSource,
    matching: &[(usize, &Signature)],
    fallback_on_no_footer: bool,
    writer: &dyn RecordWriter,
    cancel: &CancellationToken,
    on_progress: &mut impl FnMut(ScanProgress),
) -> Result<Vec<(usize, RecoveredRecord)>, ScanError> {
    let mut dedup = DedupSet::new();
    let mut records = Vec::new();

    let mut buf: Vec<u8> = Vec::new();
    let mut base: u64 = 0;
    let mut scanned_rel: usize = 0;
    let mut eof = false;

    loop {
        if cancel.is_cancelled() {
            break;
        }

        if !eof {
            let chunk = source.read_more(CHUNK_LOG_BYTES as usize)?;
            if chunk.is_empty() {
                eof = true;
            } else {
                buf.extend_from_slice(&chunk);
            }
        }
        tracing::debug!(base, buf_len = buf.len(), eof, "scanning streamed chunk");

        for &(catalog_index, signature) in matching {
            let mut search_from_rel = scanned_rel;
            loop {
                // Recomputed every iteration: a footer search triggered by
                // an earlier candidate (this signature's or another's) may
                // have grown `buf` since this round started.
                let window_end_rel = buf.len();
                if search_from_rel >= window_end_rel {
                    break;
                }
                let Some(rel_idx) =
                    memchr::memmem::find(&buf[search_from_rel..window_end_rel], signature.header())
                        .map(|p| p + search_from_rel)
                else {
                    break;
                };
                search_from_rel = rel_idx + signature.header().len();

                let idx_abs = base + rel_idx as u64;
                if !dedup.admit(idx_abs) {
                    continue;
                }

                let outcome = carve_streamed_growing(
                    source,
                    signature,
                    &mut buf,
                    rel_idx,
                    fallback_on_no_footer,
                )?;
                let end = match outcome {
                    CarveOutcome::Accepted { end } => end,
                    CarveOutcome::Rejected(CarverError::NoFooter) => {
                        tracing::debug!(offset = idx_abs, signature = signature.name(), "candidate rejected: no footer");
                        continue;
                    }
                    CarveOutcome::NeedMore { .. } => continue,
                };
                let candidate = Candidate {
                    offset: idx_abs,
                    signature_name: signature.name().to_string(),
                    extension: signature.extension().to_string(),
                    bytes: buf[rel_idx..rel_idx + end as usize].to_vec(),
                };
                if let Some(record) = finalize_candidate(writer, candidate)? {
                    records.push((catalog_index, record));
                }
            }
        }
        scanned_rel = buf.len();

        on_progress(ScanProgress {
            bytes_scanned: base + buf.len() as u64,
            total_bytes: source.length(),
            records_found: records.len(),
        });

        if eof && scanned_rel >= buf.len() {
            break;
        }

        if buf.len() as u64 > FOOTER_WINDOW {
            let trim = buf.len() as u64 - FOOTER_WINDOW;
            buf.drain(0..trim as usize);
            base += trim;
            scanned_rel -= trim as usize;
        }
    }

    Ok(records)
}
