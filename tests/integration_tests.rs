//! End-to-end scans over synthetic disk images, exercising both the mapped
//! and streamed byte-source paths through the same scenarios.
//!
//! Signatures used here deliberately avoid the `jpg`/`png`/`webp`
//! extensions except where the image-integrity check itself is under
//! test: synthetic carved bytes are not real images, and the Validator
//! (spec.md §4.4) would correctly reject them, which is exercised
//! separately in `candidate_sniffed_as_image_but_invalid_is_rejected`.

use argos::application::CancellationToken;
use argos::domain::entities::Signature;
use argos::infrastructure::byte_source::{MappedSource, StreamedSource};
use argos::infrastructure::persistence::LocalWriter;
use argos::{ByteSource, Catalog, FileTypeFilter, ScanOptions, scan};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn dat_signature() -> Signature {
    Signature::FooterBounded {
        name: "DAT".into(),
        header: b"DAT1".to_vec(),
        footer: b"ENDD".to_vec(),
        extension: "dat".into(),
        max_size: 1 << 20,
    }
}

fn pdf_signature() -> Signature {
    Signature::FooterBounded {
        name: "PDF".into(),
        header: b"%PDF-".to_vec(),
        footer: b"%%EOF".to_vec(),
        extension: "pdf".into(),
        max_size: 1 << 20,
    }
}

fn mp4_signature() -> Signature {
    Signature::FixedSize {
        name: "MP4".into(),
        header: vec![0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'],
        extension: "mp4".into(),
        max_size: 2048,
    }
}

fn write_image(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    file.sync_all().unwrap();
    path
}

fn run_both_modes(
    image_path: &std::path::Path,
    catalog: &Catalog,
    options: &ScanOptions,
) -> (Vec<argos::RecoveredRecord>, Vec<argos::RecoveredRecord>) {
    let out_mapped = TempDir::new().unwrap();
    let mapped = ByteSource::Mapped(MappedSource::open(image_path).unwrap());
    let writer_mapped = LocalWriter::new(out_mapped.path());
    let mapped_records = scan(
        &mapped,
        catalog,
        options,
        &writer_mapped,
        &CancellationToken::new(),
        |_| {},
    )
    .unwrap();

    let out_streamed = TempDir::new().unwrap();
    let streamed = ByteSource::Streamed(StreamedSource::open(image_path).unwrap());
    let writer_streamed = LocalWriter::new(out_streamed.path());
    let streamed_records = scan(
        &streamed,
        catalog,
        options,
        &writer_streamed,
        &CancellationToken::new(),
        |_| {},
    )
    .unwrap();

    (mapped_records, streamed_records)
}

// All fixtures below place at least MIN_VALID_SIZE (512) bytes between a
// header and the bytes that close its candidate, since anything shorter is
// discarded regardless of signature match (spec.md §4.4 "Minimum size
// floor").

#[test]
fn footer_bounded_file_is_recovered_by_both_modes() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    data[100..104].copy_from_slice(b"DAT1");
    data[700..704].copy_from_slice(b"ENDD");
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![dat_signature()]);
    let options = ScanOptions::default();
    let (mapped, streamed) = run_both_modes(&path, &catalog, &options);

    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].offset, 100);
    assert_eq!(mapped[0].size, 604);
    assert_eq!(mapped, streamed);
}

#[test]
fn missing_footer_falls_back_to_max_size_when_enabled() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    data[10..14].copy_from_slice(b"DAT1");
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![Signature::FooterBounded {
        name: "DAT".into(),
        header: b"DAT1".to_vec(),
        footer: b"ENDD".to_vec(),
        extension: "dat".into(),
        max_size: 1024,
    }]);

    let fallback_on = ScanOptions {
        file_type: FileTypeFilter::All,
        fallback_on_no_footer: true,
    };
    let (mapped, streamed) = run_both_modes(&path, &catalog, &fallback_on);
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].size, 1024);
    assert_eq!(mapped, streamed);

    let fallback_off = ScanOptions {
        file_type: FileTypeFilter::All,
        fallback_on_no_footer: false,
    };
    let (mapped_off, streamed_off) = run_both_modes(&path, &catalog, &fallback_off);
    assert!(mapped_off.is_empty());
    assert_eq!(mapped_off, streamed_off);
}

#[test]
fn second_header_within_offset_gap_is_not_admitted() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 8192];
    data[0..4].copy_from_slice(b"DAT1");
    data[520..524].copy_from_slice(b"ENDD");
    // A second header 200 bytes later, well inside MIN_OFFSET_GAP (1024).
    data[200..204].copy_from_slice(b"DAT1");
    data[720..724].copy_from_slice(b"ENDD");
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![dat_signature()]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].offset, 0);
    assert_eq!(mapped, streamed);
}

#[test]
fn fixed_size_file_is_carved_to_its_declared_max_size() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    let header = [0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'];
    data[500..500 + header.len()].copy_from_slice(&header);
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![mp4_signature()]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].offset, 500);
    assert_eq!(mapped[0].size, 2048);
    assert_eq!(mapped, streamed);
}

#[test]
fn unsafe_signature_name_does_not_escape_output_directory() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    let header = [0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p'];
    data[10..10 + header.len()].copy_from_slice(&header);
    let path = write_image(&dir, "disk.img", &data);

    let evil = Signature::FixedSize {
        name: "../../evil".into(),
        header: header.to_vec(),
        extension: "mp4".into(),
        max_size: 1024,
    };
    let catalog = Catalog::new(vec![evil]);

    let out = TempDir::new().unwrap();
    let source = ByteSource::Mapped(MappedSource::open(&path).unwrap());
    let writer = LocalWriter::new(out.path());
    let records = scan(
        &source,
        &catalog,
        &ScanOptions::default(),
        &writer,
        &CancellationToken::new(),
        |_| {},
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    let canonical_out = out.path().canonicalize().unwrap();
    assert!(records[0].path.starts_with(&canonical_out));
}

#[test]
fn two_signature_types_are_ordered_by_offset_then_catalog_order() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];

    // PDF at offset 1500, DAT at offset 100 — catalog lists DAT first.
    data[100..104].copy_from_slice(b"DAT1");
    data[800..804].copy_from_slice(b"ENDD");

    data[1500..1505].copy_from_slice(b"%PDF-");
    data[2100..2105].copy_from_slice(b"%%EOF");

    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![dat_signature(), pdf_signature()]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());

    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped[0].offset, 100);
    assert_eq!(mapped[0].signature_name, "DAT");
    assert_eq!(mapped[1].offset, 1500);
    assert_eq!(mapped[1].signature_name, "PDF");
    assert_eq!(mapped, streamed);
}

#[test]
fn header_near_end_of_stream_falls_back_to_available_bytes() {
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    data[3500..3504].copy_from_slice(b"DAT1");
    // No footer before EOF — relies on the fixed-size fallback, and the
    // available tail (596 bytes) is short of `max_size`.
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![Signature::FooterBounded {
        name: "DAT".into(),
        header: b"DAT1".to_vec(),
        footer: b"ENDD".to_vec(),
        extension: "dat".into(),
        max_size: 4096,
    }]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0].size, 596);
    assert_eq!(mapped, streamed);
}

#[test]
fn no_signatures_match_yields_an_empty_manifest() {
    let dir = TempDir::new().unwrap();
    let data = vec![0u8; 2048];
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![dat_signature()]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());
    assert!(mapped.is_empty());
    assert!(streamed.is_empty());
}

#[test]
fn candidate_sniffed_as_image_but_invalid_is_rejected() {
    // Bytes that open with the JPEG magic but are not a real JPEG: the
    // Validator's image-integrity check (spec.md §4.4) must reject the
    // candidate even though the header/footer search alone would accept it.
    let dir = TempDir::new().unwrap();
    let mut data = vec![0u8; 4096];
    data[100..103].copy_from_slice(&[0xFF, 0xD8, 0xFF]);
    data[700] = 0xFF;
    data[701] = 0xD9;
    let path = write_image(&dir, "disk.img", &data);

    let catalog = Catalog::new(vec![Signature::FooterBounded {
        name: "JPEG".into(),
        header: vec![0xFF, 0xD8, 0xFF],
        footer: vec![0xFF, 0xD9],
        extension: "jpg".into(),
        max_size: 1 << 20,
    }]);
    let (mapped, streamed) = run_both_modes(&path, &catalog, &ScanOptions::default());
    assert!(mapped.is_empty());
    assert!(streamed.is_empty());
}
