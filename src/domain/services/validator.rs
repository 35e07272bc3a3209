//! The Validator (spec.md §4.4): format sniffing and image integrity
//! checks.

/// Re-examines the carved bytes' leading magic and returns a refined
/// extension, independent of what the owning signature declared.
///
/// Grounded on `infrastructure::carvers::image_carver::ImageCarver::validate`
/// in the teacher, which performs the same per-format magic re-checks but
/// scattered across format-specific functions; collapsed here into the
/// single sniff spec.md §4.4 describes.
pub fn detect_format(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
    }
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return "png";
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return "webp";
    }
    "bin"
}

/// The refined extensions that carry a mandatory image-integrity check
/// after sniffing.
pub fn is_image_extension(extension: &str) -> bool {
    matches!(extension, "jpg" | "png" | "webp")
}

/// Opens the artifact written at `path` and verifies it decodes as a valid
/// image of the given refined `extension`.
///
/// The teacher's `local_file_writer.rs` referenced the `image` crate for a
/// conversion path but never wired it to an integrity check; this is that
/// missing call site, grounded on `crates/argos_core/Cargo.toml`'s already-
/// declared (but previously unused) `image` dependency.
pub fn is_valid_image(path: &std::path::Path, extension: &str) -> bool {
    let format = match extension {
        "jpg" => image::ImageFormat::Jpeg,
        "png" => image::ImageFormat::Png,
        "webp" => image::ImageFormat::WebP,
        _ => return true,
    };
    match std::fs::read(path) {
        Ok(bytes) => image::load_from_memory_with_format(&bytes, format).is_ok(),
        Err(_) => false,
    }
}
