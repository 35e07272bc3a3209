//! The Signature Catalog (spec.md §4.1).

use crate::consts::MAX_FILE_SIZE;
use crate::domain::entities::{Catalog, Signature};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read signature document at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed signature document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("signature '{name}': header is empty or not valid hex")]
    InvalidHeader { name: String },

    #[error("signature '{name}': footer is not valid hex")]
    InvalidFooter { name: String },

    #[error("signature '{name}': max_size must be positive and at most the global cap")]
    InvalidMaxSize { name: String },
}

/// The raw, on-disk shape of one entry in the signature document
/// (spec.md §6, "Signature document").
#[derive(Debug, Deserialize)]
struct RawSignature {
    header: String,
    #[serde(default)]
    footer: Option<String>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    max_size: Option<u64>,
}

/// Loads and compiles a signature catalog from an external JSON document.
///
/// Order of the returned `Catalog` mirrors the document's key order
/// (requires `serde_json`'s `preserve_order` feature — see DESIGN.md).
/// Grounded on `infrastructure::carvers::signatures::mod.rs`'s per-format
/// `FileSignature` builders in the teacher, redirected from hardcoded
/// construction to parsing an external document per spec.md §4.1/§6.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_catalog_from_str(&text)
}

pub fn load_catalog_from_str(text: &str) -> Result<Catalog, CatalogError> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;

    let mut signatures = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        let entry: RawSignature = serde_json::from_value(value)?;
        signatures.push(compile(name, entry)?);
    }
    Ok(Catalog::new(signatures))
}

fn compile(name: String, entry: RawSignature) -> Result<Signature, CatalogError> {
    let header = hex::decode(&entry.header).map_err(|_| CatalogError::InvalidHeader {
        name: name.clone(),
    })?;
    if header.is_empty() {
        return Err(CatalogError::InvalidHeader { name });
    }

    let max_size = entry.max_size.unwrap_or(MAX_FILE_SIZE);
    if max_size == 0 || max_size > MAX_FILE_SIZE {
        return Err(CatalogError::InvalidMaxSize { name });
    }

    let extension = entry.extension.unwrap_or_default().to_ascii_lowercase();

    match entry.footer {
        Some(footer_hex) => {
            let footer = hex::decode(&footer_hex).map_err(|_| CatalogError::InvalidFooter {
                name: name.clone(),
            })?;
            if footer.is_empty() {
                return Err(CatalogError::InvalidFooter { name });
            }
            Ok(Signature::FooterBounded {
                name,
                header,
                footer,
                extension,
                max_size,
            })
        }
        None => Ok(Signature::FixedSize {
            name,
            header,
            extension,
            max_size,
        }),
    }
}

/// The catalog shipped inside the binary as a fallback for `--signatures`
/// being omitted (spec.md §4.1): the same document format `load_catalog`
/// consumes, not a separate hardcoded construction path.
pub fn default_catalog() -> Catalog {
    load_catalog_from_str(DEFAULT_CATALOG_JSON).expect("embedded default catalog is well-formed")
}

const DEFAULT_CATALOG_JSON: &str = r#"{
  "JPEG": { "header": "FFD8FF", "footer": "FFD9", "extension": "jpg", "max_size": 16777216 },
  "PNG": { "header": "89504E470D0A1A0A", "footer": "49454E44AE426082", "extension": "png", "max_size": 33554432 },
  "GIF89a": { "header": "474946383961", "footer": "003B", "extension": "gif", "max_size": 16777216 },
  "GIF87a": { "header": "474946383761", "footer": "003B", "extension": "gif", "max_size": 16777216 },
  "BMP": { "header": "424D", "extension": "bmp", "max_size": 33554432 },
  "WEBP": { "header": "52494646", "extension": "webp", "max_size": 33554432 },
  "TIFF_LE": { "header": "49492A00", "extension": "tiff", "max_size": 67108864 },
  "TIFF_BE": { "header": "4D4D002A", "extension": "tiff", "max_size": 67108864 },
  "MP4": { "header": "00000018667479706D703432", "extension": "mp4", "max_size": 268435456 },
  "PDF": { "header": "255044462D", "footer": "2525454F46", "extension": "pdf", "max_size": 67108864 }
}"#;
