//! Compiled file-format signatures.

/// A single format definition, compiled once at catalog load time.
///
/// The two variants mirror the two carving strategies in
/// `domain::services::carver`: a signature either has a footer to search
/// for, or it doesn't and is carved to a fixed size. Keeping this as a
/// closed, tagged enum (rather than a struct with an optional footer field)
/// means downstream code matches on strategy instead of re-checking
/// `Option::is_some` at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    FooterBounded {
        name: String,
        header: Vec<u8>,
        footer: Vec<u8>,
        extension: String,
        max_size: u64,
    },
    FixedSize {
        name: String,
        header: Vec<u8>,
        extension: String,
        max_size: u64,
    },
}

impl Signature {
    pub fn name(&self) -> &str {
        match self {
            Signature::FooterBounded { name, .. } => name,
            Signature::FixedSize { name, .. } => name,
        }
    }

    pub fn header(&self) -> &[u8] {
        match self {
            Signature::FooterBounded { header, .. } => header,
            Signature::FixedSize { header, .. } => header,
        }
    }

    pub fn footer(&self) -> Option<&[u8]> {
        match self {
            Signature::FooterBounded { footer, .. } => Some(footer),
            Signature::FixedSize { .. } => None,
        }
    }

    pub fn extension(&self) -> &str {
        match self {
            Signature::FooterBounded { extension, .. } => extension,
            Signature::FixedSize { extension, .. } => extension,
        }
    }

    pub fn max_size(&self) -> u64 {
        match self {
            Signature::FooterBounded { max_size, .. } => *max_size,
            Signature::FixedSize { max_size, .. } => *max_size,
        }
    }

    /// Matches this signature against a `file_type` token: the declared
    /// extension or the signature name, case-insensitively.
    pub fn matches_type(&self, token: &str) -> bool {
        self.extension().eq_ignore_ascii_case(token) || self.name().eq_ignore_ascii_case(token)
    }
}

/// A carved-but-not-yet-validated byte range, owned transiently by the
/// dispatch that produced it (spec.md §3, "Candidate").
#[derive(Debug, Clone)]
pub struct Candidate {
    pub offset: u64,
    pub signature_name: String,
    pub extension: String,
    pub bytes: Vec<u8>,
}

impl Candidate {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
