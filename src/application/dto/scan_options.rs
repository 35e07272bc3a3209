//! The `file_type` filter and scan policy knobs (spec.md §4.6, §9 Open
//! Questions).

use crate::domain::entities::Signature;

/// Resolves the spec's Open Question explicitly: "match everything" is a
/// first-class variant rather than the absence of a value, so a caller
/// cannot silently end up with an empty manifest by forgetting a filter.
///
/// Grounded on `application::dto::scan_options::ScanOptions` and
/// `presentation::cli::commands::parse_file_types` in the teacher, which
/// together encode the same policy ("empty list of types" = "all") but
/// leave it implicit at the DTO boundary; made explicit here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTypeFilter {
    All,
    One(String),
    Many(Vec<String>),
}

impl FileTypeFilter {
    pub fn matches(&self, signature: &Signature) -> bool {
        match self {
            FileTypeFilter::All => true,
            FileTypeFilter::One(token) => signature.matches_type(token),
            FileTypeFilter::Many(tokens) => tokens.iter().any(|t| signature.matches_type(t)),
        }
    }
}

/// Policy knobs for one scan invocation, separate from the compile-time
/// constants in `consts` (spec.md §9: those are "not per-scan parameters").
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub file_type: FileTypeFilter,
    pub fallback_on_no_footer: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            file_type: FileTypeFilter::All,
            fallback_on_no_footer: crate::consts::FALLBACK_ON_NO_FOOTER,
        }
    }
}
