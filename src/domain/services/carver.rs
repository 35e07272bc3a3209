//! The Carver (spec.md §4.3): pure byte-range decisions over an
//! already-supplied buffer. I/O (mapping a slice, or growing a streamed
//! buffer) is the caller's concern — `application::scan_use_case` drives
//! that — so this module stays trivially unit- and property-testable.

use crate::consts::FOOTER_WINDOW;
use crate::domain::entities::Signature;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarverError {
    /// No footer was found within the bounded window and fallback is
    /// disabled. Internal: never surfaced past the Scanner, which
    /// discards the candidate (spec.md §7).
    #[error("no footer found within the search window")]
    NoFooter,
}

/// The result of attempting to carve a candidate from `buf`, which must
/// start exactly at the signature's header (`buf[0]` is the header's first
/// byte).
#[derive(Debug, PartialEq, Eq)]
pub enum CarveOutcome {
    /// A candidate range `[0, end)` relative to `buf` was determined.
    Accepted { end: u64 },
    /// `buf` does not yet contain enough bytes to decide; the caller should
    /// grow it to at least `up_to` bytes (or reach end-of-source) and call
    /// `carve` again.
    NeedMore { up_to: u64 },
    Rejected(CarverError),
}

/// Searches for `footer` in `buf[header_len..limit]`, returning the
/// absolute-within-`buf` end offset (exclusive, i.e. past the footer's last
/// byte) of the first occurrence.
///
/// Starting the search at `header_len` rather than `0` is load-bearing: it
/// forbids a signature's own header bytes from satisfying its footer
/// (spec.md §4.3, "Footer search starts at `s + h`, never earlier").
pub fn find_footer(buf: &[u8], header_len: u64, footer: &[u8], limit: u64) -> Option<u64> {
    let start = header_len as usize;
    let limit = (limit as usize).min(buf.len());
    if start >= limit || footer.is_empty() {
        return None;
    }
    let finder = memchr::memmem::Finder::new(footer);
    finder
        .find(&buf[start..limit])
        .map(|rel| (start + rel + footer.len()) as u64)
}

/// Decides the outcome for `signature` given the bytes collected so far.
///
/// `at_eof` means the caller guarantees no further bytes will ever become
/// available for this candidate (either the source itself ended, or the
/// caller already sliced exactly up to the relevant cap). `fallback_on_no_footer`
/// is the `FALLBACK_ON_NO_FOOTER` policy constant.
pub fn carve(
    signature: &Signature,
    buf: &[u8],
    at_eof: bool,
    fallback_on_no_footer: bool,
) -> CarveOutcome {
    let header_len = signature.header().len() as u64;
    match signature {
        Signature::FixedSize { max_size, .. } => {
            let cap = *max_size;
            if !at_eof && (buf.len() as u64) < cap {
                return CarveOutcome::NeedMore { up_to: cap };
            }
            CarveOutcome::Accepted {
                end: (buf.len() as u64).min(cap),
            }
        }
        Signature::FooterBounded {
            footer, max_size, ..
        } => {
            let cap = (*max_size).min(FOOTER_WINDOW);
            let search_limit = (buf.len() as u64).min(cap);
            if let Some(end) = find_footer(buf, header_len, footer, search_limit) {
                return CarveOutcome::Accepted { end };
            }
            if (buf.len() as u64) < cap && !at_eof {
                return CarveOutcome::NeedMore { up_to: cap };
            }
            if fallback_on_no_footer {
                CarveOutcome::Accepted {
                    end: (buf.len() as u64).min(*max_size),
                }
            } else {
                CarveOutcome::Rejected(CarverError::NoFooter)
            }
        }
    }
}
