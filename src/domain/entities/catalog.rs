//! The compiled signature catalog.

use super::signature::Signature;

/// An ordered, immutable collection of compiled signatures.
///
/// Order mirrors the order signatures appeared in the source document
/// (spec.md §4.1) — this is load-bearing: it is the tie-breaker the
/// Scanner uses when two headers are found at the same offset across
/// different signatures (§4.6, "secondary key is catalog order").
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    signatures: Vec<Signature>,
}

impl Catalog {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
