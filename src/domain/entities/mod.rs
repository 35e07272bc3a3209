pub mod catalog;
pub mod record;
pub mod signature;

pub use catalog::Catalog;
pub use record::RecoveredRecord;
pub use signature::{Candidate, Signature};
