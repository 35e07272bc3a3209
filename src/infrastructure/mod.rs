//! Infrastructure layer: concrete adapters for the domain's repository
//! ports.

pub mod byte_source;
pub mod persistence;
