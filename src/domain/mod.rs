//! Domain layer: entities, repository ports, and pure services. No I/O
//! beyond what `domain::services::catalog_loader` needs to parse a
//! document already read into memory.

pub mod entities;
pub mod repositories;
pub mod services;
