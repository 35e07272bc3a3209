pub mod byte_source;
pub mod writer;

pub use byte_source::SourceError;
pub use writer::{RecordWriter, WriterError};
