pub mod local_writer;

pub use local_writer::LocalWriter;
