// crates/infra/src/persistence.rs
mod file_reader;
mod line_source;

pub use file_reader::FileReader;
pub use line_source::{FileLineSource, FsSourceOpener};
