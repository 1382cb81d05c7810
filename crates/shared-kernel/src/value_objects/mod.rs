// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod line;
pub mod source_path;

pub use counts::MatchCount;
pub use line::Line;
pub use source_path::SourcePath;
