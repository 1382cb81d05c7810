//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`line_source`]: sequential, forward-only access to the lines of a source
//!
//! These ports let the use case stay independent of where lines come from.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod line_source;

pub use line_source::{ComparisonPlan, LineSource, SourceOpener};
