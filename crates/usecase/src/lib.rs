//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`comparator`]: the lockstep scan that measures the common line prefix
//! - [`orchestrator`]: opens both sources through the ports and runs the scan
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod comparator;
pub mod dto;
pub mod orchestrator;

pub use comparator::common_prefix;
pub use dto::{PrefixReport, PrefixScan, StopReason};
pub use orchestrator::CountCommonPrefix;
