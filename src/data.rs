//! Report data and serialization.

pub mod report;
pub mod yaml;

pub use report::{IssueReport, OutputFormat};
pub use yaml::{from_yaml, to_yaml};
