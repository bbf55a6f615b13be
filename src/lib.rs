//! # commit-issues
//!
//! Finds issue tracker references in git commit messages.
//!
//! ## Features
//!
//! - Splits messages into subject, body and footer zones
//! - Tags every issue id with the zones and footer keys it occurs under
//! - Marks zones an id newly appears in since the previous patch set
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_issues::extract::{extract_from_text, IssuePattern, Tag, ZoneTag};
//!
//! let pattern = IssuePattern::compile(r"bug#(\d+)", 1).unwrap();
//! let index = extract_from_text(&pattern, "Fix bug#42");
//! assert!(index.contains("42", &Tag::Zone(ZoneTag::Subject)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod data;
pub mod extract;
pub mod git;

pub use crate::cli::Cli;
