//! Issue reference extraction from commit messages.
//!
//! A message is split into subject, body and footer zones; every id the
//! configured [`IssuePattern`] finds is tagged with the zones it occurs in.
//! Given the previous patch set of a change, zones an id newly appears in
//! are additionally marked as added.
//!
//! ```rust
//! use commit_issues::extract::{extract_from_text, IssuePattern};
//!
//! let pattern = IssuePattern::compile(r"bug#(\d+)", 1).unwrap();
//! let index = extract_from_text(&pattern, "Fix crash\n\nBug: bug#42");
//!
//! let tags: Vec<String> = index.get("42").unwrap().iter().map(|t| t.to_string()).collect();
//! assert_eq!(tags, ["somewhere", "footer", "footer-Bug"]);
//! ```

pub mod diff;
pub mod error;
pub mod extractor;
pub mod footer;
pub mod message;
pub mod occurrence;
pub mod pattern;
pub mod source;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub(crate) mod test_utils;

pub use diff::mark_added;
pub use error::ExtractError;
pub use extractor::{extract_from_text, IssueExtractor};
pub use footer::footer_key;
pub use message::CommitMessageZones;
pub use occurrence::{OccurrenceIndex, Tag, ZoneTag};
pub use pattern::IssuePattern;
pub use source::{CommitMessageFetcher, PatchSetHistory, PatchSetRef};
