//! Git-backed commit message and patch set lookups.

pub mod patch_set;
pub mod site;

pub use patch_set::{change_ref, ProjectPatchSets};
pub use site::GitSite;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
