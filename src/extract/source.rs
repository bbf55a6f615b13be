//! Collaborators the extractor fetches its inputs from.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ExtractError;

/// Identifies one patch set of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatchSetRef {
    /// Change number.
    pub change_id: u64,
    /// Patch set number within the change, starting at 1.
    pub patch_set_number: u32,
}

impl PatchSetRef {
    /// Creates a reference to patch set `patch_set_number` of `change_id`.
    pub fn new(change_id: u64, patch_set_number: u32) -> Self {
        Self {
            change_id,
            patch_set_number,
        }
    }

    /// The patch set before this one, or `None` for the first patch set.
    pub fn previous(&self) -> Option<Self> {
        (self.patch_set_number > 1).then(|| Self::new(self.change_id, self.patch_set_number - 1))
    }
}

impl fmt::Display for PatchSetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.change_id, self.patch_set_number)
    }
}

/// Fetches raw commit messages.
pub trait CommitMessageFetcher: Send + Sync {
    /// Returns the full message of `revision` in `project`.
    fn fetch(&self, project: &str, revision: &str) -> Result<String, ExtractError>;
}

/// Resolves patch sets to the revisions they were uploaded as.
pub trait PatchSetHistory: Send + Sync {
    /// Returns the revision id of `patch_set` in `project`.
    fn revision(&self, project: &str, patch_set: &PatchSetRef) -> Result<String, ExtractError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn first_patch_set_has_no_previous() {
        assert_eq!(PatchSetRef::new(4, 1).previous(), None);
        assert_eq!(PatchSetRef::new(4, 0).previous(), None);
    }

    #[test]
    fn previous_patch_set() {
        assert_eq!(PatchSetRef::new(4, 3).previous(), Some(PatchSetRef::new(4, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(PatchSetRef::new(1234, 5).to_string(), "1234,5");
    }
}
