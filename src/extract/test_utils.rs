//! Shared test utilities for the `extract` module.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::ExtractError;
use super::source::{CommitMessageFetcher, PatchSetHistory, PatchSetRef};

/// In-memory commit store keyed by `(project, revision)`.
///
/// Every fetch is recorded so tests can check which revisions were read.
/// Unknown revisions fail with [`ExtractError::RevisionNotFound`].
#[derive(Default)]
pub(crate) struct MockCommitStore {
    messages: HashMap<(String, String), String>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MockCommitStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a commit message for `revision` in `project`.
    pub(crate) fn with_message(mut self, project: &str, revision: &str, message: &str) -> Self {
        self.messages.insert(
            (project.to_string(), revision.to_string()),
            message.to_string(),
        );
        self
    }

    /// Returns a shared handle to the list of fetched revisions.
    pub(crate) fn fetch_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.fetched)
    }
}

impl CommitMessageFetcher for MockCommitStore {
    fn fetch(&self, project: &str, revision: &str) -> Result<String, ExtractError> {
        self.fetched.lock().unwrap().push(revision.to_string());
        self.messages
            .get(&(project.to_string(), revision.to_string()))
            .cloned()
            .ok_or_else(|| ExtractError::RevisionNotFound {
                project: project.to_string(),
                revision: revision.to_string(),
                source: git2::Error::from_str("no such mock revision"),
            })
    }
}

/// In-memory patch set table.
#[derive(Default)]
pub(crate) struct MockPatchSets {
    revisions: HashMap<PatchSetRef, String>,
}

impl MockPatchSets {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `revision` as the commit of `patch_set`.
    pub(crate) fn with_revision(mut self, patch_set: PatchSetRef, revision: &str) -> Self {
        self.revisions.insert(patch_set, revision.to_string());
        self
    }
}

impl PatchSetHistory for MockPatchSets {
    fn revision(&self, _project: &str, patch_set: &PatchSetRef) -> Result<String, ExtractError> {
        self.revisions
            .get(patch_set)
            .cloned()
            .ok_or(ExtractError::PatchSetNotFound {
                change_id: patch_set.change_id,
                patch_set_number: patch_set.patch_set_number,
            })
    }
}
