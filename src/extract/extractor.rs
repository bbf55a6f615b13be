//! Issue extraction entry points.

use std::collections::HashSet;

use tracing::debug;

use super::diff::mark_added;
use super::error::ExtractError;
use super::message::CommitMessageZones;
use super::occurrence::OccurrenceIndex;
use super::pattern::IssuePattern;
use super::source::{CommitMessageFetcher, PatchSetHistory, PatchSetRef};

/// Builds the occurrence index of `text` without any fetching.
pub fn extract_from_text(pattern: &IssuePattern, text: &str) -> OccurrenceIndex {
    OccurrenceIndex::build(&CommitMessageZones::parse(text), pattern)
}

/// Extracts issue ids from commit messages.
///
/// The extractor keeps no state between calls; concurrent calls for
/// different revisions are independent.
pub struct IssueExtractor {
    pattern: IssuePattern,
    fetcher: Box<dyn CommitMessageFetcher>,
    history: Box<dyn PatchSetHistory>,
}

impl IssueExtractor {
    /// Creates an extractor over the given collaborators.
    pub fn new(
        pattern: IssuePattern,
        fetcher: Box<dyn CommitMessageFetcher>,
        history: Box<dyn PatchSetHistory>,
    ) -> Self {
        Self {
            pattern,
            fetcher,
            history,
        }
    }

    /// The pattern ids are extracted with.
    pub fn pattern(&self) -> &IssuePattern {
        &self.pattern
    }

    /// Returns the distinct ids in `text` in order of first occurrence.
    pub fn issue_ids(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pattern
            .find_ids(text)
            .filter(|id| seen.insert(*id))
            .map(str::to_string)
            .collect()
    }

    /// Indexes the ids in `text` by the zones they occur in.
    pub fn extract_from_text(&self, text: &str) -> OccurrenceIndex {
        extract_from_text(&self.pattern, text)
    }

    /// Fetches the message of `revision` and indexes it.
    pub fn extract_for_revision(
        &self,
        project: &str,
        revision: &str,
    ) -> Result<OccurrenceIndex, ExtractError> {
        debug!(project, revision, "Extracting issues for revision");
        let message = self.fetcher.fetch(project, revision)?;
        Ok(self.extract_from_text(&message))
    }

    /// Like [`extract_for_revision`], also marking zones added since the
    /// previous patch set.
    ///
    /// For the first patch set the result equals that of
    /// [`extract_for_revision`].
    ///
    /// [`extract_for_revision`]: Self::extract_for_revision
    pub fn extract_for_patch_set(
        &self,
        project: &str,
        revision: &str,
        patch_set: &PatchSetRef,
    ) -> Result<OccurrenceIndex, ExtractError> {
        let current = self.extract_for_revision(project, revision)?;

        let previous = match patch_set.previous() {
            Some(previous) => {
                let previous_revision = self.history.revision(project, &previous)?;
                debug!(
                    project,
                    patch_set = %previous,
                    revision = %previous_revision,
                    "Resolved previous patch set"
                );
                Some(self.extract_for_revision(project, &previous_revision)?)
            }
            None => None,
        };

        Ok(mark_added(current, previous.as_ref()))
    }
}
