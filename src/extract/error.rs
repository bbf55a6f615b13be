//! Extraction error handling.

use thiserror::Error;

/// Errors raised while fetching the inputs of an extraction.
///
/// Pattern misses and an unconfigured pattern are not errors; they simply
/// produce an empty result.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No repository could be opened for the project.
    #[error("No repository found for project '{project}'")]
    RepositoryNotFound {
        /// Project name as passed by the caller.
        project: String,
        /// Underlying git error from the last attempted location.
        #[source]
        source: git2::Error,
    },

    /// The project name is absolute or leaves the site root.
    #[error("Invalid project name '{project}'")]
    InvalidProject {
        /// Project name as passed by the caller.
        project: String,
    },

    /// The revision does not resolve to a commit in the project.
    #[error("Revision '{revision}' not found in project '{project}'")]
    RevisionNotFound {
        /// Project name as passed by the caller.
        project: String,
        /// Revision as passed by the caller.
        revision: String,
        /// Underlying git error.
        #[source]
        source: git2::Error,
    },

    /// No revision is recorded for the patch set.
    #[error("Patch set {patch_set_number} of change {change_id} not found")]
    PatchSetNotFound {
        /// Change number.
        change_id: u64,
        /// Patch set number within the change.
        patch_set_number: u32,
    },

    /// The configured issue pattern is not a valid regular expression.
    #[error("Invalid issue pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Any other git failure.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}
