//! Repositories hosted under a common root directory.

use std::path::{Component, Path, PathBuf};

use git2::Repository;
use tracing::debug;

use super::patch_set::ProjectPatchSets;
use crate::extract::{CommitMessageFetcher, ExtractError};

/// A directory of git repositories, one per project.
///
/// The project `foo` lives at `<root>/foo.git` or `<root>/foo`; the project
/// `.` (or the empty name) is the root repository itself. Repositories are
/// opened afresh for every call.
#[derive(Debug, Clone)]
pub struct GitSite {
    root: PathBuf,
}

impl GitSite {
    /// Creates a site rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the site.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Patch set history of the site's projects, read from their change refs.
    pub fn patch_sets(&self) -> ProjectPatchSets {
        ProjectPatchSets::new(self.clone())
    }

    /// Opens the repository of `project`.
    ///
    /// Names with `..`, a root or a drive prefix are rejected, so only
    /// repositories below the root can be opened.
    pub fn open(&self, project: &str) -> Result<Repository, ExtractError> {
        if !is_relative_name(project) {
            return Err(ExtractError::InvalidProject {
                project: project.to_string(),
            });
        }

        let candidates = if project.is_empty() || project == "." {
            vec![self.root.clone()]
        } else {
            vec![
                self.root.join(format!("{project}.git")),
                self.root.join(project),
            ]
        };

        let mut last_error = None;
        for candidate in candidates {
            match Repository::open(&candidate) {
                Ok(repo) => {
                    debug!(project, path = %candidate.display(), "Opened repository");
                    return Ok(repo);
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(ExtractError::RepositoryNotFound {
            project: project.to_string(),
            source: last_error.unwrap_or_else(|| git2::Error::from_str("no candidate path")),
        })
    }
}

fn is_relative_name(project: &str) -> bool {
    Path::new(project)
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

impl CommitMessageFetcher for GitSite {
    fn fetch(&self, project: &str, revision: &str) -> Result<String, ExtractError> {
        let repo = self.open(project)?;

        let commit = repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map_err(|source| ExtractError::RevisionNotFound {
                project: project.to_string(),
                revision: revision.to_string(),
                source,
            })?;

        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn project_names_stay_below_root() {
        assert!(is_relative_name("demo"));
        assert!(is_relative_name("tools/gerrit"));
        assert!(is_relative_name("."));
        assert!(is_relative_name(""));
        assert!(!is_relative_name("../other"));
        assert!(!is_relative_name("tools/../../other"));
        assert!(!is_relative_name("/srv/git/other"));
    }

    #[test]
    fn escaping_project_is_rejected_before_opening() {
        let temp_dir = tempfile::tempdir().unwrap();
        let site = GitSite::new(temp_dir.path().join("site"));
        Repository::init(temp_dir.path().join("other")).unwrap();

        let err = site.open("../other").err().unwrap();
        assert!(matches!(
            err,
            ExtractError::InvalidProject { ref project } if project == "../other"
        ));
    }
}
