//! Patch set lookup through Gerrit change refs.

use tracing::debug;

use super::site::GitSite;
use crate::extract::{ExtractError, PatchSetHistory, PatchSetRef};

/// Returns the change ref of a patch set, e.g. `refs/changes/34/1234/5`.
pub fn change_ref(patch_set: &PatchSetRef) -> String {
    format!(
        "refs/changes/{:02}/{}/{}",
        patch_set.change_id % 100,
        patch_set.change_id,
        patch_set.patch_set_number
    )
}

/// Resolves patch sets from the change refs of a [`GitSite`]'s projects.
#[derive(Debug, Clone)]
pub struct ProjectPatchSets {
    site: GitSite,
}

impl ProjectPatchSets {
    /// Creates a lookup over `site`.
    pub fn new(site: GitSite) -> Self {
        Self { site }
    }
}

impl PatchSetHistory for ProjectPatchSets {
    fn revision(&self, project: &str, patch_set: &PatchSetRef) -> Result<String, ExtractError> {
        let repo = self.site.open(project)?;
        let name = change_ref(patch_set);

        let oid = match repo.refname_to_id(&name) {
            Ok(oid) => oid,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(ExtractError::PatchSetNotFound {
                    change_id: patch_set.change_id,
                    patch_set_number: patch_set.patch_set_number,
                });
            }
            Err(e) => return Err(e.into()),
        };

        debug!(project, reference = %name, revision = %oid, "Resolved change ref");
        Ok(oid.to_string())
    }
}
