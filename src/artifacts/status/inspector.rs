use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::errors::{TwigError, TwigResult};
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Working files that are neither staged nor tracked by `head`
    pub fn untracked_files(
        &self,
        workspace_files: &BTreeSet<PathBuf>,
        head: &Snapshot,
    ) -> BTreeSet<PathBuf> {
        let index = self.repository.index();

        workspace_files
            .iter()
            .filter(|path| !index.is_staged(path) && !head.contains(path))
            .cloned()
            .collect()
    }

    /// Refuse to go on if a checkout could clobber an untracked file
    pub fn check_untracked(&self) -> TwigResult<()> {
        let head = self.repository.head_commit()?.into_snapshot();
        let workspace_files = self.repository.workspace().list_files()?;

        let untracked = self.untracked_files(&workspace_files, &head);
        if let Some(path) = untracked.first() {
            tracing::debug!(path = %path.display(), "untracked file in the way");
            return Err(TwigError::UntrackedFileInTheWay);
        }

        Ok(())
    }

    fn is_content_changed(&self, path: &Path, expected: &ObjectId) -> anyhow::Result<bool> {
        let blob = self.repository.workspace().parse_blob(path)?;
        let oid = blob.object_id()?;

        Ok(&oid != expected)
    }

    /// Compare a working file against the blob it is expected to hold
    pub fn check_workspace_against(
        &self,
        path: &Path,
        expected: &ObjectId,
        is_present: bool,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        if !is_present {
            Ok(Some(WorkspaceChangeType::Deleted))
        } else if self.is_content_changed(path, expected)? {
            Ok(Some(WorkspaceChangeType::Modified))
        } else {
            Ok(None)
        }
    }
}
