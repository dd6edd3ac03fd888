use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TwigError, TwigResult};

impl Repository {
    /// Restore one file from a commit (HEAD when `commit` is None)
    ///
    /// The file is written to the working directory but not staged.
    pub fn checkout_file(&self, file: &str, commit: Option<&str>) -> TwigResult<()> {
        let commit_oid = match commit {
            Some(commit) => self.resolve_commit(commit)?,
            None => self.refs().read_head().clone(),
        };
        let path = self.workspace().relative_path(file);

        let commit = self.database().load_commit(&commit_oid)?;
        let blob_oid = commit
            .snapshot()
            .get(&path)
            .ok_or(TwigError::FileNotInCommit)?;
        let blob = self.database().load_blob(blob_oid)?;

        self.workspace().write_file(&path, blob.content())?;

        Ok(())
    }

    /// Switch to another branch, replacing the working directory with its tip
    pub fn checkout_branch(&mut self, branch: &str) -> TwigResult<()> {
        let target_oid = self
            .refs()
            .read_branch(branch)
            .ok_or(TwigError::NoSuchBranch)?
            .clone();
        if self.refs().is_current_branch(branch) {
            return Err(TwigError::AlreadyOnBranch);
        }
        self.inspector().check_untracked()?;

        self.materialize(&target_oid)?;
        self.refs_mut().switch_branch(branch)?;
        self.index_mut().clear();

        Ok(())
    }

    /// Make the working directory hold exactly the snapshot of `commit_oid`
    pub(crate) fn materialize(&self, commit_oid: &ObjectId) -> anyhow::Result<()> {
        let snapshot = self.database().load_commit(commit_oid)?.into_snapshot();
        let workspace_files = self.workspace().list_files()?;

        let migration = Migration::plan(&workspace_files, &snapshot);
        self.workspace().apply_migration(&migration, self.database())
    }
}
