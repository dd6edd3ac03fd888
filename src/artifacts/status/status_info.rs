use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use crate::artifacts::status::inspector::Inspector;
use colored::Colorize;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    pub(crate) other_branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let index = self.repository.index();
        let head = self.repository.head_commit()?.into_snapshot();
        let workspace_files = self.repository.workspace().list_files()?;
        let inspector = Inspector::new(self.repository);

        let mut workspace_changeset = ChangeSet::new();

        for (path, staged_oid) in index.staged() {
            let change = inspector.check_workspace_against(
                path,
                staged_oid,
                workspace_files.contains(path),
            )?;
            if let Some(change) = change {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        for (path, head_oid) in head.iter() {
            if index.is_staged(path) || index.is_removed(path) {
                continue;
            }

            let change =
                inspector.check_workspace_against(path, head_oid, workspace_files.contains(path))?;
            if let Some(change) = change {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        let untracked_files = workspace_files
            .iter()
            .filter(|path| {
                !index.is_staged(path)
                    && (!head.contains(path) || index.is_removed(path) || index.is_untracked(path))
            })
            .cloned()
            .collect();

        Ok(StatusInfo {
            current_branch: refs.current_branch().clone(),
            other_branches: refs
                .branches()
                .map(|(name, _)| name)
                .filter(|name| *name != refs.current_branch())
                .cloned()
                .collect(),
            staged_files: index.staged().map(|(path, _)| path.clone()).collect(),
            removed_files: index.removed().cloned().collect(),
            workspace_changeset,
            untracked_files,
        })
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Branches ===")?;
        writeln!(f, "{}", format!("*{}", self.current_branch).green())?;
        for branch in &self.other_branches {
            writeln!(f, "{branch}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.workspace_changeset {
            writeln!(f, "{} {}", path.display(), change)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked_files {
            writeln!(f, "{}", path.display())?;
        }
        writeln!(f)
    }
}
