use crate::areas::database::CommitCache;
use crate::areas::repository::Repository;
use crate::artifacts::merge::conflict::conflict_content;
use crate::artifacts::merge::outcome::{MergeAction, classify_snapshots};
use crate::artifacts::merge::split_finder::SplitFinder;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use crate::errors::{TwigError, TwigResult};
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

const ANCESTOR_MESSAGE: &str = "Given branch is an ancestor of the current branch.";
const FAST_FORWARD_MESSAGE: &str = "Current branch fast-forwarded.";
const CONFLICT_MESSAGE: &str = "Encountered a merge conflict.";

impl Repository {
    /// Merge `branch` into the current branch
    ///
    /// Fast-forwards when the current tip is an ancestor of the target, does
    /// nothing when the target is an ancestor of the current tip, and otherwise
    /// applies a three-way merge against the split point and commits the result.
    pub fn merge(&mut self, branch: &str) -> TwigResult<()> {
        self.inspector().check_untracked()?;
        if self.index().has_pending_changes() {
            return Err(TwigError::UncommittedChanges);
        }
        let target_oid = self
            .refs()
            .read_branch(branch)
            .ok_or(TwigError::BranchNotFound)?
            .clone();
        if self.refs().is_current_branch(branch) {
            return Err(TwigError::MergeWithItself);
        }

        let head_oid = self.refs().read_head().clone();
        let split_oid = self.find_split_point(&head_oid, &target_oid)?;

        if split_oid == target_oid {
            writeln!(self.writer(), "{ANCESTOR_MESSAGE}")?;
            return Ok(());
        }

        if split_oid == head_oid {
            self.materialize(&target_oid)?;
            self.refs_mut().update_head(target_oid);
            self.index_mut().clear();
            writeln!(self.writer(), "{FAST_FORWARD_MESSAGE}")?;
            return Ok(());
        }

        let split = self.database().load_commit(&split_oid)?.into_snapshot();
        let current = self.database().load_commit(&head_oid)?.into_snapshot();
        let target = self.database().load_commit(&target_oid)?.into_snapshot();

        let mut has_conflicts = false;
        for (path, outcome) in classify_snapshots(&split, &current, &target) {
            match outcome.action() {
                MergeAction::KeepCurrent => {}
                MergeAction::TakeTarget => {
                    let blob_oid = Self::blob_in(&target, &path)?;
                    let blob = self.database().load_blob(&blob_oid)?;

                    self.workspace().write_file(&path, blob.content())?;
                    self.index_mut().add(path, blob_oid);
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(&path)?;
                    self.index_mut().mark_removed(path);
                }
                MergeAction::Conflict => {
                    let current_content = self.blob_content(current.get(&path))?;
                    let target_content = self.blob_content(target.get(&path))?;
                    let blob = Blob::new(conflict_content(
                        current_content.as_deref(),
                        target_content.as_deref(),
                    ));
                    let blob_oid = self.database().store(&blob)?;

                    self.workspace().write_file(&path, blob.content())?;
                    self.index_mut().add(path, blob_oid);
                    has_conflicts = true;
                }
            }
        }

        if has_conflicts {
            writeln!(self.writer(), "{CONFLICT_MESSAGE}")?;
        }

        let message = format!("Merged {} into {}.", branch, self.refs().current_branch());
        self.write_commit(message)?;

        Ok(())
    }

    fn find_split_point(&self, head_oid: &ObjectId, target_oid: &ObjectId) -> anyhow::Result<ObjectId> {
        let commit_cache = CommitCache::new();
        let database = self.database();

        let split_finder =
            SplitFinder::new(|oid| commit_cache.get_or_load_slim_commit(database, oid));

        split_finder
            .find_split_point(head_oid, target_oid)?
            .ok_or_else(|| anyhow::anyhow!("no common ancestor between {head_oid} and {target_oid}"))
    }

    fn blob_in(snapshot: &Snapshot, path: &Path) -> anyhow::Result<ObjectId> {
        snapshot
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} missing from merge target", path.display()))
    }

    fn blob_content(&self, blob_oid: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        blob_oid
            .map(|oid| self.database().load_blob(oid).map(|blob| blob.content().clone()))
            .transpose()
    }
}
