//! Staging area
//!
//! The staging area records what the next commit changes relative to HEAD:
//! - `staged`: paths mapped to the blob they will point to
//! - `removed`: paths the next commit stops tracking
//! - `untracked`: paths that were explicitly removed and are no longer
//!   considered part of the project
//!
//! It is persisted as the `index` half of the state record and is empty right
//! after a commit, a branch checkout or a reset.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    staged: BTreeMap<PathBuf, ObjectId>,
    removed: BTreeSet<PathBuf>,
    untracked: BTreeSet<PathBuf>,
}

impl Index {
    /// Stage `path` to point at `oid` in the next commit
    pub fn add(&mut self, path: PathBuf, oid: ObjectId) {
        self.forget_removal(&path);
        self.staged.insert(path, oid);
    }

    /// Drop any pending addition for `path`
    pub fn unstage(&mut self, path: &Path) -> Option<ObjectId> {
        self.staged.remove(path)
    }

    /// Clear `path` from the removal and untracked sets
    pub fn forget_removal(&mut self, path: &Path) {
        self.removed.remove(path);
        self.untracked.remove(path);
    }

    /// Stop tracking `path` in the next commit
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.staged.remove(&path);
        self.removed.insert(path);
    }

    pub fn mark_untracked(&mut self, path: PathBuf) {
        self.untracked.insert(path);
    }

    pub fn staged_oid(&self, path: &Path) -> Option<&ObjectId> {
        self.staged.get(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.staged.contains_key(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    pub fn is_untracked(&self, path: &Path) -> bool {
        self.untracked.contains(path)
    }

    pub fn staged(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.staged.iter()
    }

    pub fn removed(&self) -> impl Iterator<Item = &PathBuf> {
        self.removed.iter()
    }

    /// Whether a commit would record anything
    pub fn has_pending_changes(&self) -> bool {
        !self.staged.is_empty() || !self.removed.is_empty()
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
        self.untracked.clear();
    }

    /// The snapshot of the next commit: `base` plus staged entries minus removals
    pub fn apply_to(&self, mut base: Snapshot) -> Snapshot {
        for (path, oid) in &self.staged {
            base.insert(path.clone(), oid.clone());
        }
        for path in &self.removed {
            base.remove(path);
        }

        base
    }
}
