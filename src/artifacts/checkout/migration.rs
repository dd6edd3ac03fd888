//! Working-directory migration plan
//!
//! Moving the working directory to a target snapshot:
//! - every working file the target does not track is deleted
//! - every target file is written, overwriting what is on disk
//!
//! The plan is computed up front and applied by the workspace, deletions first.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Create new file
    Add,
    /// Delete file
    Delete,
    /// Overwrite existing file
    Modify,
}

/// Set of planned actions grouped by type
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

#[derive(Debug, Clone)]
pub struct Migration {
    actions: ActionsSet,
}

impl Migration {
    /// Plan the move from the files currently on disk to `target`
    pub fn plan(workspace_files: &BTreeSet<PathBuf>, target: &Snapshot) -> Self {
        let mut actions = ActionsSet::from([
            (ActionType::Add, vec![]),
            (ActionType::Delete, vec![]),
            (ActionType::Modify, vec![]),
        ]);

        for path in workspace_files {
            if !target.contains(path) {
                actions
                    .entry(ActionType::Delete)
                    .or_default()
                    .push((path.clone(), None));
            }
        }

        for (path, oid) in target.iter() {
            let action = if workspace_files.contains(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };
            actions
                .entry(action)
                .or_default()
                .push((path.clone(), Some(oid.clone())));
        }

        Migration { actions }
    }

    pub fn changes(&self, action: ActionType) -> &[(PathBuf, Option<ObjectId>)] {
        self.actions
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
