//! Branch table and HEAD
//!
//! References are human-readable names pointing to commits. The table holds:
//! - every branch and the commit it points to
//! - the name of the checked-out branch
//! - HEAD, the commit currently checked out
//!
//! HEAD is never detached: it always equals the current branch's pointer.
//! The table is persisted as the `refs` half of the state record.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TwigError, TwigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    head: ObjectId,
    current: BranchName,
    branches: BTreeMap<BranchName, ObjectId>,
}

impl Refs {
    /// Table holding only the default branch, pointing at `root`
    pub fn new(root: ObjectId) -> Self {
        let current = BranchName::default();

        Refs {
            head: root.clone(),
            branches: BTreeMap::from([(current.clone(), root)]),
            current,
        }
    }

    pub fn read_head(&self) -> &ObjectId {
        &self.head
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.current.as_ref() == name
    }

    pub fn read_branch(&self, name: &str) -> Option<&ObjectId> {
        self.branches.get(name)
    }

    /// Branches in name order
    pub fn branches(&self) -> impl Iterator<Item = (&BranchName, &ObjectId)> {
        self.branches.iter()
    }

    /// Create a branch pointing at HEAD
    pub fn create_branch(&mut self, name: BranchName) -> TwigResult<()> {
        if self.branches.contains_key(&name) {
            return Err(TwigError::BranchAlreadyExists);
        }

        tracing::debug!(branch = %name, oid = %self.head, "creating branch");
        self.branches.insert(name, self.head.clone());

        Ok(())
    }

    /// Delete a branch pointer; its commits are kept
    pub fn delete_branch(&mut self, name: &str) -> TwigResult<ObjectId> {
        if !self.branches.contains_key(name) {
            return Err(TwigError::BranchNotFound);
        }
        if self.is_current_branch(name) {
            return Err(TwigError::RemoveCurrentBranch);
        }

        tracing::debug!(branch = name, "deleting branch");
        self.branches
            .remove(name)
            .ok_or(TwigError::BranchNotFound)
    }

    /// Advance the current branch (and HEAD) to `oid`
    pub fn update_head(&mut self, oid: ObjectId) {
        tracing::debug!(branch = %self.current, %oid, "moving current branch");
        self.branches.insert(self.current.clone(), oid.clone());
        self.head = oid;
    }

    /// Make `name` the current branch and HEAD its tip
    pub fn switch_branch(&mut self, name: &str) -> TwigResult<&ObjectId> {
        let (name, oid) = self
            .branches
            .get_key_value(name)
            .ok_or(TwigError::NoSuchBranch)?;

        tracing::debug!(branch = %name, %oid, "switching branch");
        self.current = name.clone();
        self.head = oid.clone();

        Ok(&self.head)
    }
}
