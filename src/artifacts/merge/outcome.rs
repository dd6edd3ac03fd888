//! Per-file merge classification
//!
//! Every path present in the split, current or target snapshot falls into
//! exactly one [`MergeOutcome`], decided by which sides hold the path and
//! whether their blobs are equal:
//!
//! | Outcome             | Split  | Current        | Target         |
//! |---------------------|--------|----------------|----------------|
//! | ModifiedInTarget    | S      | = S            | ≠ S, present   |
//! | ModifiedInCurrent   | S      | ≠ S, present   | = S            |
//! | ModifiedIdentically | any    | = Target       | = Current      |
//! | ModifiedDifferently | any    | ≠ Target       | ≠ Current      |
//! | AddedInCurrent      | absent | present        | absent         |
//! | AddedInTarget       | absent | absent         | present        |
//! | DeletedInTarget     | S      | = S            | absent         |
//! | DeletedInCurrent    | S      | absent         | = S            |

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::snapshot::Snapshot;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOutcome {
    ModifiedInTarget,
    ModifiedInCurrent,
    ModifiedIdentically,
    ModifiedDifferently,
    AddedInCurrent,
    AddedInTarget,
    DeletedInTarget,
    DeletedInCurrent,
}

/// What the merge does to a path in the working directory and staging area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeAction {
    /// Leave the current version (or its absence) alone
    KeepCurrent,
    /// Write and stage the target version
    TakeTarget,
    /// Delete the file and mark it removed
    Remove,
    /// Write and stage a conflict file
    Conflict,
}

impl MergeOutcome {
    /// Classify one path from its blob on each side
    pub fn classify(
        split: Option<&ObjectId>,
        current: Option<&ObjectId>,
        target: Option<&ObjectId>,
    ) -> MergeOutcome {
        match (split, current, target) {
            (_, current, target) if current == target => MergeOutcome::ModifiedIdentically,
            (Some(split), Some(current), Some(_)) if current == split => {
                MergeOutcome::ModifiedInTarget
            }
            (Some(split), Some(_), Some(target)) if target == split => {
                MergeOutcome::ModifiedInCurrent
            }
            (Some(split), Some(current), None) if current == split => {
                MergeOutcome::DeletedInTarget
            }
            (Some(split), None, Some(target)) if target == split => {
                MergeOutcome::DeletedInCurrent
            }
            (Some(_), _, _) => MergeOutcome::ModifiedDifferently,
            (None, Some(_), None) => MergeOutcome::AddedInCurrent,
            (None, None, Some(_)) => MergeOutcome::AddedInTarget,
            (None, Some(_), Some(_)) => MergeOutcome::ModifiedDifferently,
            (None, None, None) => MergeOutcome::ModifiedIdentically,
        }
    }

    pub fn action(&self) -> MergeAction {
        match self {
            MergeOutcome::ModifiedInTarget | MergeOutcome::AddedInTarget => MergeAction::TakeTarget,
            MergeOutcome::ModifiedInCurrent
            | MergeOutcome::ModifiedIdentically
            | MergeOutcome::AddedInCurrent
            | MergeOutcome::DeletedInCurrent => MergeAction::KeepCurrent,
            MergeOutcome::DeletedInTarget => MergeAction::Remove,
            MergeOutcome::ModifiedDifferently => MergeAction::Conflict,
        }
    }
}

/// Classify every path of the three snapshots, in path order
pub fn classify_snapshots(
    split: &Snapshot,
    current: &Snapshot,
    target: &Snapshot,
) -> BTreeMap<PathBuf, MergeOutcome> {
    let paths = split
        .paths()
        .chain(current.paths())
        .chain(target.paths())
        .collect::<BTreeSet<_>>();

    paths
        .into_iter()
        .map(|path| {
            let outcome = MergeOutcome::classify(
                split.get(path),
                current.get(path),
                target.get(path),
            );
            tracing::trace!(path = %path.display(), ?outcome, "classified path");

            (path.clone(), outcome)
        })
        .collect()
}
