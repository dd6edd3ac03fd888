//! Split point finder for merge operations
//!
//! Every commit has at most one parent, so the history of a branch tip is a
//! single chain ending at the root commit. The split point of two tips is the
//! nearest commit both chains share:
//!
//! 1. Walk the chain of the current tip (tip → root), marking each commit.
//! 2. Walk the chain of the target tip; the first marked commit is the split point.
//!
//! ```text
//! C0 ── C1 ── C2 ── C3   (current)
//!        \
//!         D1 ── D2       (target)
//! ```
//!
//! Here the split point is `C1`. If it equals the target tip, the target is an
//! ancestor of the current branch; if it equals the current tip, the current
//! branch can be fast-forwarded.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::HashMap;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_TARGET = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_CURRENT.bits() | Self::VISITED_FROM_TARGET.bits();
    }
}

/// Finds the split point of two commit chains
///
/// Commits are read through `commit_loader`, so the finder works against the
/// object store as well as against in-memory graphs.
pub struct SplitFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> SplitFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Commit IDs from `tip` back to the root, tip first
    pub fn ancestor_chain(&self, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = Vec::new();
        let mut next = Some(tip.clone());

        while let Some(oid) = next {
            if chain.contains(&oid) {
                anyhow::bail!("Commit history loops back to {oid}");
            }

            next = (self.commit_loader)(&oid)?.parent;
            chain.push(oid);
        }

        Ok(chain)
    }

    /// Nearest commit shared by the chains of `current` and `target`
    ///
    /// # Returns
    ///
    /// None only if the two chains share no commit, which cannot happen for
    /// tips of the same repository since every chain ends at the root commit
    pub fn find_split_point(
        &self,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = HashMap::<ObjectId, VisitState>::new();

        for oid in self.ancestor_chain(current)? {
            states.insert(oid, VisitState::VISITED_FROM_CURRENT);
        }

        for oid in self.ancestor_chain(target)? {
            let state = states.entry(oid.clone()).or_insert(VisitState::empty());
            state.insert(VisitState::VISITED_FROM_TARGET);

            if state.contains(VisitState::VISITED_FROM_BOTH) {
                tracing::debug!(
                    current = %current.to_short_oid(),
                    target = %target.to_short_oid(),
                    split = %oid.to_short_oid(),
                    "found split point"
                );
                return Ok(Some(oid));
            }
        }

        tracing::debug!(%current, %target, "no split point");
        Ok(None)
    }
}
