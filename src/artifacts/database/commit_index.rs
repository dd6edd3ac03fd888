//! Sorted index of stored commit IDs
//!
//! Used to resolve abbreviated commit IDs. Resolution never guesses: a prefix
//! shared by several commits is rejected.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TwigError, TwigResult};
use std::collections::BTreeSet;
use std::ops::Bound;

#[derive(Debug, Clone, Default)]
pub struct CommitIndex {
    ids: BTreeSet<ObjectId>,
}

impl CommitIndex {
    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.ids.iter()
    }

    /// All stored IDs starting with `prefix`, in sorted order
    pub fn matching<'i>(&'i self, prefix: &'i str) -> impl Iterator<Item = &'i ObjectId> {
        self.ids
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |oid| oid.as_ref().starts_with(prefix))
    }

    /// Resolve a full or abbreviated commit ID
    ///
    /// # Returns
    ///
    /// The unique matching commit ID, [`TwigError::CommitNotFound`] if nothing
    /// matches, or [`TwigError::AmbiguousCommitId`] if more than one commit does
    pub fn resolve(&self, id_or_prefix: &str) -> TwigResult<ObjectId> {
        if !ObjectId::is_valid_prefix(id_or_prefix) {
            return Err(TwigError::CommitNotFound);
        }

        let prefix = id_or_prefix.to_ascii_lowercase();
        let mut candidates = self.matching(&prefix);

        match (candidates.next(), candidates.next()) {
            (Some(oid), None) => Ok(oid.clone()),
            (Some(_), Some(_)) => Err(TwigError::AmbiguousCommitId(id_or_prefix.to_string())),
            (None, _) => Err(TwigError::CommitNotFound),
        }
    }
}

impl FromIterator<ObjectId> for CommitIndex {
    fn from_iter<T: IntoIterator<Item = ObjectId>>(iter: T) -> Self {
        CommitIndex {
            ids: iter.into_iter().collect(),
        }
    }
}
