//! Commit snapshot
//!
//! A snapshot maps every tracked path (relative to the repository root) to the
//! ID of the blob holding its content. Paths are kept sorted so the string form
//! used for commit hashing is deterministic.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<PathBuf, ObjectId>,
}

impl Snapshot {
    pub fn get(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn insert(&mut self, path: PathBuf, oid: ObjectId) -> Option<ObjectId> {
        self.entries.insert(path, oid)
    }

    pub fn remove(&mut self, path: &Path) -> Option<ObjectId> {
        self.entries.remove(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.entries.iter()
    }
}

impl FromIterator<(PathBuf, ObjectId)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (PathBuf, ObjectId)>>(iter: T) -> Self {
        Snapshot {
            entries: iter.into_iter().collect(),
        }
    }
}

// `{a.txt=<oid>, b/c.txt=<oid>}`, the form hashed into commit IDs
impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{}={}", path.display(), oid))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", entries)
    }
}
