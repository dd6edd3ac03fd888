//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - The parent commit ID (absent only for the root commit)
//! - A human-readable timestamp
//! - The snapshot mapping tracked paths to blob IDs
//! - The commit message
//!
//! ## Format
//!
//! On disk (zlib-compressed):
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! date <timestamp>
//! file <blob-sha> <path>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! ## Identity
//!
//! The commit ID is the SHA-1 of `message`, `parent` (empty for the root),
//! `timestamp` and the snapshot string form, concatenated in that order. It does
//! not depend on the on-disk encoding.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, hash_parts, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::snapshot::Snapshot;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::io::BufRead;
use std::path::PathBuf;

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

const TIMESTAMP_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Format a timestamp the way it is recorded in commits
///
/// # Returns
///
/// String like "Mon Jan 1 12:34:56 2024 +0000"
pub fn readable_timestamp(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Timestamp of the root commit: the Unix epoch in UTC
pub fn epoch_timestamp() -> String {
    let epoch = DateTime::from_timestamp(0, 0)
        .unwrap_or_default()
        .fixed_offset();
    readable_timestamp(epoch)
}

/// Slim representation of a commit
///
/// Contains only what ancestor searches need.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parent: Option<ObjectId>,
}

/// Commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    timestamp: String,
    snapshot: Snapshot,
    message: String,
}

impl Commit {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent commit ID
    /// * `snapshot` - Tracked paths and their blobs
    /// * `timestamp` - Creation time
    /// * `message` - Commit message
    pub fn new(
        parent: ObjectId,
        snapshot: Snapshot,
        timestamp: DateTime<FixedOffset>,
        message: String,
    ) -> Self {
        Commit {
            parent: Some(parent),
            timestamp: readable_timestamp(timestamp),
            snapshot,
            message,
        }
    }

    /// The parentless commit every repository starts from
    pub fn root() -> Self {
        Commit {
            parent: None,
            timestamp: epoch_timestamp(),
            snapshot: Snapshot::default(),
            message: ROOT_COMMIT_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn to_slim(&self) -> anyhow::Result<SlimCommit> {
        Ok(SlimCommit {
            oid: self.object_id()?,
            parent: self.parent.clone(),
        })
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent));
        }
        object_content.push(format!("date {}", self.timestamp));
        for (path, oid) in self.snapshot.iter() {
            object_content.push(format!("file {} {}", oid, path.display()));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(with_header(self.object_type(), object_content.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parent = None;
        let mut timestamp = None;
        let mut snapshot = Snapshot::default();

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line '{line}'"))?;

            match key {
                "parent" => parent = Some(ObjectId::try_parse(value.to_string())?),
                "date" => timestamp = Some(value.to_string()),
                "file" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid file line")?;
                    snapshot.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header '{key}'"),
            }
        }

        Ok(Commit {
            parent,
            timestamp: timestamp.context("Invalid commit object: missing date line")?,
            snapshot,
            message: message.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        let parent = self.parent.as_ref().map(|p| p.as_ref()).unwrap_or("");
        let snapshot = self.snapshot.to_string();

        hash_parts([
            self.message.as_bytes(),
            parent.as_bytes(),
            self.timestamp.as_bytes(),
            snapshot.as_bytes(),
        ])
    }
}
