//! Content-addressed object store
//!
//! Blobs and commits live in separate directories under the metadata root,
//! one zlib-compressed file per object named by its full ID:
//!
//! ```text
//! .twig/blobs/<oid>
//! .twig/commits/<oid>
//! ```
//!
//! Writes are idempotent and atomic (temp file + rename).

use crate::artifacts::database::commit_index::CommitIndex;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self, object_type: &ObjectType) -> PathBuf {
        self.path.join(object_type.dir_name())
    }

    /// Create the per-type object directories
    pub fn create_layout(&self) -> anyhow::Result<()> {
        for object_type in [ObjectType::Blob, ObjectType::Commit] {
            let dir = self.objects_path(&object_type);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Unable to create object directory {}", dir.display()))?;
        }

        Ok(())
    }

    /// Persist an object unless it is already stored
    ///
    /// # Returns
    ///
    /// The ID the object is stored under
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_type = object.object_type();
        let object_id = object.object_id()?;
        let object_path = self.object_path(&object_type, &object_id);

        if object_path.exists() {
            tracing::trace!(%object_id, %object_type, "object already stored");
        } else {
            tracing::debug!(%object_id, %object_type, "storing object");
            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let object_reader = self.parse_object_as_bytes(&ObjectType::Blob, object_id)?;
        Blob::deserialize(object_reader)
    }

    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as_bytes(&ObjectType::Commit, object_id)?;
        Commit::deserialize(object_reader)
            .with_context(|| format!("Corrupted commit {object_id}"))
    }

    pub fn commit_exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(&ObjectType::Commit, object_id).exists()
    }

    /// Build the sorted index of every stored commit ID
    pub fn commit_index(&self) -> anyhow::Result<CommitIndex> {
        let commits_path = self.objects_path(&ObjectType::Commit);

        let mut commit_ids = Vec::new();
        for entry in std::fs::read_dir(&commits_path)
            .with_context(|| format!("Unable to list commits in {}", commits_path.display()))?
        {
            let file_name = entry?.file_name();
            // leftover temp files are not commits
            if let Ok(oid) = ObjectId::try_parse(file_name.to_string_lossy().to_string()) {
                commit_ids.push(oid);
            }
        }

        Ok(CommitIndex::from_iter(commit_ids))
    }

    fn object_path(&self, object_type: &ObjectType, object_id: &ObjectId) -> PathBuf {
        self.objects_path(object_type).join(object_id.as_ref())
    }

    fn parse_object_as_bytes(
        &self,
        expected_type: &ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<impl BufRead> {
        let object_path = self.object_path(expected_type, object_id);
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;
        if &object_type != expected_type {
            anyhow::bail!("Object {object_id} is a {object_type}, expected a {expected_type}");
        }

        Ok(object_reader)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        if let Err(error) = Self::write_and_rename(&temp_object_path, &object_path, &object_content)
        {
            // never leave a half-written temp file behind
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(error);
        }

        Ok(())
    }

    fn write_and_rename(
        temp_object_path: &Path,
        object_path: &Path,
        object_content: &[u8],
    ) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(temp_object_path, object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

/// Memoizes slim commits during ancestor searches
#[derive(Debug, Default)]
pub struct CommitCache {
    commits: RefCell<HashMap<ObjectId, SlimCommit>>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load_slim_commit(
        &self,
        database: &Database,
        object_id: &ObjectId,
    ) -> anyhow::Result<SlimCommit> {
        if let Some(commit) = self.commits.borrow().get(object_id) {
            return Ok(commit.clone());
        }

        let commit = database.load_commit(object_id)?.to_slim()?;
        self.commits
            .borrow_mut()
            .insert(object_id.clone(), commit.clone());

        Ok(commit)
    }
}
