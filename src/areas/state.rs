//! Repository state record
//!
//! The branch table and the staging area are persisted together in a single
//! JSON file, `.twig/state`. Its presence marks the repository root. The record
//! is loaded once per command and written back only when the command succeeds.

use crate::areas::index::Index;
use crate::areas::refs::Refs;
use anyhow::Context;
use fake::rand;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub refs: Refs,
    pub index: Index,
}

#[derive(Debug)]
pub struct StateFile {
    path: Box<Path>,
}

impl StateFile {
    pub fn new(path: Box<Path>) -> Self {
        StateFile { path }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> anyhow::Result<RepositoryState> {
        let content = std::fs::read(&self.path)
            .with_context(|| format!("Unable to read state file {}", self.path.display()))?;

        let state = serde_json::from_slice(&content)
            .with_context(|| format!("Corrupted state file {}", self.path.display()))?;
        tracing::trace!(path = %self.path.display(), "loaded repository state");

        Ok(state)
    }

    /// Replace the state file atomically
    pub fn save(&self, state: &RepositoryState) -> anyhow::Result<()> {
        let state_dir = self
            .path
            .parent()
            .context(format!("Invalid state path {}", self.path.display()))?;
        let temp_path = state_dir.join(format!("tmp-state-{}", rand::random::<u32>()));

        let content = serde_json::to_vec_pretty(state).context("Unable to encode state")?;

        if let Err(error) = self.write_and_rename(&temp_path, &content) {
            // never leave a half-written temp file behind
            let _ = std::fs::remove_file(&temp_path);
            return Err(error);
        }
        tracing::debug!(path = %self.path.display(), "persisted repository state");

        Ok(())
    }

    fn write_and_rename(&self, temp_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("Unable to open state file {}", temp_path.display()))?;
        file.write_all(content)
            .with_context(|| format!("Unable to write state file {}", temp_path.display()))?;

        std::fs::rename(temp_path, &self.path)
            .with_context(|| format!("Unable to rename state file to {}", self.path.display()))
    }
}
