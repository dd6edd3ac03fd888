//! Repository handle for a single command invocation
//!
//! A [`Repository`] ties together the object store, the working directory and
//! the state record (branch table and staging area). The state is loaded once
//! when the repository is opened, mutated in memory by the command, and written
//! back by [`Repository::persist`] only after the command succeeded.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::state::{RepositoryState, StateFile};
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::config::Config;
use crate::errors::{TwigError, TwigResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the repository root
pub const METADATA_DIR: &str = ".twig";
const STATE_FILE_NAME: &str = "state";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    database: Database,
    workspace: Workspace,
    state_file: StateFile,
    refs: Refs,
    index: Index,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Fails with [`TwigError::Uninitialized`] if `path` holds no repository.
    pub fn open(
        path: &Path,
        config: Config,
        writer: Box<dyn std::io::Write>,
    ) -> TwigResult<Self> {
        let state_file = Self::state_file_at(path);
        if !state_file.exists() {
            return Err(TwigError::Uninitialized);
        }

        let state = state_file.load()?;
        Ok(Self::from_state(path, config, writer, state))
    }

    pub(crate) fn from_state(
        path: &Path,
        config: Config,
        writer: Box<dyn std::io::Write>,
        state: RepositoryState,
    ) -> Self {
        Repository {
            writer: RefCell::new(writer),
            config,
            database: Database::new(path.join(METADATA_DIR).into_boxed_path()),
            workspace: Workspace::new(path.into()),
            state_file: Self::state_file_at(path),
            refs: state.refs,
            index: state.index,
        }
    }

    pub(crate) fn state_file_at(path: &Path) -> StateFile {
        StateFile::new(
            path.join(METADATA_DIR)
                .join(STATE_FILE_NAME)
                .into_boxed_path(),
        )
    }

    /// Write the in-memory state back to disk
    pub fn persist(&self) -> anyhow::Result<()> {
        let state = RepositoryState {
            refs: self.refs.clone(),
            index: self.index.clone(),
        };

        self.state_file.save(&state)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        Status::new(self).initialize()
    }

    pub fn inspector(&'_ self) -> Inspector<'_> {
        Inspector::new(self)
    }

    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.database.load_commit(self.refs.read_head())
    }

    /// Resolve a full or abbreviated commit ID to a stored commit
    pub fn resolve_commit(&self, id_or_prefix: &str) -> TwigResult<ObjectId> {
        if id_or_prefix.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(id_or_prefix.to_ascii_lowercase())
                .map_err(|_| TwigError::CommitNotFound)?;

            return if self.database.commit_exists(&oid) {
                Ok(oid)
            } else {
                Err(TwigError::CommitNotFound)
            };
        }

        self.database.commit_index()?.resolve(id_or_prefix)
    }
}
