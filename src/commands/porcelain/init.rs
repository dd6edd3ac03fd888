use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::repository::{METADATA_DIR, Repository};
use crate::areas::state::RepositoryState;
use crate::artifacts::objects::commit::Commit;
use crate::config::Config;
use crate::errors::{TwigError, TwigResult};
use std::path::Path;

impl Repository {
    /// Create a repository at `path` holding only the root commit on `master`
    pub fn init(
        path: &Path,
        config: Config,
        writer: Box<dyn std::io::Write>,
    ) -> TwigResult<Self> {
        if Self::state_file_at(path).exists() {
            return Err(TwigError::AlreadyInitialized);
        }

        let database = Database::new(path.join(METADATA_DIR).into_boxed_path());
        database.create_layout()?;
        let root = database.store(&Commit::root())?;
        tracing::debug!(%root, path = %path.display(), "initialized repository");

        let state = RepositoryState {
            refs: Refs::new(root),
            index: Index::default(),
        };

        Ok(Self::from_state(path, config, writer, state))
    }
}
