use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TwigError, TwigResult};

impl Repository {
    /// Record the staging area on top of HEAD and advance the current branch
    ///
    /// The new snapshot is HEAD's snapshot plus the staged entries minus the
    /// paths marked for removal. The staging area is cleared afterwards.
    pub fn write_commit(&mut self, message: String) -> TwigResult<ObjectId> {
        if message.trim().is_empty() {
            return Err(TwigError::EmptyCommitMessage);
        }
        if !self.index().has_pending_changes() {
            return Err(TwigError::NothingToCommit);
        }

        let parent = self.refs().read_head().clone();
        let snapshot = self.index().apply_to(self.head_commit()?.into_snapshot());
        let timestamp = self.config().commit_date();

        let commit = Commit::new(parent, snapshot, timestamp, message);
        let commit_id = self.database().store(&commit)?;

        self.refs_mut().update_head(commit_id.clone());
        self.index_mut().clear();

        Ok(commit_id)
    }
}
