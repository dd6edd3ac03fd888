use crate::areas::repository::Repository;
use crate::errors::TwigResult;

impl Repository {
    /// Move the current branch to an arbitrary commit and check it out
    pub fn reset(&mut self, commit: &str) -> TwigResult<()> {
        let commit_oid = self.resolve_commit(commit)?;
        self.inspector().check_untracked()?;

        self.materialize(&commit_oid)?;
        self.refs_mut().update_head(commit_oid);
        self.index_mut().clear();

        Ok(())
    }
}
