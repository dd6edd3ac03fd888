use crate::areas::repository::Repository;
use crate::errors::TwigResult;

impl Repository {
    pub fn commit(&mut self, message: &str) -> TwigResult<()> {
        let commit_id = self.write_commit(message.to_string())?;
        tracing::debug!(%commit_id, "committed");

        Ok(())
    }
}
