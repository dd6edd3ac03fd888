use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{TwigError, TwigResult};
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// History of the current branch, newest first
    pub fn log(&self) -> TwigResult<()> {
        let mut curr_commit_oid = Some(self.refs().read_head().clone());

        while let Some(commit_oid) = curr_commit_oid {
            let commit = self.database().load_commit(&commit_oid)?;
            self.display_commit(&commit_oid, &commit)?;

            curr_commit_oid = commit.parent().cloned();
        }

        Ok(())
    }

    /// Every commit ever made, in commit ID order
    pub fn global_log(&self) -> TwigResult<()> {
        for commit_oid in self.database().commit_index()?.iter() {
            let commit = self.database().load_commit(commit_oid)?;
            self.display_commit(commit_oid, &commit)?;
        }

        Ok(())
    }

    /// Print the IDs of all commits with exactly `message`
    pub fn find(&self, message: &str) -> TwigResult<()> {
        let mut found = false;

        for commit_oid in self.database().commit_index()?.iter() {
            if self.database().load_commit(commit_oid)?.message() == message {
                writeln!(self.writer(), "{commit_oid}")?;
                found = true;
            }
        }

        if found {
            Ok(())
        } else {
            Err(TwigError::NoCommitWithMessage)
        }
    }

    fn display_commit(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "{}", format!("commit {commit_oid}").yellow())?;
        writeln!(self.writer(), "Date: {}", commit.timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
