//! Remote commands
//!
//! Remotes are not supported: these commands accept their operands and report
//! a fixed outcome without touching the repository.

use crate::areas::repository::Repository;
use crate::errors::TwigResult;
use std::io::Write;

const REMOTE_NOT_FOUND: &str = "A remote with that name does not exist.";
const REMOTE_DIRECTORY_NOT_FOUND: &str = "Remote directory not found.";

impl Repository {
    pub fn add_remote(&self, name: &str, dir: &str) -> TwigResult<()> {
        tracing::debug!(name, dir, "remotes are not supported");
        Ok(())
    }

    pub fn rm_remote(&self, name: &str) -> TwigResult<()> {
        tracing::debug!(name, "remotes are not supported");
        writeln!(self.writer(), "{REMOTE_NOT_FOUND}")?;
        Ok(())
    }

    pub fn push(&self, remote: &str, branch: &str) -> TwigResult<()> {
        self.unreachable_remote(remote, branch)
    }

    pub fn fetch(&self, remote: &str, branch: &str) -> TwigResult<()> {
        self.unreachable_remote(remote, branch)
    }

    pub fn pull(&self, remote: &str, branch: &str) -> TwigResult<()> {
        self.unreachable_remote(remote, branch)
    }

    fn unreachable_remote(&self, remote: &str, branch: &str) -> TwigResult<()> {
        tracing::debug!(remote, branch, "remotes are not supported");
        writeln!(self.writer(), "{REMOTE_DIRECTORY_NOT_FOUND}")?;
        Ok(())
    }
}
