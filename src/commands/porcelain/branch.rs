use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::TwigResult;

impl Repository {
    /// Create a branch pointing at HEAD; the current branch does not change
    pub fn branch(&mut self, branch_name: &str) -> TwigResult<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        self.refs_mut().create_branch(branch_name)
    }

    pub fn rm_branch(&mut self, branch_name: &str) -> TwigResult<()> {
        self.refs_mut().delete_branch(branch_name)?;

        Ok(())
    }
}
