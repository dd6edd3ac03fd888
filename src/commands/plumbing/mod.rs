//! Plumbing commands
//!
//! Building blocks shared by the porcelain commands.
//!
//! ## Commands
//!
//! - `write_commit`: Record the staging area as a new commit on the current branch

pub mod write_commit;
