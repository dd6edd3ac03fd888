//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block operating on the state loaded for
//! the current invocation.
//!
//! ## Commands
//!
//! - `init`: Create a repository with its root commit
//! - `add` / `rm`: Stage additions and removals
//! - `commit`: Record the staging area
//! - `log`: Show history (`log`, `global-log`, `find`)
//! - `status`: Show branches, staged, removed, modified and untracked files
//! - `checkout`: Restore files or switch branches
//! - `branch`: Create and delete branches
//! - `reset`: Move the current branch to another commit
//! - `merge`: Three-way merge of another branch into the current one
//! - `remote`: Remote commands (unsupported)

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod remote;
pub mod reset;
pub mod rm;
pub mod status;
