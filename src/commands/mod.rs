//! Command implementations
//!
//! Commands are organized into two categories:
//!
//! - `plumbing`: Low-level building blocks (writing commits)
//! - `porcelain`: User-facing commands (add, commit, log, merge, ...)

pub mod plumbing;
pub mod porcelain;
