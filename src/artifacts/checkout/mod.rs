//! Checkout operations
//!
//! Switching the working directory to another commit is planned as a
//! [`migration::Migration`] before any file is touched. Callers run the
//! untracked-file check first so that a refused checkout leaves the working
//! directory as it was.

pub mod migration;
