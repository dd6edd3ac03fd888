//! Core repository components
//!
//! - `database`: Object store for blobs and commits
//! - `index`: Staging area
//! - `refs`: Branch table and HEAD
//! - `repository`: Per-invocation handle tying the areas together
//! - `state`: Persistence of the branch table and staging area
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod state;
pub mod workspace;
