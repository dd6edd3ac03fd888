//! twig: a small local version-control system
//!
//! Snapshots of a working directory are stored as content-addressed commits
//! forming a single-parent history. Branches are named pointers into that
//! history and can be merged with a three-way merge.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
