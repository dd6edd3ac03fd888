//! Working tree status inspection
//!
//! This module compares the working directory against the staging area and the
//! HEAD commit.
//!
//! ## Components
//!
//! - `file_change`: Unstaged change kinds
//! - `inspector`: Change detection and the untracked-file check
//! - `status_info`: Status aggregation and display

pub mod file_change;
pub mod inspector;
pub mod status_info;
