//! Data structures and algorithms
//!
//! - `branch`: Branch names
//! - `checkout`: Working-directory migration plans
//! - `core`: Shared utilities (pager wrapper)
//! - `database`: Commit ID index
//! - `merge`: Split point search and per-file merge classification
//! - `objects`: Object types (blob, commit, snapshot)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod database;
pub mod merge;
pub mod objects;
pub mod status;
