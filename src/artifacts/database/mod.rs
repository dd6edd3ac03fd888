//! Object database helpers
//!
//! Types used when looking objects up in the database.

pub mod commit_index;
