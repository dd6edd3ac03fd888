//! Three-way merge
//!
//! - `split_finder`: nearest common ancestor of two branch tips
//! - `outcome`: per-file classification against the split point
//! - `conflict`: content of conflicted files

pub mod conflict;
pub mod outcome;
pub mod split_finder;
