//! Duplicate detection over slices by exhaustive pairwise comparison.
//!
//! The scan visits index pairs `(i, j)` with `i < j` in lexicographic order and
//! stops at the first equal pair, so the reported duplicate is always the one
//! whose earliest pair comes first.

pub mod finder;

pub use finder::{
    Duplicate, NOT_FOUND, find_duplicate, find_duplicate_or_sentinel, find_duplicate_pair,
};
