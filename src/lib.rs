//! Demonstration driver for [`dupfind_core`].

pub mod report;

pub use dupfind_core::{
    Duplicate, NOT_FOUND, find_duplicate, find_duplicate_or_sentinel, find_duplicate_pair,
};
