use serde::Serialize;
use std::fmt::Display;

/// Returned by [`find_duplicate_or_sentinel`] when no two elements are equal.
///
/// Indistinguishable from a real result when `-1` is itself the duplicated
/// value. Prefer [`find_duplicate`] when that matters.
pub const NOT_FOUND: i32 = -1;

/// First equal pair found by the scan, with the value it matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Duplicate<'a, T> {
    pub value: &'a T,
    /// Index of the earlier occurrence.
    pub first: usize,
    /// Index of the later occurrence, always greater than `first`.
    pub second: usize,
}

impl<T: Copy> Duplicate<'_, T> {
    pub fn into_parts(self) -> (T, usize, usize) {
        (*self.value, self.first, self.second)
    }
}

impl<T: Display> Display for Duplicate<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at positions {} and {}",
            self.value, self.first, self.second
        )
    }
}

/// Find the first duplicated element of `values`
///
/// Compares every element against each element after it, outer index
/// ascending, inner index ascending, and returns on the first match.
/// O(n²) time, no allocation.
///
/// # Returns
/// The matching pair, or `None` when every element is distinct (including
/// empty and single-element input).
pub fn find_duplicate_pair<T: PartialEq>(values: &[T]) -> Option<Duplicate<'_, T>> {
    for (first, left) in values.iter().enumerate() {
        for (second, right) in values.iter().enumerate().skip(first + 1) {
            if left == right {
                log::trace!("duplicate found at positions {first} and {second}");
                return Some(Duplicate {
                    value: left,
                    first,
                    second,
                });
            }
        }
    }
    None
}

/// Find the first duplicated value of `values`, see [`find_duplicate_pair`]
pub fn find_duplicate<T: PartialEq>(values: &[T]) -> Option<&T> {
    find_duplicate_pair(values).map(|dup| dup.value)
}

/// Same scan as [`find_duplicate`], reporting "not found" as [`NOT_FOUND`]
pub fn find_duplicate_or_sentinel(values: &[i32]) -> i32 {
    find_duplicate(values).copied().unwrap_or(NOT_FOUND)
}
