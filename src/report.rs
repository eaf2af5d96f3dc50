use std::io::Write;

use anyhow::{Context as _, Result};
use dupfind_core::{NOT_FOUND, find_duplicate_pair};

/// Input the binary runs on.
pub const DEMO_INPUT: [i32; 5] = [1, 3, 4, 2, 2];

pub const REPORT_PREFIX: &str = "The duplicate number is: ";

/// Write the single report line for `values` to `out`
///
/// The line is `REPORT_PREFIX` followed by the first duplicate, or `-1` when
/// there is none.
///
/// # Returns
/// The number that was written.
pub fn write_report(out: &mut impl Write, values: &[i32]) -> Result<i32> {
    let duplicate = match find_duplicate_pair(values) {
        Some(dup) => {
            log::debug!("scanned {} values, found {dup}", values.len());
            *dup.value
        }
        None => {
            log::debug!("scanned {} values, no duplicate", values.len());
            NOT_FOUND
        }
    };
    writeln!(out, "{REPORT_PREFIX}{duplicate}").context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;
    Ok(duplicate)
}
