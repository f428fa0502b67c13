//! Merge reserved step-blocks into contiguous occupied runs.
//!
//! Each reserved entry marks the start of a block `step` minutes long. Sorting
//! the starts and folding adjacent ones (`next == previous + step`) together
//! yields maximal runs, so an appointment spanning several occupied steps is
//! caught by a single half-open overlap test.

use std::fmt;

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// A merged occupied interval `[start, end)` in minutes since midnight.
///
/// `end` may reach past midnight (e.g. a `23:45` block with a 30-minute step
/// ends at minute 1455), which is why the bounds are plain minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedInterval {
    pub start: i64,
    pub end: i64,
}

impl ReservedInterval {
    /// Half-open overlap with `[start, end)`. Touching endpoints do not overlap.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start < self.end && end > self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    /// `start` as `HH:MM`.
    pub fn start_label(&self) -> String {
        clock(self.start)
    }

    /// `end` as `HH:MM`; reads `24:xx` or later past midnight.
    pub fn end_label(&self) -> String {
        clock(self.end)
    }
}

fn clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

impl fmt::Display for ReservedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_label(), self.end_label())
    }
}

/// Merge reserved block starts into sorted, maximal runs.
///
/// Duplicate starts collapse into one block. Two consecutive starts `a`, `b`
/// share a run only when `b == a + step`; a run covers
/// `[first_start, last_start + step)`, with `end` saturating for huge steps.
///
/// # Errors
/// Returns `SlotError::InvalidStep` if `step <= 0`.
pub fn merge_reserved(reserved: &[TimeOfDay], step: i64) -> Result<Vec<ReservedInterval>> {
    if step <= 0 {
        return Err(SlotError::InvalidStep(step));
    }

    let mut starts: Vec<i64> = reserved.iter().map(|t| t.minutes()).collect();
    starts.sort_unstable();
    starts.dedup();

    let mut runs: Vec<ReservedInterval> = Vec::new();
    let mut last_start: Option<i64> = None;

    for start in starts {
        if let (Some(prev), Some(run)) = (last_start, runs.last_mut()) {
            if prev.checked_add(step) == Some(start) {
                run.end = start.saturating_add(step);
                last_start = Some(start);
                continue;
            }
        }
        runs.push(ReservedInterval {
            start,
            end: start.saturating_add(step),
        });
        last_start = Some(start);
    }

    tracing::debug!(blocks = reserved.len(), runs = runs.len(), step, "merged reserved blocks");

    Ok(runs)
}
