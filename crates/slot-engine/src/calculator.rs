//! Available appointment start times within a working day.
//!
//! Candidates are probed every `step` minutes from the start of the working
//! window while the whole appointment still fits before its end. A candidate
//! is dropped when it collides with the lunch break or with any merged
//! reserved run; survivors come out in scan order, which is ascending.

use crate::config::{LunchBreak, Schedule, ScheduleConfig, SlotQuery};
use crate::error::Result;
use crate::reserved::{merge_reserved, ReservedInterval};
use crate::time::TimeOfDay;

/// Compute the bookable start times for a stored working-hours config.
///
/// # Arguments
/// - `config` -- working window, optional lunch, reserved block starts
/// - `duration` -- appointment length in minutes
/// - `step` -- probe granularity in minutes, also the reserved block length
///
/// # Errors
/// Returns `SlotError::InvalidTime` for any time string that is not `HH:MM`,
/// `SlotError::IncompleteLunch` when only one lunch bound is set, and
/// `SlotError::InvalidDuration` / `SlotError::InvalidStep` for non-positive
/// minute counts. An empty `Vec` means no slot fits; it is not an error.
pub fn compute_available_slots(
    config: &ScheduleConfig,
    duration: i64,
    step: i64,
) -> Result<Vec<String>> {
    SlotQuery { duration, step }.validate()?;
    let schedule = config.parse()?;

    let slots = available_slots(&schedule, duration, step)?;
    Ok(slots.iter().map(TimeOfDay::to_string).collect())
}

/// The earliest bookable start time, if any.
pub fn find_first_available_slot(
    config: &ScheduleConfig,
    duration: i64,
    step: i64,
) -> Result<Option<String>> {
    Ok(compute_available_slots(config, duration, step)?
        .into_iter()
        .next())
}

/// Typed core of [`compute_available_slots`], operating on a parsed schedule.
pub fn available_slots(schedule: &Schedule, duration: i64, step: i64) -> Result<Vec<TimeOfDay>> {
    SlotQuery { duration, step }.validate()?;

    let runs = merge_reserved(&schedule.reserved, step)?;
    let end = schedule.end.minutes();

    let mut slots = Vec::new();
    let mut candidate = schedule.start.minutes();

    while candidate.saturating_add(duration) <= end {
        let rejected = if schedule
            .lunch
            .is_some_and(|lunch| hits_lunch(&lunch, candidate, duration))
        {
            tracing::trace!(candidate, "rejected: lunch");
            true
        } else if hits_reserved(&runs, candidate, duration) {
            tracing::trace!(candidate, "rejected: reserved");
            true
        } else {
            false
        };

        if !rejected {
            slots.extend(TimeOfDay::from_minutes(candidate));
        }
        candidate = candidate.saturating_add(step);
    }

    tracing::debug!(
        start = %schedule.start,
        end = %schedule.end,
        duration,
        step,
        runs = runs.len(),
        available = slots.len(),
        "computed available slots"
    );

    Ok(slots)
}

/// A candidate may neither start inside lunch nor start before it and run into it.
fn hits_lunch(lunch: &LunchBreak, candidate: i64, duration: i64) -> bool {
    let (lunch_start, lunch_end) = (lunch.start.minutes(), lunch.end.minutes());
    (candidate >= lunch_start && candidate < lunch_end)
        || (candidate < lunch_start && candidate + duration > lunch_start)
}

fn hits_reserved(runs: &[ReservedInterval], candidate: i64, duration: i64) -> bool {
    runs.iter().any(|run| run.overlaps(candidate, candidate + duration))
}
