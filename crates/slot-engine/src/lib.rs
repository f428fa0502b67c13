//! # slot-engine
//!
//! Deterministic appointment slot calculation for a professional's working day.
//!
//! Given a working window, an optional lunch break, and the start times of
//! already-reserved blocks, the engine lists every start time at which an
//! appointment of a given length fits. All arithmetic is on whole minutes since
//! midnight; strings only appear at the boundary.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay`, the strict `HH:MM` value type
//! - [`config`] — `ScheduleConfig` (stored form) and `Schedule` (parsed form)
//! - [`reserved`] — Merge reserved step-blocks into contiguous runs
//! - [`calculator`] — Scan candidates and reject lunch/reserved collisions
//! - [`error`] — Error types

pub mod calculator;
pub mod config;
pub mod error;
pub mod reserved;
pub mod time;

pub use calculator::{available_slots, compute_available_slots, find_first_available_slot};
pub use config::{LunchBreak, Schedule, ScheduleConfig, SlotQuery};
pub use error::SlotError;
pub use reserved::{merge_reserved, ReservedInterval};
pub use time::TimeOfDay;
