//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A time string was not `HH:MM` with hour 0-23 and minute 0-59.
    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid step: {0} minutes (must be positive)")]
    InvalidStep(i64),

    /// Only one of `lunchStart` / `lunchEnd` was provided.
    #[error("Incomplete lunch window: lunchStart and lunchEnd must be given together")]
    IncompleteLunch,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
