//! Time-of-day values as whole minutes since midnight.
//!
//! `TimeOfDay` is the boundary between the `"HH:MM"` strings the dashboard
//! stores and the integer arithmetic the calculator runs on. Parsing is strict:
//! exactly two hour digits, a colon, two minute digits.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Minutes in a day; valid `TimeOfDay` values are strictly below this.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a time from hour and minute, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 {
            return Err(invalid(&format!("{hour:02}:{minute:02}"), "hour must be 0-23"));
        }
        if minute > 59 {
            return Err(invalid(&format!("{hour:02}:{minute:02}"), "minute must be 0-59"));
        }
        Ok(TimeOfDay((hour * 60 + minute) as u16))
    }

    /// Build a time from minutes since midnight.
    ///
    /// Returns `None` outside `0..MINUTES_PER_DAY`.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        (0..MINUTES_PER_DAY)
            .contains(&minutes)
            .then_some(TimeOfDay(minutes as u16))
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0 % 60)
    }
}

fn invalid(input: &str, reason: &str) -> SlotError {
    SlotError::InvalidTime {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// The shape is checked by hand first: chrono's `%H` also accepts `8:30`
    /// and leading whitespace, and stored times must be exactly `HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let well_formed = matches!(
            s.as_bytes(),
            [h1, h2, b':', m1, m2] if [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        );
        if !well_formed {
            return Err(invalid(s, "expected HH:MM"));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|e| invalid(s, &e.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and sub-second precision.
    fn from(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        NaiveTime::MIN + chrono::Duration::minutes(t.minutes())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
