//! Working-hours configuration as stored by the dashboard, and its parsed form.
//!
//! [`ScheduleConfig`] mirrors the stored document: every time is an `"HH:MM"`
//! string and the lunch fields are independent options. [`ScheduleConfig::parse`]
//! validates it into a [`Schedule`], which is what the calculator runs on.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// A professional's working hours for one day, in boundary (string) form.
///
/// JSON keys follow the dashboard's camelCase (`lunchStart`); the snake_case
/// spelling is accepted as an alias so TOML files read naturally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Start of the working window (`"HH:MM"`).
    pub start: String,
    /// End of the working window (`"HH:MM"`).
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lunch_start")]
    pub lunch_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "lunch_end")]
    pub lunch_end: Option<String>,
    /// Start times of already-occupied step-sized blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reserved: Vec<String>,
}

/// A lunch break, the half-open window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunchBreak {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A validated schedule with every time parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub lunch: Option<LunchBreak>,
    pub reserved: Vec<TimeOfDay>,
}

/// Appointment length and probe granularity, both in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    #[serde(default = "default_minutes")]
    pub duration: i64,
    #[serde(default = "default_minutes")]
    pub step: i64,
}

fn default_minutes() -> i64 {
    30
}

impl Default for SlotQuery {
    fn default() -> Self {
        Self {
            duration: default_minutes(),
            step: default_minutes(),
        }
    }
}

impl SlotQuery {
    /// Reject non-positive duration or step before any arithmetic happens.
    pub fn validate(&self) -> Result<()> {
        if self.duration <= 0 {
            return Err(SlotError::InvalidDuration(self.duration));
        }
        if self.step <= 0 {
            return Err(SlotError::InvalidStep(self.step));
        }
        Ok(())
    }
}

impl ScheduleConfig {
    /// Working window with no lunch and nothing reserved.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            ..Self::default()
        }
    }

    pub fn with_lunch(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.lunch_start = Some(start.into());
        self.lunch_end = Some(end.into());
        self
    }

    pub fn with_reserved<I, S>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(reserved.into_iter().map(Into::into));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SlotError::Config(format!("invalid JSON: {e}")))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SlotError::Config(format!("invalid TOML: {e}")))
    }

    /// Load a config file. `.toml` files are read as TOML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SlotError::Config(format!("failed to read {}: {e}", path.display())))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&contents),
            _ => Self::from_json_str(&contents),
        }
    }

    /// Parse every time string, failing on the first malformed one.
    ///
    /// The window ordering (`start < end`) and the lunch placement are not
    /// checked here; an inverted window simply yields no slots.
    pub fn parse(&self) -> Result<Schedule> {
        let start: TimeOfDay = self.start.parse()?;
        let end: TimeOfDay = self.end.parse()?;

        let lunch = match (&self.lunch_start, &self.lunch_end) {
            (Some(ls), Some(le)) => Some(LunchBreak {
                start: ls.parse()?,
                end: le.parse()?,
            }),
            (None, None) => None,
            _ => return Err(SlotError::IncompleteLunch),
        };

        let reserved = self
            .reserved
            .iter()
            .map(|r| r.parse())
            .collect::<Result<Vec<TimeOfDay>>>()?;

        Ok(Schedule {
            start,
            end,
            lunch,
            reserved,
        })
    }
}
