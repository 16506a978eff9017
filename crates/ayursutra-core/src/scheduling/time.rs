//! Slot times on the weekly grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing an "HH:MM" slot time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time {0:?}, expected HH:MM")]
pub struct ParseTimeError(pub String);

/// A wall-clock time on the schedule grid, minute resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    pub hour: u8,
    pub minute: u8,
}

impl SlotTime {
    /// Construct from hour and minute. Panics in debug builds on
    /// out-of-range input; use `FromStr` for untrusted strings.
    pub fn new(hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self { hour, minute }
    }

    /// Minutes since midnight.
    pub fn total_minutes(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Add a duration, rolling minutes over into hours.
    pub fn plus_minutes(&self, minutes: u32) -> SlotTime {
        let total = self.total_minutes() + minutes;
        SlotTime {
            hour: ((total / 60) % 24) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl FromStr for SlotTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError(s.to_string()))?;
        let hour: u8 = h.parse().map_err(|_| ParseTimeError(s.to_string()))?;
        let minute: u8 = m.parse().map_err(|_| ParseTimeError(s.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(ParseTimeError(s.to_string()));
        }
        Ok(SlotTime { hour, minute })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
