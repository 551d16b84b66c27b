//! Time values as read off a twelve-hour dial.

use klok_core::KlokError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::numeral::{MIDNIGHT, NOON};

/// The hour hand's position, with noon and midnight kept apart from an
/// ordinary twelve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockHour {
    /// One of 1..=12.
    Dial(u8),
    Noon,
    Midnight,
}

impl ClockHour {
    /// Where the hand points, 1..=12. Noon and midnight point at 12.
    pub fn dial(&self) -> u8 {
        match self {
            Self::Dial(h) => *h,
            Self::Noon | Self::Midnight => 12,
        }
    }

    /// Numeral table index for this hour.
    pub(crate) fn numeral_index(&self) -> u8 {
        match self {
            Self::Dial(h) => *h,
            Self::Noon => NOON,
            Self::Midnight => MIDNIGHT,
        }
    }

    /// Table index of the hour that follows, wrapping 12 to 1.
    pub(crate) fn next_index(&self) -> u8 {
        self.dial() % 12 + 1
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Noon | Self::Midnight)
    }
}

/// An hour/minute pair to be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeValue {
    hour: ClockHour,
    minute: u8,
}

impl TimeValue {
    /// Build a dial time. `hour` must be 1..=12 and `minute` 0..=59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, KlokError> {
        if !(1..=12).contains(&hour) {
            return Err(KlokError::InvalidInput(format!(
                "hour {hour} is not in 1..=12"
            )));
        }
        Self::with_hour(ClockHour::Dial(hour), minute)
    }

    /// Build from a 24-hour reading: 0 is midnight, 12 is noon, 13..=23
    /// fold onto the dial.
    pub fn from_24h(hour: u8, minute: u8) -> Result<Self, KlokError> {
        let clock_hour = match hour {
            0 => ClockHour::Midnight,
            12 => ClockHour::Noon,
            1..=11 => ClockHour::Dial(hour),
            13..=23 => ClockHour::Dial(hour - 12),
            _ => {
                return Err(KlokError::InvalidInput(format!(
                    "hour {hour} is not in 0..=23"
                )))
            }
        };
        Self::with_hour(clock_hour, minute)
    }

    fn with_hour(hour: ClockHour, minute: u8) -> Result<Self, KlokError> {
        if minute > 59 {
            return Err(KlokError::InvalidInput(format!(
                "minute {minute} is not in 0..=59"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> ClockHour {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes past twelve on the dial, 0..720.
    pub fn dial_minutes(&self) -> u16 {
        u16::from(self.hour.dial() % 12) * 60 + u16::from(self.minute)
    }

    /// Whether both hands sit in the same place, ignoring noon/midnight.
    pub fn same_dial_position(&self, other: &TimeValue) -> bool {
        self.dial_minutes() == other.dial_minutes()
    }

    /// Shortest distance around the dial between two times, in minutes.
    pub fn dial_distance(&self, other: &TimeValue) -> u16 {
        let a = self.dial_minutes();
        let b = other.dial_minutes();
        let diff = a.abs_diff(b);
        diff.min(720 - diff)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour.dial(), self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = KlokError;

    /// Parse `H:MM` as read off the dial. `0:MM` is taken as midnight and
    /// 13..=23 fold onto the dial; `12:MM` stays a plain twelve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KlokError::InvalidInput(format!("'{s}' is not a time (expected H:MM)"));
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = m.trim().parse().map_err(|_| invalid())?;
        match hour {
            0 | 13..=23 => Self::from_24h(hour, minute),
            _ => Self::new(hour, minute),
        }
    }
}
