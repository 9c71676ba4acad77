use std::{fmt, str::FromStr};

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_HALF_DAY: i64 = 12 * MINUTES_PER_HOUR;

/// Maps any minute count into `[0, 1439]`, wrapping negatives backward.
pub fn normalize(minutes: i64) -> i64 {
    minutes.rem_euclid(MINUTES_PER_DAY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => f.write_str("AM"),
            Self::Pm => f.write_str("PM"),
        }
    }
}

/// 12-hour display tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFields {
    pub hour12: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

/// Derives the 12-hour display tuple for any minute count.
pub fn to_clock_fields(minutes: i64) -> ClockFields {
    let minutes = normalize(minutes);
    let hour = minutes / MINUTES_PER_HOUR;
    let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    ClockFields {
        hour12: hour12 as u8,
        minute: (minutes % MINUTES_PER_HOUR) as u8,
        meridiem,
    }
}

/// A point in the 24-hour cycle, stored as minutes since midnight.
///
/// Every constructor and mutation normalizes, so the inner value is always in
/// `[0, 1439]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: Self = Self(0);
    pub const NOON: Self = Self(720);

    pub fn from_minutes(minutes: i64) -> Self {
        Self(normalize(minutes) as u16)
    }

    pub fn from_hm(hour: i64, minute: i64) -> Self {
        Self::from_minutes(hour * MINUTES_PER_HOUR + minute)
    }

    pub fn now_local() -> Self {
        Self::from(Local::now().time())
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    /// Hour of day in `[0, 23]`.
    pub fn hour(self) -> u8 {
        (self.minutes() / MINUTES_PER_HOUR) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minutes() % MINUTES_PER_HOUR) as u8
    }

    pub fn meridiem(self) -> Meridiem {
        self.fields().meridiem
    }

    pub fn fields(self) -> ClockFields {
        to_clock_fields(self.minutes())
    }

    pub fn add_minutes(self, delta: i64) -> Self {
        Self::from_minutes(self.minutes() + delta)
    }

    /// Start of the 12-hour half this time sits in: 0 for AM, 720 for PM.
    pub fn half_day_offset(self) -> i64 {
        self.minutes() - self.minutes() % MINUTES_PER_HALF_DAY
    }

    pub fn to_24h_string(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Minute hand angle in degrees, clockwise from 12 o'clock.
    pub fn minute_hand_degrees(self) -> f32 {
        f32::from(self.minute()) * 6.0
    }

    /// Hour hand angle in degrees; moves half a degree per minute.
    pub fn hour_hand_degrees(self) -> f32 {
        f32::from(self.hour() % 12) * 30.0 + f32::from(self.minute()) * 0.5
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::from_hm(10, 10)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields();
        write!(f, "{}:{:02} {}", fields.hour12, fields.minute, fields.meridiem)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(value: NaiveTime) -> Self {
        Self::from_hm(i64::from(value.hour()), i64::from(value.minute()))
    }
}

impl From<ClockTime> for i64 {
    fn from(value: ClockTime) -> Self {
        value.minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    #[error("minute count {0} is outside 0..1440")]
    OutOfRange(i64),
    #[error("expected HH:MM, got '{0}'")]
    Malformed(String),
}

impl TryFrom<i64> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..MINUTES_PER_DAY).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(ClockTimeError::OutOfRange(value))
        }
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Parses a 24-hour `HH:MM` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockTimeError::Malformed(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour: i64 = hour.trim().parse().map_err(|_| malformed())?;
        let minute: i64 = minute.trim().parse().map_err(|_| malformed())?;
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            return Err(malformed());
        }
        Ok(Self::from_hm(hour, minute))
    }
}

#[cfg(test)]
#[path = "tests/time_tests.rs"]
mod tests;
