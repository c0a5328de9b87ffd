//! Half-open minute ranges within a single day.
//!
//! A [`TimeRange`] is `[start, end)` measured in minutes from midnight. The day
//! runs from [`START_OF_DAY`] to [`DAY_MINUTES`]; [`END_OF_DAY`] is the last
//! minute that belongs to it.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: u32 = 1439;

/// Number of minutes in a day; the exclusive end of [`WHOLE_DAY`].
pub const DAY_MINUTES: u32 = END_OF_DAY + 1;

/// The entire day, `[0, 1440)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    end: DAY_MINUTES,
};

/// An immutable half-open interval of minutes, `[start, end)`.
///
/// Ordering is by start, then end, so sorting a list of ranges is
/// deterministic even when several share a start minute.
///
/// Deserialization goes through [`TimeRange::try_from_start_end`], so a
/// reversed range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire form of a [`TimeRange`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = FinderError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::try_from_start_end(raw.start, raw.end)
    }
}

impl TimeRange {
    /// Build a range from its bounds. When `inclusive` is true, `end` is the
    /// last minute of the range rather than the first minute after it.
    ///
    /// Callers must pass `start <= end`; use [`TimeRange::try_from_start_end`]
    /// for unvalidated input.
    pub const fn from_start_end(start: u32, end: u32, inclusive: bool) -> Self {
        let end = if inclusive { end + 1 } else { end };
        TimeRange { start, end }
    }

    /// Build a range starting at `start` and lasting `duration` minutes.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        TimeRange {
            start,
            end: start + duration,
        }
    }

    /// Validating constructor for the input layer.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidRange` if `start > end`.
    pub fn try_from_start_end(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(FinderError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Build a range from two wall-clock times on the same day.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidRange` if `end` is before `start`.
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        Self::try_from_start_end(minute_of_day(start), minute_of_day(end))
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `minute` falls inside `[start, end)`.
    pub const fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// True when `other` lies entirely within this range's bounds.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True when the two ranges share at least one minute.
    ///
    /// Back-to-back ranges (`a.end == b.start`) do not overlap, and an empty
    /// range overlaps nothing.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", format_clock(self.start), format_clock(self.end))
    }
}

/// Compare two ranges by start minute only.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start)
}

/// Compare two ranges by end minute only.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end)
}

/// Minutes since midnight for a wall-clock time. Seconds are ignored.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an `HH:MM` clock string into minutes since midnight.
///
/// `"24:00"` is accepted and maps to [`DAY_MINUTES`], the exclusive end of
/// the day, which `NaiveTime` cannot represent.
///
/// # Errors
/// Returns `FinderError::InvalidClock` if the string is not a valid `HH:MM` time.
pub fn parse_clock(s: &str) -> Result<u32> {
    let s = s.trim();
    if s == "24:00" {
        return Ok(DAY_MINUTES);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(minute_of_day)
        .map_err(|e| FinderError::InvalidClock(format!("'{}': {}", s, e)))
}

/// Render minutes since midnight as `HH:MM`. The end of day renders as `24:00`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
