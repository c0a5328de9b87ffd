//! Busy-interval extraction.
//!
//! Collects the ranges of every event attended by someone in the active
//! attendee set, clips them to the day, sorts them, and merges overlapping
//! ranges into maximal disjoint runs.

use std::collections::BTreeSet;

use crate::event::Event;
use crate::time_range::{TimeRange, WHOLE_DAY};

/// Ranges of the events that involve at least one of `attendees`, clipped to
/// the day. Events with no minute inside the day are dropped.
pub fn busy_ranges(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.involves_any(attendees))
        .map(Event::when)
        .filter(|when| when.overlaps(&WHOLE_DAY))
        .map(|when| {
            TimeRange::from_start_end(
                when.start().max(WHOLE_DAY.start()),
                when.end().min(WHOLE_DAY.end()),
                false,
            )
        })
        .collect()
}

/// Sort ranges and merge those that share at least one minute.
///
/// Back-to-back ranges (`a.end == b.start`) are kept apart so the zero-width
/// gap between them is still visible to a zero-duration query.
pub fn merge_busy_ranges(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    // Start, then end: see `TimeRange`'s `Ord`.
    ranges.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() < last.end() {
                let end = last.end().max(range.end());
                *last = TimeRange::from_start_end(last.start(), end, false);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Sorted, merged busy ranges for `attendees`.
pub fn busy_periods(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    merge_busy_ranges(busy_ranges(events, attendees))
}
