//! Free-interval derivation.
//!
//! Inverts a sorted, merged list of busy ranges within the day and keeps the
//! gaps that are long enough for the meeting.

use crate::time_range::{TimeRange, DAY_MINUTES, START_OF_DAY, WHOLE_DAY};

/// Gaps of at least `min_duration` minutes between `busy` ranges, sorted by
/// start.
///
/// `busy` must be sorted and non-overlapping, as produced by
/// [`merge_busy_ranges`](crate::busy::merge_busy_ranges).
///
/// The gaps before the first and after the last busy range are only emitted
/// when they are non-empty. Gaps between two busy ranges are emitted whenever
/// they are long enough, so a zero-duration request reports the zero-width gap
/// between back-to-back ranges.
pub fn free_slots(busy: &[TimeRange], min_duration: u32) -> Vec<TimeRange> {
    let (first, last) = match (busy.first(), busy.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return if WHOLE_DAY.duration() >= min_duration {
                vec![WHOLE_DAY]
            } else {
                Vec::new()
            };
        }
    };

    let mut slots = Vec::new();

    if first.start() > START_OF_DAY {
        push_if_long_enough(&mut slots, START_OF_DAY, first.start(), min_duration);
    }

    for pair in busy.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        debug_assert!(
            prev.end() <= next.start(),
            "busy ranges must be sorted and merged: {} then {}",
            prev,
            next
        );
        push_if_long_enough(&mut slots, prev.end(), next.start(), min_duration);
    }

    if last.end() < DAY_MINUTES {
        push_if_long_enough(&mut slots, last.end(), DAY_MINUTES, min_duration);
    }

    slots
}

fn push_if_long_enough(slots: &mut Vec<TimeRange>, start: u32, end: u32, min_duration: u32) {
    let gap = TimeRange::from_start_end(start, end, false);
    if gap.duration() >= min_duration {
        slots.push(gap);
    }
}
