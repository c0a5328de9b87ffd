//! Find the slots in a day when everyone in a meeting request can attend.
//!
//! The finder first treats optional attendees as required. If that leaves no
//! slot and the request names at least one required attendee, it drops all
//! optional attendees and tries once more with the required ones alone.
//!
//! Inputs are treated as an immutable snapshot for the duration of a call.
//! Callers that share the event list across threads must not mutate it while
//! a query is running.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::busy;
use crate::event::Event;
use crate::free;
use crate::request::MeetingRequest;
use crate::time_range::{TimeRange, DAY_MINUTES};

/// Which attendees the reported slots satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendeeScope {
    /// Required and optional attendees are all free.
    Everyone,
    /// Optional attendees were dropped; only required attendees are free.
    RequiredOnly,
}

/// Free slots plus the attendee set they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Non-overlapping slots sorted by start, each at least the requested duration.
    pub slots: Vec<TimeRange>,
    pub scope: AttendeeScope,
}

/// Find every slot of at least `request.duration` minutes when the request's
/// attendees are all free.
///
/// See [`find_available_slots_with_report`] for which attendees that covers.
pub fn find_available_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    find_available_slots_with_report(events, request).slots
}

/// Like [`find_available_slots`], but also reports whether optional attendees
/// had to be dropped.
///
/// A duration longer than a day never fits, so the result is empty and no
/// fallback is attempted. Otherwise the combined attendee set is tried first;
/// its result is returned when non-empty or when there are no required
/// attendees to fall back to.
pub fn find_available_slots_with_report(
    events: &[Event],
    request: &MeetingRequest,
) -> Availability {
    if request.duration() > DAY_MINUTES {
        debug!(
            duration = request.duration(),
            "requested duration is longer than a day"
        );
        return Availability {
            slots: Vec::new(),
            scope: AttendeeScope::Everyone,
        };
    }

    let everyone = available_for(events, &request.all_attendees(), request.duration());
    if !everyone.is_empty() || request.attendees().is_empty() {
        return Availability {
            slots: everyone,
            scope: AttendeeScope::Everyone,
        };
    }

    debug!(
        optional = request.optional_attendees().len(),
        "no slot fits every attendee, retrying with required attendees only"
    );
    let required = available_for(events, &request.required_attendees(), request.duration());
    Availability {
        slots: required,
        scope: AttendeeScope::RequiredOnly,
    }
}

/// One pass of the finder against a fixed attendee set.
fn available_for(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    let busy = busy::busy_periods(events, attendees);
    let slots = free::free_slots(&busy, duration);
    trace!(
        attendees = attendees.len(),
        busy = busy.len(),
        free = slots.len(),
        "computed availability"
    );
    slots
}
