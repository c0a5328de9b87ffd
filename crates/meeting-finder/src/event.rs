//! Fixed calendar commitments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing event: a title, when it happens, and who attends it.
///
/// Attendees are a set, so duplicates collapse and order does not matter.
/// Fields are read-only once the event is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True when at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
