//! Meeting requests and the attendee sets derived from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A request for a meeting of `duration` minutes.
///
/// `attendees` must be free for a slot to count. `optional_attendees` are
/// included when possible and dropped all together when they are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    attendees: Vec<String>,
    #[serde(default)]
    optional_attendees: Vec<String>,
    duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: Vec::new(),
            duration,
        }
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional.into_iter().map(Into::into));
        self
    }

    /// The same request with a different duration.
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.push(attendee.into());
    }

    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &[String] {
        &self.optional_attendees
    }

    /// Meeting length in minutes.
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// The required attendees as a set.
    pub fn required_attendees(&self) -> BTreeSet<String> {
        self.attendees.iter().cloned().collect()
    }

    /// Required and optional attendees combined, with everyone treated as
    /// required.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .iter()
            .chain(&self.optional_attendees)
            .cloned()
            .collect()
    }
}
