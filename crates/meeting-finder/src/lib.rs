//! # meeting-finder
//!
//! Find the free time in a single day when a group of people can meet.
//!
//! Given the day's existing events and a [`MeetingRequest`] naming required and
//! optional attendees plus a duration, [`find_available_slots`] returns every
//! slot long enough for the meeting in which all of those attendees are free.
//! When no slot suits the optional attendees as well, they are dropped and the
//! search is repeated for the required attendees alone.
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute ranges and day bounds
//! - [`event`] — Existing calendar events
//! - [`request`] — Meeting requests and attendee sets
//! - [`busy`] — Collect and merge the busy ranges of relevant attendees
//! - [`free`] — Invert busy ranges into free slots
//! - [`finder`] — The availability query with optional-attendee fallback
//! - [`error`] — Error types

pub mod busy;
pub mod error;
pub mod event;
pub mod finder;
pub mod free;
pub mod request;
pub mod time_range;

pub use error::FinderError;
pub use event::Event;
pub use finder::{
    find_available_slots, find_available_slots_with_report, AttendeeScope, Availability,
};
pub use request::MeetingRequest;
pub use time_range::TimeRange;
