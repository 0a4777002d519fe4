//! The normalized input of a layout run.

use crate::event::{Event, UnscheduledEvent};

/// Events ready for layout, plus the events that could not be scheduled.
///
/// A `Dataset` is supplied whole for every layout run; nothing is carried
/// over from previous runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    events: Vec<Event>,
    unscheduled: Vec<UnscheduledEvent>,
}

impl Dataset {
    /// Creates a dataset from scheduled and unscheduled events.
    pub fn new(events: Vec<Event>, unscheduled: Vec<UnscheduledEvent>) -> Self {
        Self {
            events,
            unscheduled,
        }
    }

    /// Creates a dataset in which every event has a date.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self::new(events, Vec::new())
    }

    /// Events with a usable date, in input order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events whose date could not be interpreted.
    pub fn unscheduled(&self) -> &[UnscheduledEvent] {
        &self.unscheduled
    }

    /// Returns `true` if there is nothing to lay out.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
