//! Dated multi-actor events.
//!
//! An [`Event`] links one or more actors at a point in time. Events are
//! produced by the normalizer, may have their date adjusted exactly once by
//! the deconflictor, and are read-only afterwards.
//!
//! Events whose date could not be understood are kept aside as
//! [`UnscheduledEvent`]s: they still identify their actors and title, but
//! take no part in the time layout.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::identifier::ActorId;

/// Absolute instant of an event, millisecond resolution.
pub type Timestamp = DateTime<Utc>;

/// Event identifier as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    /// Creates an event identifier from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Removes repeated actors, keeping the first occurrence of each.
fn dedup_actors(actors: impl IntoIterator<Item = ActorId>) -> Vec<ActorId> {
    let mut unique: Vec<ActorId> = Vec::new();
    for actor in actors {
        if !unique.contains(&actor) {
            unique.push(actor);
        }
    }
    unique
}

/// A timestamped record linking one or more actors.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use paoh_core::{event::Event, identifier::ActorId};
///
/// let date = Utc.with_ymd_and_hms(2020, 1, 10, 0, 0, 0).unwrap();
/// let event = Event::new(
///     "P-17",
///     date,
///     "Cold fusion at scale",
///     ["alice", "bob", "alice"].map(ActorId::new),
/// );
///
/// // Duplicates are dropped, first occurrence wins.
/// assert_eq!(event.actors().len(), 2);
/// assert!(event.is_multi_actor());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: EventId,
    date: Timestamp,
    title: String,
    actors: Vec<ActorId>,
}

impl Event {
    /// Creates a new event.
    ///
    /// # Arguments
    ///
    /// * `id` - Event identifier
    /// * `date` - Raw event date, before deconfliction
    /// * `title` - Free-text title, passed through to the renderer
    /// * `actors` - Participating actors; duplicates are removed keeping first-seen order
    ///
    /// An event must name at least one actor. Debug builds panic otherwise.
    pub fn new(
        id: impl Into<EventId>,
        date: Timestamp,
        title: impl Into<String>,
        actors: impl IntoIterator<Item = ActorId>,
    ) -> Self {
        let id = id.into();
        let actors = dedup_actors(actors);
        debug_assert!(!actors.is_empty(), "event `{id}` names no actor");
        Self {
            id,
            date,
            title: title.into(),
            actors,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Participating actors in first-seen order.
    pub fn actors(&self) -> &[ActorId] {
        &self.actors
    }

    /// Returns `true` if the event links two or more actors.
    pub fn is_multi_actor(&self) -> bool {
        self.actors.len() >= 2
    }

    /// Moves the event to a new date.
    ///
    /// Only timestamp deconfliction is expected to call this; every later
    /// stage treats the date as fixed.
    pub fn reschedule(&mut self, date: Timestamp) {
        self.date = date;
    }
}

/// An event whose date cell could not be interpreted.
///
/// Unscheduled events are excluded from the time axis and from lane
/// assignment. They carry the raw cell text so the caller can report it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnscheduledEvent {
    id: EventId,
    title: String,
    actors: Vec<ActorId>,
    raw_date: Option<String>,
}

impl UnscheduledEvent {
    /// Creates a new unscheduled event.
    ///
    /// `raw_date` is `None` when the date cell was missing altogether.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        actors: impl IntoIterator<Item = ActorId>,
        raw_date: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            actors: dedup_actors(actors),
            raw_date,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn actors(&self) -> &[ActorId] {
        &self.actors
    }

    /// The date cell as it appeared in the source, if any.
    pub fn raw_date(&self) -> Option<&str> {
        self.raw_date.as_deref()
    }
}


#[cfg(test)]
mod proptest_tests {
    use chrono::TimeZone;
    use proptest::prelude::*;

    use super::*;

    /// Deduplicated actors are unique and every input actor survives.
    fn check_dedup_keeps_each_actor_once(names: Vec<String>) -> Result<(), TestCaseError> {
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let ids: Vec<ActorId> = names.iter().map(|n| ActorId::new(n)).collect();
        let event = Event::new("p", date, "t", ids.clone());

        for (i, a) in event.actors().iter().enumerate() {
            prop_assert!(!event.actors()[i + 1..].contains(a));
        }
        for id in &ids {
            prop_assert!(event.actors().contains(id));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn dedup_keeps_each_actor_once(names in prop::collection::vec("[a-d]{1,2}", 1..12)) {
            check_dedup_keeps_each_actor_once(names)?;
        }
    }
}
