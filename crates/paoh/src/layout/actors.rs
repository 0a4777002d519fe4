//! Actor extraction from deconflicted events.

use indexmap::IndexMap;
use log::debug;

use paoh_core::{
    event::{Event, Timestamp},
    identifier::ActorId,
};

/// Per-actor layout state.
///
/// `first_date` and `connected` are derived once from the deconflicted
/// events; `sim_position` is written by the ordering stage and `lane` by
/// the partitioner.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorRecord {
    id: ActorId,
    first_date: Timestamp,
    connected: bool,
    sim_position: f64,
    lane: usize,
}

impl ActorRecord {
    pub fn new(id: ActorId, first_date: Timestamp, connected: bool) -> Self {
        Self {
            id,
            first_date,
            connected,
            sim_position: 0.0,
            lane: 0,
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Date of the earliest event the actor takes part in.
    pub fn first_date(&self) -> Timestamp {
        self.first_date
    }

    /// Whether the actor shares at least one event with another actor.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Final coordinate of the actor in the ordering simulation.
    pub fn sim_position(&self) -> f64 {
        self.sim_position
    }

    /// Lane index, top to bottom.
    pub fn lane(&self) -> usize {
        self.lane
    }

    pub(crate) fn set_sim_position(&mut self, position: f64) {
        self.sim_position = position;
    }

    pub(crate) fn set_lane(&mut self, lane: usize) {
        self.lane = lane;
    }
}

/// Extracts one record per actor.
///
/// Records come out in order of first appearance, walking events in the
/// given order and actors in event order.
pub fn extract_actors(events: &[Event]) -> Vec<ActorRecord> {
    let mut records: IndexMap<ActorId, ActorRecord> = IndexMap::new();

    for event in events {
        let connected = event.is_multi_actor();
        for &actor in event.actors() {
            records
                .entry(actor)
                .and_modify(|record| {
                    record.first_date = record.first_date.min(event.date());
                    record.connected |= connected;
                })
                .or_insert_with(|| ActorRecord::new(actor, event.date(), connected));
        }
    }

    debug!(
        actors_count = records.len(),
        connected_count = records.values().filter(|r| r.connected).count();
        "Actors extracted"
    );

    records.into_values().collect()
}
