//! Graph structures derived from the event set.
//!
//! - [`CoOccurrenceGraph`] - Actors linked by the multi-actor events they share

mod cooccurrence;

pub use cooccurrence::CoOccurrenceGraph;
