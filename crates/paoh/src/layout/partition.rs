//! Lane assignment: connected actors first, solitary actors last.

use log::debug;

use crate::layout::ActorRecord;

/// Assigns lanes to actors given in simulation order.
///
/// Connected actors take the first lanes and solitary actors the rest; the
/// simulation order is kept inside each group. Lane indices are `0..n`.
pub fn partition(ordered: Vec<ActorRecord>) -> Vec<ActorRecord> {
    let (connected, solitary): (Vec<_>, Vec<_>) =
        ordered.into_iter().partition(ActorRecord::is_connected);

    debug!(
        connected_count = connected.len(),
        solitary_count = solitary.len();
        "Actors partitioned"
    );

    connected
        .into_iter()
        .chain(solitary)
        .enumerate()
        .map(|(lane, mut actor)| {
            actor.set_lane(lane);
            actor
        })
        .collect()
}
