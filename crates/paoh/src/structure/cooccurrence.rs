//! Actor co-occurrence multigraph.

use std::collections::HashMap;

use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};

use paoh_core::{
    event::{Event, EventId},
    identifier::ActorId,
};

/// Undirected multigraph of actors who share events.
///
/// Every event with `k >= 2` actors contributes one edge per unordered actor
/// pair, so actors who meet in several events are joined by several
/// parallel edges. Each edge carries the event it came from.
#[derive(Debug, Default)]
pub struct CoOccurrenceGraph {
    graph: UnGraph<ActorId, EventId>,
    node_map: HashMap<ActorId, NodeIndex>,
}

impl CoOccurrenceGraph {
    /// Builds the graph from deconflicted events.
    ///
    /// Actors become nodes in order of first appearance; actors of
    /// single-actor events are included without edges.
    pub fn from_events(events: &[Event]) -> Self {
        let mut graph = Self::default();

        for event in events {
            let nodes: Vec<NodeIndex> = event
                .actors()
                .iter()
                .map(|&actor| graph.add_actor(actor))
                .collect();

            for (i, &source) in nodes.iter().enumerate() {
                for &target in &nodes[i + 1..] {
                    graph.graph.add_edge(source, target, event.id().clone());
                }
            }
        }

        debug!(
            nodes_count = graph.graph.node_count(),
            edges_count = graph.graph.edge_count();
            "Co-occurrence graph built"
        );

        graph
    }

    fn add_actor(&mut self, actor: ActorId) -> NodeIndex {
        *self
            .node_map
            .entry(actor)
            .or_insert_with(|| self.graph.add_node(actor))
    }

    pub fn actors_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, parallel edges counted separately.
    pub fn edges_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all edges as actor pairs, in insertion order.
    pub fn actor_pairs(&self) -> impl Iterator<Item = (ActorId, ActorId)> + '_ {
        self.graph.edge_indices().filter_map(|edge| {
            let (source, target) = self.graph.edge_endpoints(edge)?;
            Some((self.graph[source], self.graph[target]))
        })
    }
}
