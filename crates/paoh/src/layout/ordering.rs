//! Force-directed actor ordering.
//!
//! Actors are simulated as particles on a line. Each particle is anchored
//! at its temporal rank times the rank spacing, pulled toward the actors it
//! shares events with and weakly repelled by every other actor. After a
//! fixed number of steps the particles are read off in position order.
//!
//! The anchor dominates, so the result stays close to temporal order while
//! strongly co-occurring actors may swap places with their neighbours.
//!
//! The simulation is deterministic: particles start at their anchors with
//! zero velocity, forces are exact pairwise sums, and particles that share
//! a coordinate exert no force on each other.

use std::collections::HashMap;

use log::{debug, trace};

use paoh_core::identifier::ActorId;

use crate::{
    config::SimulationConfig,
    layout::{ActorRecord, LayoutContext},
    structure::CoOccurrenceGraph,
};

/// One simulated actor.
#[derive(Debug, Clone, Copy)]
struct Particle {
    anchor: f64,
    position: f64,
    velocity: f64,
}

impl Particle {
    fn at_anchor(anchor: f64) -> Self {
        Self {
            anchor,
            position: anchor,
            velocity: 0.0,
        }
    }
}

/// A spring between two particles.
#[derive(Debug, Clone, Copy)]
struct Link {
    source: usize,
    target: usize,
    /// Share of the correction applied to the target, by endpoint degree.
    bias: f64,
}

/// Simulation state for one ordering run.
struct Simulation<'a> {
    config: &'a SimulationConfig,
    particles: Vec<Particle>,
    links: Vec<Link>,
    alpha: f64,
}

impl<'a> Simulation<'a> {
    fn new(config: &'a SimulationConfig, anchors: &[f64], edges: &[(usize, usize)]) -> Self {
        let mut degree = vec![0usize; anchors.len()];
        for &(source, target) in edges {
            degree[source] += 1;
            degree[target] += 1;
        }

        let links = edges
            .iter()
            .map(|&(source, target)| Link {
                source,
                target,
                bias: degree[source] as f64 / (degree[source] + degree[target]) as f64,
            })
            .collect();

        Self {
            config,
            particles: anchors.iter().copied().map(Particle::at_anchor).collect(),
            links,
            alpha: 1.0,
        }
    }

    fn run(&mut self) {
        let alpha_decay = self.config.alpha_decay();
        for step in 0..self.config.iterations() {
            self.alpha -= self.alpha * alpha_decay;
            self.apply_links();
            self.apply_charge();
            self.apply_anchors();
            self.integrate();
            trace!(step = step, alpha = self.alpha; "Simulation step");
        }
    }

    /// Springs toward the rest distance, using positions one step ahead.
    fn apply_links(&mut self) {
        let strength = self.config.link_strength();
        let distance = self.config.link_distance();

        for link in &self.links {
            let source = self.particles[link.source];
            let target = self.particles[link.target];

            let delta = (target.position + target.velocity) - (source.position + source.velocity);
            let length = delta.abs();
            if length == 0.0 {
                continue;
            }

            let correction = delta * (length - distance) / length * self.alpha * strength;
            self.particles[link.target].velocity -= correction * link.bias;
            self.particles[link.source].velocity += correction * (1.0 - link.bias);
        }
    }

    /// Pairwise inverse-distance repulsion (for a negative strength).
    fn apply_charge(&mut self) {
        let strength = self.config.charge_strength();
        let min_distance_sq = self.config.charge_min_distance().powi(2);

        // Forces are computed from positions at the start of the pass.
        let positions: Vec<f64> = self.particles.iter().map(|p| p.position).collect();

        for (i, particle) in self.particles.iter_mut().enumerate() {
            for (j, &other) in positions.iter().enumerate() {
                if i == j {
                    continue;
                }

                let delta = other - positions[i];
                if delta == 0.0 {
                    continue;
                }

                let mut distance_sq = delta * delta;
                if distance_sq < min_distance_sq {
                    distance_sq = (min_distance_sq * distance_sq).sqrt();
                }
                particle.velocity += delta * strength * self.alpha / distance_sq;
            }
        }
    }

    fn apply_anchors(&mut self) {
        let strength = self.config.anchor_strength();
        for particle in &mut self.particles {
            particle.velocity += (particle.anchor - particle.position) * strength * self.alpha;
        }
    }

    fn integrate(&mut self) {
        let retain = 1.0 - self.config.velocity_decay();
        for particle in &mut self.particles {
            particle.velocity *= retain;
            particle.position += particle.velocity;
        }
    }
}

/// Orders actors by simulated position.
///
/// `actors` come from the extractor; the temporal rank of each actor is its
/// index after a stable sort by first date. Returns the actors sorted by
/// final position (ties broken by rank) with `sim_position` set.
pub fn order_actors(
    actors: Vec<ActorRecord>,
    graph: &CoOccurrenceGraph,
    ctx: &LayoutContext,
) -> Vec<ActorRecord> {
    let config = ctx.config();

    let mut ranked = actors;
    ranked.sort_by_key(ActorRecord::first_date);

    let rank_of: HashMap<ActorId, usize> = ranked
        .iter()
        .enumerate()
        .map(|(rank, actor)| (actor.id(), rank))
        .collect();

    let edges: Vec<(usize, usize)> = graph
        .actor_pairs()
        .filter_map(|(a, b)| Some((*rank_of.get(&a)?, *rank_of.get(&b)?)))
        .collect();

    let anchors: Vec<f64> = (0..ranked.len())
        .map(|rank| rank as f64 * config.rank_spacing())
        .collect();

    let mut simulation = Simulation::new(config.simulation(), &anchors, &edges);
    simulation.run();

    for (actor, particle) in ranked.iter_mut().zip(&simulation.particles) {
        actor.set_sim_position(particle.position);
    }

    // `ranked` is in rank order, so a stable sort breaks ties by rank.
    ranked.sort_by(|a, b| a.sim_position().total_cmp(&b.sim_position()));

    let displaced = ranked
        .iter()
        .enumerate()
        .filter(|(index, actor)| rank_of.get(&actor.id()) != Some(index))
        .count();
    debug!(
        actors_count = ranked.len(),
        links_count = edges.len(),
        displaced_count = displaced;
        "Actors ordered"
    );

    ranked
}


#[cfg(test)]
mod proptest_tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use proptest::prelude::*;

    use paoh_core::{event::Event, geometry::Size};

    use super::*;
    use crate::{config::LayoutConfig, layout::actors::extract_actors};

    fn arb_events() -> impl Strategy<Value = Vec<Event>> {
        prop::collection::vec(prop::collection::vec(0u8..10, 1..4), 1..20).prop_map(|lists| {
            let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
            lists
                .into_iter()
                .enumerate()
                .map(|(i, actors)| {
                    Event::new(
                        format!("e{i}"),
                        base + TimeDelta::days(3 * i as i64),
                        "t",
                        actors.into_iter().map(|a| ActorId::new(&format!("a{a}"))),
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn ordering_keeps_every_actor_once(events in arb_events()) {
            let graph = CoOccurrenceGraph::from_events(&events);
            let extracted = extract_actors(&events);
            let ctx = LayoutContext::new(LayoutConfig::default(), Size::new(100.0, 100.0));
            let ordered = order_actors(extracted.clone(), &graph, &ctx);

            prop_assert_eq!(ordered.len(), extracted.len());
            for actor in &extracted {
                prop_assert!(ordered.iter().any(|o| o.id() == actor.id()));
            }
            for pair in ordered.windows(2) {
                prop_assert!(pair[0].sim_position() <= pair[1].sim_position());
                prop_assert!(pair[0].sim_position().is_finite());
            }
        }
    }
}
