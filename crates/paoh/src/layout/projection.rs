//! Projection of ordered actors and deconflicted events onto the plot area.
//!
//! Dates map to x through a [`TimeScale`]; lanes map to y through a
//! [`PointScale`] with one slot per lane. Coordinates are relative to the
//! top-left corner of the plot area.

use std::collections::HashMap;

use log::debug;

use paoh_core::{
    event::{Event, EventId, Timestamp, UnscheduledEvent},
    geometry::{Point, Size},
    identifier::ActorId,
};

use crate::layout::{
    ActorRecord,
    scale::{PointScale, TimeScale},
};

/// One actor's horizontal lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    actor: ActorRecord,
    y: f32,
    start_x: f32,
    end_x: f32,
}

impl Lane {
    pub fn actor(&self) -> &ActorRecord {
        &self.actor
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Where the lane begins: the x of the actor's first event.
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.y)
    }

    /// Where the lane ends: the right edge of the plot area.
    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.y)
    }
}

/// Vertical connector of a multi-actor event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    x: f32,
    min_y: f32,
    max_y: f32,
}

impl Span {
    pub fn top(&self) -> Point {
        Point::new(self.x, self.min_y)
    }

    pub fn bottom(&self) -> Point {
        Point::new(self.x, self.max_y)
    }

    pub fn length(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Geometry of one event: a point on each of its actors' lanes and, for
/// two or more actors, a span joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct EventGeometry {
    id: EventId,
    title: String,
    date: Timestamp,
    x: f32,
    points: Vec<(ActorId, f32)>,
    span: Option<Span>,
}

impl EventGeometry {
    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The deconflicted date the event is drawn at.
    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    /// Marker positions, one per actor in event order.
    pub fn points(&self) -> impl Iterator<Item = (ActorId, Point)> + '_ {
        self.points
            .iter()
            .map(|&(actor, y)| (actor, Point::new(self.x, y)))
    }

    pub fn points_count(&self) -> usize {
        self.points.len()
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

/// The complete projected layout handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    lanes: Vec<Lane>,
    events: Vec<EventGeometry>,
    time_scale: TimeScale,
    plot_size: Size,
    unscheduled: Vec<UnscheduledEvent>,
}

impl Layout {
    /// Lanes in lane order, top to bottom.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, actor: ActorId) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.actor.id() == actor)
    }

    /// Events in deconflicted date order.
    pub fn events(&self) -> &[EventGeometry] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&EventGeometry> {
        self.events.iter().find(|event| event.id.as_str() == id)
    }

    pub fn time_scale(&self) -> &TimeScale {
        &self.time_scale
    }

    /// The padded time domain.
    pub fn domain(&self) -> (Timestamp, Timestamp) {
        (self.time_scale.start(), self.time_scale.end())
    }

    pub fn plot_size(&self) -> Size {
        self.plot_size
    }

    /// Events left out of the layout because their date was unusable.
    pub fn unscheduled(&self) -> &[UnscheduledEvent] {
        &self.unscheduled
    }
}

/// Projects lanes and events onto the plot area.
///
/// `lanes` must carry their final lane indices. The time scale's width is
/// expected to match the plot width.
pub fn project(
    lanes: Vec<ActorRecord>,
    events: &[Event],
    time_scale: TimeScale,
    plot_size: Size,
    unscheduled: Vec<UnscheduledEvent>,
) -> Layout {
    let y_scale = PointScale::new(lanes.len(), plot_size.height());
    let lane_y: HashMap<ActorId, f32> = lanes
        .iter()
        .map(|actor| (actor.id(), y_scale.apply(actor.lane())))
        .collect();

    let mut lanes: Vec<Lane> = lanes
        .into_iter()
        .map(|actor| Lane {
            y: y_scale.apply(actor.lane()),
            start_x: time_scale.apply(actor.first_date()),
            end_x: plot_size.width(),
            actor,
        })
        .collect();
    lanes.sort_by_key(|lane| lane.actor.lane());

    let events: Vec<EventGeometry> = events
        .iter()
        .map(|event| {
            let points: Vec<(ActorId, f32)> = event
                .actors()
                .iter()
                .filter_map(|&actor| Some((actor, *lane_y.get(&actor)?)))
                .collect();
            let x = time_scale.apply(event.date());

            let span = (points.len() >= 2).then(|| {
                let (min_y, max_y) = points
                    .iter()
                    .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, y)| {
                        (lo.min(y), hi.max(y))
                    });
                Span { x, min_y, max_y }
            });

            EventGeometry {
                id: event.id().clone(),
                title: event.title().to_string(),
                date: event.date(),
                x,
                points,
                span,
            }
        })
        .collect();

    debug!(
        lanes_count = lanes.len(),
        events_count = events.len(),
        spans_count = events.iter().filter(|e| e.span.is_some()).count();
        "Layout projected"
    );

    Layout {
        lanes,
        events,
        time_scale,
        plot_size,
        unscheduled,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use float_cmp::assert_approx_eq;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn record(name: &str, first_date: Timestamp, lane: usize) -> ActorRecord {
        let mut record = ActorRecord::new(ActorId::new(name), first_date, true);
        record.set_lane(lane);
        record
    }

    fn layout() -> Layout {
        let (a, b, c) = (ActorId::new("a"), ActorId::new("b"), ActorId::new("c"));
        let events = vec![
            Event::new("e1", ymd(2020, 1, 1), "First", [a, c]),
            Event::new("e2", ymd(2020, 1, 11), "Second", [b]),
        ];
        let scale = TimeScale::new(ymd(2020, 1, 1), ymd(2020, 1, 21), 200.0).unwrap();

        project(
            vec![
                record("b", ymd(2020, 1, 11), 2),
                record("a", ymd(2020, 1, 1), 0),
                record("c", ymd(2020, 1, 1), 1),
            ],
            &events,
            scale,
            Size::new(200.0, 300.0),
            Vec::new(),
        )
    }

    #[test]
    fn test_lanes_sorted_and_placed() {
        let layout = layout();
        let names: Vec<_> = layout.lanes().iter().map(|l| l.actor().id().name()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);

        let b = layout.lane(ActorId::new("b")).unwrap();
        assert_approx_eq!(f32, b.y(), 250.0);
        assert_approx_eq!(f32, b.start().x(), 100.0);
        assert_approx_eq!(f32, b.end().x(), 200.0);
    }

    #[test]
    fn test_multi_actor_event_has_span() {
        let layout = layout();
        let event = layout.event("e1").unwrap();

        assert_eq!(event.points_count(), 2);
        let span = event.span().unwrap();
        assert_approx_eq!(f32, span.top().y(), 50.0);
        assert_approx_eq!(f32, span.bottom().y(), 150.0);
        assert_approx_eq!(f32, span.length(), 100.0);
        assert_approx_eq!(f32, span.top().x(), 0.0);
    }

    #[test]
    fn test_single_actor_event_has_point_only() {
        let layout = layout();
        let event = layout.event("e2").unwrap();

        assert!(event.span().is_none());
        let points: Vec<_> = event.points().collect();
        assert_eq!(points.len(), 1);
        assert_approx_eq!(f32, points[0].1.x(), 100.0);
        assert_eq!(event.title(), "Second");
    }

    #[test]
    fn test_domain_passthrough() {
        let layout = layout();
        assert_eq!(layout.domain(), (ymd(2020, 1, 1), ymd(2020, 1, 21)));
        assert!(layout.unscheduled().is_empty());
    }
}
