//! Layout pipeline for PAOH plots.
//!
//! This module turns a [`Dataset`] into a positioned [`Layout`]. Each stage
//! consumes the previous stage's output:
//!
//! ```text
//! Dataset (events with raw dates)
//!     ↓ deconflict   dates spread apart and spaced
//!     ↓ actors       first date and connectedness per actor
//!     ↓ ordering     force simulation seeded by temporal rank
//!     ↓ partition    connected lanes first, solitary lanes last
//!     ↓ projection   coordinates in the plot area
//! Layout
//! ```
//!
//! [`LayoutEngine`] runs the stages in order. Every failure is detected
//! before the ordering stage starts.

pub mod actors;
mod context;
pub mod deconflict;
mod error;
pub mod ordering;
pub mod partition;
pub mod projection;
pub mod scale;

pub use actors::ActorRecord;
pub use context::LayoutContext;
pub use error::LayoutError;
pub use projection::{EventGeometry, Lane, Layout, Span};

use log::{debug, info, warn};

use paoh_core::{dataset::Dataset, event::Event};

use crate::structure::CoOccurrenceGraph;
use scale::TimeScale;

/// Runs the layout stages over a dataset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use paoh::{
///     config::LayoutConfig,
///     dataset::Dataset,
///     event::Event,
///     geometry::Size,
///     identifier::ActorId,
///     layout::{LayoutContext, LayoutEngine},
/// };
///
/// let date = Utc.with_ymd_and_hms(2020, 1, 10, 0, 0, 0).unwrap();
/// let dataset = Dataset::from_events(vec![
///     Event::new("p1", date, "Survey", [ActorId::new("ada"), ActorId::new("grace")]),
/// ]);
///
/// let engine = LayoutEngine::new(LayoutContext::new(
///     LayoutConfig::default(),
///     Size::new(800.0, 400.0),
/// ));
/// let layout = engine.run(&dataset).unwrap();
/// assert_eq!(layout.lanes().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    context: LayoutContext,
}

impl LayoutEngine {
    pub fn new(context: LayoutContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    /// Computes a fresh layout for `dataset`.
    ///
    /// Unscheduled events are passed through to [`Layout::unscheduled`]
    /// without taking part in any stage.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::EmptyDataset`] if there is no scheduled event.
    /// - [`LayoutError::DegenerateDomain`] if the plot area or the padded
    ///   time domain has no usable extent.
    /// - [`LayoutError::DateOutOfRange`] if deconfliction moves a date out
    ///   of the representable range.
    pub fn run(&self, dataset: &Dataset) -> Result<Layout, LayoutError> {
        let ctx = &self.context;

        if dataset.is_empty() {
            return Err(LayoutError::EmptyDataset);
        }
        ctx.validate()?;

        for event in dataset.unscheduled() {
            warn!(event_id:% = event.id(); "Unscheduled event left out of the layout");
        }

        info!(events_count = dataset.events().len(); "Computing layout");

        let events = deconflict::deconflict(dataset.events().to_vec(), ctx)?;
        let time_scale = time_domain(&events, ctx)?;
        debug!(
            domain_start:% = time_scale.start(),
            domain_end:% = time_scale.end();
            "Time domain computed"
        );

        let actors = actors::extract_actors(&events);
        let graph = CoOccurrenceGraph::from_events(&events);
        let ordered = ordering::order_actors(actors, &graph, ctx);
        let lanes = partition::partition(ordered);

        let layout = projection::project(
            lanes,
            &events,
            time_scale,
            ctx.plot_size(),
            dataset.unscheduled().to_vec(),
        );

        info!(
            lanes_count = layout.lanes().len(),
            events_count = layout.events().len();
            "Layout computed"
        );
        Ok(layout)
    }
}

/// Builds the padded time scale over the deconflicted events.
fn time_domain(events: &[Event], ctx: &LayoutContext) -> Result<TimeScale, LayoutError> {
    let (Some(first), Some(last)) = (
        events.iter().map(Event::date).min(),
        events.iter().map(Event::date).max(),
    ) else {
        return Err(LayoutError::EmptyDataset);
    };

    TimeScale::padded(
        first,
        last,
        ctx.config().domain_padding_months(),
        ctx.plot_size().width(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use paoh_core::{
        event::{Timestamp, UnscheduledEvent},
        geometry::Size,
        identifier::ActorId,
    };

    use super::*;
    use crate::config::LayoutConfig;

    fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn engine(size: Size) -> LayoutEngine {
        LayoutEngine::new(LayoutContext::new(LayoutConfig::default(), size))
    }

    #[test]
    fn test_empty_dataset() {
        let err = engine(Size::new(100.0, 100.0)).run(&Dataset::default()).unwrap_err();
        assert_eq!(err, LayoutError::EmptyDataset);
    }

    #[test]
    fn test_only_unscheduled_is_empty() {
        let dataset = Dataset::new(
            Vec::new(),
            vec![UnscheduledEvent::new("p", "t", [ActorId::new("a")], Some("soon".into()))],
        );
        let err = engine(Size::new(100.0, 100.0)).run(&dataset).unwrap_err();
        assert_eq!(err, LayoutError::EmptyDataset);
    }

    #[test]
    fn test_degenerate_plot_area() {
        let dataset = Dataset::from_events(vec![Event::new(
            "p",
            ymd(2020, 1, 1),
            "t",
            [ActorId::new("a")],
        )]);
        let err = engine(Size::new(0.0, 100.0)).run(&dataset).unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateDomain(_)));
    }

    #[test]
    fn test_single_event_has_padded_domain() {
        let dataset = Dataset::from_events(vec![Event::new(
            "p",
            ymd(2020, 1, 10),
            "t",
            [ActorId::new("a")],
        )]);
        let layout = engine(Size::new(100.0, 100.0)).run(&dataset).unwrap();

        assert_eq!(layout.domain(), (ymd(2019, 12, 10), ymd(2020, 2, 10)));
        assert!((layout.events()[0].x() - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_unscheduled_passed_through() {
        let dataset = Dataset::new(
            vec![Event::new("p1", ymd(2020, 1, 1), "t", [ActorId::new("a")])],
            vec![UnscheduledEvent::new("p2", "t", [ActorId::new("b")], None)],
        );
        let layout = engine(Size::new(100.0, 100.0)).run(&dataset).unwrap();

        assert_eq!(layout.unscheduled().len(), 1);
        assert!(layout.lane(ActorId::new("b")).is_none());
    }
}
