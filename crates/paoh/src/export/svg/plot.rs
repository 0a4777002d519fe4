//! Lanes, labels, spans and markers.

use svg::node::element as svg_element;

use paoh_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer},
};

use super::{Svg, tooltip};
use crate::layout::Layout;

impl Svg {
    /// Renders one lane line per actor, labelled left of its start.
    pub(super) fn render_lanes(&self, layout: &Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for lane in layout.lanes() {
            let (start, end) = (lane.start(), lane.end());

            let line = svg_element::Line::new()
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y());
            output.add_to_layer(
                RenderLayer::Lane,
                Box::new(apply_stroke!(line, &self.lane_stroke)),
            );

            let label = svg_element::Text::new(lane.actor().id().name())
                .set("x", start.x() - self.label_gap)
                .set("y", start.y())
                .set("dy", "0.35em")
                .set("text-anchor", "end")
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.label_font_size);
            output.add_to_layer(RenderLayer::Text, Box::new(label));
        }

        output
    }

    /// Renders each event's span (if any) and its per-actor markers.
    pub(super) fn render_events(&self, layout: &Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for event in layout.events() {
            let hover = tooltip(event.title(), event.date());

            if let Some(span) = event.span() {
                let (top, bottom) = (span.top(), span.bottom());
                let line = svg_element::Line::new()
                    .set("x1", top.x())
                    .set("y1", top.y())
                    .set("x2", bottom.x())
                    .set("y2", bottom.y())
                    .add(svg_element::Title::new(hover.as_str()));
                output.add_to_layer(
                    RenderLayer::Span,
                    Box::new(apply_stroke!(line, &self.span_stroke)),
                );
            }

            for (_, point) in event.points() {
                let marker = svg_element::Circle::new()
                    .set("cx", point.x())
                    .set("cy", point.y())
                    .set("r", self.marker_radius)
                    .set("fill", &self.marker_fill)
                    .add(svg_element::Title::new(hover.as_str()));
                output.add_to_layer(
                    RenderLayer::Marker,
                    Box::new(apply_stroke!(marker, &self.marker_stroke)),
                );
            }
        }

        output
    }
}
