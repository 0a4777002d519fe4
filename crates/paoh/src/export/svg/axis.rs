//! Time axis along the top edge of the plot area.

use svg::node::element as svg_element;

use paoh_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer},
};

use super::Svg;
use crate::layout::Layout;

/// Length of a tick mark, pointing up from the axis line.
const TICK_SIZE: f32 = 6.0;

impl Svg {
    /// Renders the axis line plus one labelled tick per `%b %Y` month.
    pub(super) fn render_axis(&self, layout: &Layout) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let scale = layout.time_scale();

        let domain = svg_element::Line::new()
            .set("x1", 0)
            .set("y1", 0)
            .set("x2", scale.width())
            .set("y2", 0);
        output.add_to_layer(
            RenderLayer::Axis,
            Box::new(apply_stroke!(domain, &self.axis_stroke)),
        );

        for tick in scale.ticks(self.tick_interval_months) {
            let x = scale.apply(tick);

            let mark = svg_element::Line::new()
                .set("x1", x)
                .set("y1", 0)
                .set("x2", x)
                .set("y2", -TICK_SIZE);
            output.add_to_layer(
                RenderLayer::Axis,
                Box::new(apply_stroke!(mark, &self.axis_stroke)),
            );

            let label = svg_element::Text::new(tick.format("%b %Y").to_string())
                .set("x", x)
                .set("y", -TICK_SIZE)
                .set("dy", "-0.5em")
                .set("text-anchor", "middle")
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.axis_font_size)
                .set("fill", self.axis_stroke.color().to_string());
            output.add_to_layer(RenderLayer::Axis, Box::new(label));
        }

        output
    }
}
