//! SVG export backend.
//!
//! [`SvgBuilder`] resolves the style configuration into an [`Svg`]
//! renderer. The renderer draws a [`Layout`] into a document of the
//! configured canvas size, with the plot area translated by the canvas
//! margins:
//!
//! - [`axis`] - time axis along the top edge with month ticks
//! - [`plot`] - lanes, actor labels, event spans and markers
//!
//! Output is grouped into layers so that markers always cover spans and
//! spans cover lanes.

mod axis;
mod plot;

use std::io::Write;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use paoh_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    event::Timestamp,
    geometry::{Insets, Size},
};

use crate::{
    config::{CanvasConfig, StyleConfig},
    export::{self, Exporter},
    layout::Layout,
};

/// Hover text for spans and markers: the title and the `M/D/YYYY` date.
fn tooltip(title: &str, date: Timestamp) -> String {
    format!("{title}\nDate: {}", date.format("%-m/%-d/%Y"))
}

/// SVG renderer with resolved styling.
#[derive(Debug, Clone)]
pub struct Svg {
    size: Size,
    margins: Insets,
    background: Option<Color>,
    lane_stroke: StrokeDefinition,
    span_stroke: StrokeDefinition,
    marker_stroke: StrokeDefinition,
    marker_fill: Color,
    marker_radius: f32,
    axis_stroke: StrokeDefinition,
    font_family: String,
    label_font_size: f32,
    axis_font_size: f32,
    label_gap: f32,
    tick_interval_months: u32,
}

impl Svg {
    /// Renders the layout to an SVG document.
    pub fn render_layout(&self, layout: &Layout) -> Document {
        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", self.size.width(), self.size.height()),
            )
            .set("width", self.size.width())
            .set("height", self.size.height());

        let mut output = LayeredOutput::new();
        if let Some(background) = &self.background {
            output.add_to_layer(RenderLayer::Background, self.render_background(background));
        }
        output.merge(self.render_axis(layout));
        output.merge(self.render_lanes(layout));
        output.merge(self.render_events(layout));

        let mut plot_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                self.margins.left(),
                self.margins.top()
            ),
        );
        for node in output.render() {
            plot_group = plot_group.add(node);
        }

        debug!(
            width = self.size.width(),
            height = self.size.height();
            "SVG document rendered"
        );
        doc.add(plot_group)
    }

    /// Covers the whole canvas; drawn inside the translated plot group.
    fn render_background(&self, color: &Color) -> Box<dyn svg::Node> {
        Box::new(
            svg_element::Rectangle::new()
                .set("x", -self.margins.left())
                .set("y", -self.margins.top())
                .set("width", self.size.width())
                .set("height", self.size.height())
                .set("fill", color),
        )
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout, writer: &mut dyn Write) -> Result<(), export::Error> {
        let doc = self.render_layout(layout);
        write!(writer, "{doc}")?;
        info!(lanes_count = layout.lanes().len(); "SVG written");
        Ok(())
    }
}

/// Builder resolving configuration into an [`Svg`] renderer.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    canvas: Option<&'a CanvasConfig>,
    style: Option<&'a StyleConfig>,
    tick_interval_months: Option<u32>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(mut self, canvas: &'a CanvasConfig) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Months between axis ticks; 0 disables ticks.
    pub fn with_tick_interval(mut self, months: u32) -> Self {
        self.tick_interval_months = Some(months);
        self
    }

    /// Builds the renderer, falling back to defaults for unset sections.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_canvas = CanvasConfig::default();
        let default_style = StyleConfig::default();
        let canvas = self.canvas.unwrap_or(&default_canvas);
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            size: canvas.size(),
            margins: canvas.margins(),
            background: style.background_color().map_err(export::Error::Render)?,
            lane_stroke: StrokeDefinition::solid(
                style.lane_color().map_err(export::Error::Render)?,
                style.lane_width(),
            ),
            span_stroke: StrokeDefinition::solid(
                style.span_color().map_err(export::Error::Render)?,
                style.span_width(),
            ),
            marker_stroke: StrokeDefinition::solid(
                style.marker_stroke().map_err(export::Error::Render)?,
                style.marker_stroke_width(),
            ),
            marker_fill: style.marker_fill().map_err(export::Error::Render)?,
            marker_radius: style.marker_radius(),
            axis_stroke: StrokeDefinition::solid(
                style.axis_color().map_err(export::Error::Render)?,
                1.0,
            ),
            font_family: style.font_family().to_string(),
            label_font_size: style.label_font_size(),
            axis_font_size: style.axis_font_size(),
            label_gap: style.label_gap(),
            tick_interval_months: self.tick_interval_months.unwrap_or(3),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use paoh_core::{dataset::Dataset, event::Event, identifier::ActorId};

    use super::*;
    use crate::{
        config::LayoutConfig,
        layout::{LayoutContext, LayoutEngine},
    };

    fn layout() -> Layout {
        let date = Utc.with_ymd_and_hms(2020, 1, 10, 0, 0, 0).unwrap();
        let dataset = Dataset::from_events(vec![
            Event::new("p1", date, "Survey", [ActorId::new("ada"), ActorId::new("grace")]),
            Event::new("p2", date, "Notes", [ActorId::new("linus")]),
        ]);
        let canvas = CanvasConfig::default();
        LayoutEngine::new(LayoutContext::new(LayoutConfig::default(), canvas.plot_size()))
            .run(&dataset)
            .unwrap()
    }

    fn render(layout: &Layout) -> String {
        let svg = SvgBuilder::new().build().unwrap();
        let mut buffer = Vec::new();
        svg.export_layout(layout, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tooltip_format() {
        let date = Utc.with_ymd_and_hms(2020, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(tooltip("Survey", date), "Survey\nDate: 1/5/2020");
    }

    #[test]
    fn test_document_size_and_translation() {
        let output = render(&layout());
        assert!(output.starts_with("<svg"));
        assert!(output.contains(r#"width="1280""#));
        assert!(output.contains("translate(150, 30)"));
    }

    #[test]
    fn test_layers_in_order() {
        let output = render(&layout());
        let position = |layer: &str| {
            output
                .find(&format!(r#"data-layer="{layer}""#))
                .unwrap_or_else(|| panic!("missing layer {layer}"))
        };

        assert!(position("background") < position("axis"));
        assert!(position("axis") < position("lane"));
        assert!(position("lane") < position("span"));
        assert!(position("span") < position("marker"));
        assert!(position("marker") < position("text"));
    }

    #[test]
    fn test_element_counts() {
        let output = render(&layout());
        assert_eq!(output.matches("<circle").count(), 3);
        assert_eq!(output.matches("<title>").count(), 4);
        assert!(output.contains("ada"));
        assert!(output.contains("Jan 2020"));
    }

    #[test]
    fn test_transparent_background() {
        let style = StyleConfig::default().with_background_color(None);
        let svg = SvgBuilder::new().with_style(&style).build().unwrap();
        let doc = svg.render_layout(&layout()).to_string();
        assert!(!doc.contains(r#"data-layer="background""#));
    }

    #[test]
    fn test_invalid_color_fails_build() {
        let style = StyleConfig::default().with_lane_color("nope");
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, export::Error::Render(_)));
    }
}
