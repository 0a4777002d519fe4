//! Layer-based rendering for SVG output.
//!
//! Renderers push SVG nodes tagged with a [`RenderLayer`]; [`LayeredOutput`]
//! emits them grouped by layer so that markers always sit above spans and
//! spans above lane lines, regardless of the order events are visited in.
//!
//! # Example
//!
//! ```
//! # use paoh_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Lane, Box::new(Line::new()));
//!
//! // Lane group first, marker group last.
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Time axis line, ticks and tick labels
    Axis,
    /// Horizontal actor lanes
    Lane,
    /// Vertical connectors of multi-actor events
    Span,
    /// Per-actor event markers
    Marker,
    /// Actor labels
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Axis => "axis",
            Self::Lane => "lane",
            Self::Span => "span",
            Self::Marker => "marker",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all nodes from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g>` element with a `data-layer`
    /// attribute. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Line, Rectangle};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Lane, Box::new(Line::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_layered_output_groups_same_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Marker, Box::new(Circle::new()));

        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_orders_layers_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Span, Box::new(Line::new()));

        let rendered: Vec<String> = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"span\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }
}
