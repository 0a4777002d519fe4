//! Stroke definitions.
//!
//! - [`StrokeDefinition`]: stroke color and width
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! ```
//! use paoh_core::{apply_stroke, color::Color, draw::StrokeDefinition};
//! use svg::node::element::Line;
//!
//! let lane = StrokeDefinition::solid(Color::new("#ccc").unwrap(), 2.0);
//! let line = apply_stroke!(Line::new().set("x1", 0).set("x2", 100), &lane);
//! ```

use crate::color::Color;

/// A solid stroke for lines and outlines.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-opacity` and `stroke-width`. The color's alpha
/// goes to `stroke-opacity` only.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().with_alpha(1.0).to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}
