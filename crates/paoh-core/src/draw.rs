//! SVG drawing primitives shared by renderers.
//!
//! - [`RenderLayer`] / [`LayeredOutput`]: z-ordered collection of SVG nodes
//! - [`StrokeDefinition`]: stroke color and width, applied with
//!   [`apply_stroke!`](crate::apply_stroke!)

mod layer;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::StrokeDefinition;
