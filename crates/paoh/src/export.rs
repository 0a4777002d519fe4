//! Export of projected layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for turning a [`Layout`] into an output format. It is the final stage in
//! the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON rows
//!     ↓ parse
//! Dataset
//!     ↓ layout
//! Layout
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

pub mod svg;

use std::io::Write;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Writes `layout` to `writer` in the backend's format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted, or
    /// [`Error::Io`] if writing fails.
    fn export_layout(&self, layout: &Layout, writer: &mut dyn Write) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`PaohError::Export`](crate::PaohError::Export) at the
/// crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
