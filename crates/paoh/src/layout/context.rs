//! Per-run layout context.

use paoh_core::geometry::Size;

use crate::{config::LayoutConfig, layout::LayoutError};

/// Everything a layout stage needs besides its input data.
///
/// Owned by the caller and passed by reference to each stage; there is no
/// global rendering state.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    config: LayoutConfig,
    plot_size: Size,
}

impl LayoutContext {
    pub fn new(config: LayoutConfig, plot_size: Size) -> Self {
        Self { config, plot_size }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Size of the plot area that coordinates are projected into.
    pub fn plot_size(&self) -> Size {
        self.plot_size
    }

    /// Checks that the plot area has a finite, positive extent.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DegenerateDomain`] otherwise.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.plot_size.is_drawable() {
            Ok(())
        } else {
            Err(LayoutError::DegenerateDomain(format!(
                "plot area {}x{} is not drawable",
                self.plot_size.width(),
                self.plot_size.height()
            )))
        }
    }
}
