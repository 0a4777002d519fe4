//! Errors raised by the layout pipeline.

use thiserror::Error;

/// Conditions that stop a layout run before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The dataset holds no scheduled events.
    #[error("no data: the dataset has no events with a usable date")]
    EmptyDataset,

    /// The plot area or the time domain has no usable extent.
    #[error("degenerate plotting domain: {0}")]
    DegenerateDomain(String),

    /// Adjusting a date left the representable date range.
    #[error("date adjustment for event `{event_id}` is out of range")]
    DateOutOfRange { event_id: String },
}

impl LayoutError {
    pub(crate) fn date_out_of_range(event_id: impl ToString) -> Self {
        Self::DateOutOfRange {
            event_id: event_id.to_string(),
        }
    }
}
