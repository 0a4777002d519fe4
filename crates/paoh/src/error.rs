//! Error types for PAOH operations.
//!
//! [`PaohError`] wraps every failure a [`PlotBuilder`](crate::PlotBuilder)
//! can report, from reading rows to writing the finished SVG.

use std::io;

use thiserror::Error;

use paoh_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for PAOH operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// callers can point at the offending line.
#[derive(Debug, Error)]
pub enum PaohError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for PaohError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl PaohError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use paoh_parser::error::{Diagnostic, ErrorCode};

    use super::*;

    #[test]
    fn test_layout_error_conversion() {
        let err: PaohError = LayoutError::EmptyDataset.into();
        assert!(matches!(err, PaohError::Layout(LayoutError::EmptyDataset)));
        assert!(err.to_string().starts_with("Layout error: "));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let diag = Diagnostic::error("invalid JSON").with_code(ErrorCode::E001);
        let err = PaohError::new_parse_error(diag.into(), "[");

        let PaohError::Parse { src, .. } = &err else {
            panic!("expected parse error");
        };
        assert_eq!(src, "[");
        assert_eq!(err.to_string(), "error[E001]: invalid JSON");
    }

    #[test]
    fn test_export_error_conversion() {
        let err: PaohError = crate::export::Error::Render("bad color".into()).into();
        assert!(matches!(err, PaohError::Export(_)));
        assert!(err.to_string().contains("bad color"));
    }
}
