//! Error adapter for converting PaohError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`paoh_parser::error::ParseError`] contains multiple diagnostics,
//! each diagnostic is rendered independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use paoh::PaohError;
use paoh_parser::error::{Diagnostic, Location};

/// Adapter for a single row diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.row() {
            Some(row) => write!(f, "{} (row {row})", self.diag.message()),
            None => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(format!("paoh::parse::{c}")) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_warning() {
            Some(miette::Severity::Warning)
        } else {
            Some(miette::Severity::Error)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let location = self.diag.location()?;
        let span = location_to_miette(self.src, location);
        let label = self.diag.code().map(|code| code.description().to_string());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(label, span),
        )))
    }
}

/// Adapter for non-diagnostic [`PaohError`] variants.
///
/// This adapter handles errors that don't carry row diagnostics, such as
/// I/O errors, layout errors and export errors.
pub struct ErrorAdapter<'a>(pub &'a PaohError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PaohError::Io(_) => "paoh::io",
            PaohError::Parse { .. } => return None,
            PaohError::Layout(_) => "paoh::layout",
            PaohError::Export(_) => "paoh::export",
            PaohError::Config(_) => "paoh::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PaohError::Layout(paoh::layout::LayoutError::EmptyDataset) => {
                "the input has no row with a usable `proposal_no`, `PI` and `date_submitted`"
            }
            PaohError::Layout(paoh::layout::LayoutError::DegenerateDomain(_)) => {
                "check the canvas size and margins"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A row diagnostic pointing into the input.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a 1-based line and column into a one-character [`SourceSpan`].
///
/// Positions past the end of a line or of the source clamp to its end.
fn location_to_miette(src: &str, location: Location) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(location.line().saturating_sub(1))
        .map(str::len)
        .sum();
    let line_len = src[line_start..].find('\n').unwrap_or(src.len() - line_start);
    let mut offset = line_start + location.column().saturating_sub(1).min(line_len);
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::new(offset.into(), len)
}

/// Convert a [`PaohError`] into a list of reportable errors.
///
/// For [`PaohError::Parse`], this returns one [`Reportable`] for each
/// diagnostic in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &PaohError) -> Vec<Reportable<'_>> {
    match err {
        PaohError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Wrap parse warnings so they can be rendered like errors.
pub fn warning_reportables<'a>(warnings: &'a [Diagnostic], src: &'a str) -> Vec<Reportable<'a>> {
    warnings
        .iter()
        .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
        .collect()
}

#[cfg(test)]
mod tests {
    use paoh::layout::LayoutError;
    use paoh_parser::error::{ErrorCode, ParseError};

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("invalid JSON")
            .with_code(ErrorCode::E001)
            .with_location(Location::new(1, 2))
            .with_help("check the brackets");
        let err = PaohError::new_parse_error(ParseError::from(diag), "[{");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].to_string(), "invalid JSON");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()),
            Some("paoh::parse::E001".to_string())
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("row is not an object")
                .with_code(ErrorCode::E003)
                .with_row(1),
            Diagnostic::error("row is not an object")
                .with_code(ErrorCode::E003)
                .with_row(4),
        ];
        let err = PaohError::new_parse_error(ParseError::new(diags), "[1, {}, {}, 2]");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "row is not an object (row 1)");
        assert_eq!(reportables[1].to_string(), "row is not an object (row 4)");
    }

    #[test]
    fn test_non_parse_error() {
        let err = PaohError::Layout(LayoutError::EmptyDataset);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert!(e.to_string().starts_with("Layout error: "));
                assert_eq!(e.code().unwrap().to_string(), "paoh::layout");
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_warning_severity() {
        let warnings = vec![Diagnostic::warning("bad date").with_code(ErrorCode::E100)];
        let reportables = warning_reportables(&warnings, "[]");

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].severity(), Some(miette::Severity::Warning));
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_location_to_span() {
        let src = "[\n  {\"a\": }\n]";
        let span = location_to_miette(src, Location::new(2, 9));
        assert_eq!(span.offset(), 10);
        assert_eq!(span.len(), 1);
        assert_eq!(&src[span.offset()..span.offset() + 1], "}");

        let past_end = location_to_miette(src, Location::new(9, 1));
        assert_eq!(past_end.offset(), src.len());
        assert_eq!(past_end.len(), 0);
    }
}
