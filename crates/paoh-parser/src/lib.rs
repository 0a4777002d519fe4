//! Spreadsheet row normalizer for PAOH timeline plots.
//!
//! Input is a JSON array of row objects, one per actor participation:
//!
//! ```json
//! [
//!   {"proposal_no": "P-1", "PI": "Ada", "date_submitted": "2020-01-10", "title": "Engines"},
//!   {"proposal_no": "P-1", "PI": "Charles", "date_submitted": "2020-01-10", "title": "Engines"}
//! ]
//! ```
//!
//! [`parse`] turns it into a [`Dataset`] of events. Structural problems
//! (invalid JSON, a row that is not an object) fail the whole parse with a
//! [`ParseError`](error::ParseError); problems confined to one event are
//! reported as warnings and the rest of the data is kept.
//!
//! # Example
//!
//! ```
//! let source = r#"[
//!     {"proposal_no": "P-1", "PI": "Ada", "date_submitted": "2020-01-10", "title": "Engines"},
//!     {"proposal_no": "P-1", "PI": "Charles", "date_submitted": "2020-01-10", "title": "Engines"}
//! ]"#;
//!
//! let parsed = paoh_parser::parse(source).unwrap();
//! assert_eq!(parsed.dataset().events().len(), 1);
//! assert_eq!(parsed.dataset().events()[0].actors().len(), 2);
//! ```

pub mod date;
pub mod error;
mod normalize;
mod row;

use log::{debug, info, trace};
use serde_json::Value;

use paoh_core::dataset::Dataset;

use error::{Diagnostic, DiagnosticCollector, ErrorCode, Location, ParseError};

pub use row::{Cell, Row};

/// The outcome of a successful parse: the dataset plus any warnings.
#[derive(Debug, Clone)]
pub struct Parsed {
    dataset: Dataset,
    warnings: Vec<Diagnostic>,
}

impl Parsed {
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Non-fatal problems found in the input, in row order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Dataset, Vec<Diagnostic>) {
        (self.dataset, self.warnings)
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

/// Parses a JSON row export into a dataset.
///
/// # Errors
///
/// Returns [`ParseError`] when the source is not valid JSON
/// ([`ErrorCode::E001`]), is not an array ([`ErrorCode::E002`]), or holds a
/// row that is not an object of string, number or `null` cells
/// ([`ErrorCode::E003`]). Every bad row is reported, not just the first.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    info!(source_len = source.len(); "Parsing row export");

    let value: Value = serde_json::from_str(source).map_err(|err| {
        Diagnostic::error(format!("invalid JSON: {err}"))
            .with_code(ErrorCode::E001)
            .with_location(Location::new(err.line(), err.column()))
    })?;

    let Value::Array(items) = value else {
        return Err(Diagnostic::error("expected a JSON array of rows")
            .with_code(ErrorCode::E002)
            .with_help("export the sheet as an array of objects, one per row")
            .into());
    };
    debug!(rows_count = items.len(); "Row array read");

    let mut collector = DiagnosticCollector::new();
    let mut rows = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let row_number = index + 1;
        match serde_json::from_value::<Row>(item) {
            Ok(row) => {
                trace!(row_number = row_number, row:? = row; "Row decoded");
                rows.push((row_number, row));
            }
            Err(err) => collector.emit(
                Diagnostic::error(format!("invalid row: {err}"))
                    .with_code(ErrorCode::E003)
                    .with_row(row_number)
                    .with_help("cells must be strings, numbers or null"),
            ),
        }
    }

    let dataset = normalize::normalize_rows(rows, &mut collector);
    let warnings = collector.finish()?;

    info!(
        events_count = dataset.events().len(),
        unscheduled_count = dataset.unscheduled().len(),
        warnings_count = warnings.len();
        "Row export parsed"
    );

    Ok(Parsed { dataset, warnings })
}

/// Normalizes already-decoded rows into a dataset.
///
/// Rows are numbered from 1 in iteration order for diagnostics. This never
/// fails: every problem it can find is confined to one event.
pub fn normalize(rows: impl IntoIterator<Item = Row>) -> Parsed {
    let mut collector = DiagnosticCollector::new();
    let numbered = rows.into_iter().enumerate().map(|(i, row)| (i + 1, row));
    let dataset = normalize::normalize_rows(numbered, &mut collector);

    // Normalization only emits warnings.
    let warnings = collector
        .finish()
        .map_or_else(|err| err.diagnostics().to_vec(), |warnings| warnings);

    Parsed { dataset, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("[{").unwrap_err();
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert_eq!(diag.location().map(|l| l.line()), Some(1));
    }

    #[test]
    fn test_parse_not_an_array() {
        let err = parse(r#"{"rows": []}"#).unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
    }

    #[test]
    fn test_parse_reports_every_invalid_row() {
        let err = parse(r#"[1, {"proposal_no": "P1", "PI": "a"}, "x"]"#).unwrap_err();
        let rows: Vec<_> = err
            .diagnostics()
            .iter()
            .filter(|d| d.code() == Some(ErrorCode::E003))
            .filter_map(Diagnostic::row)
            .collect();
        assert_eq!(rows, vec![1, 3]);
    }

    #[test]
    fn test_parse_empty_array() {
        let parsed = parse("[]").unwrap();
        assert!(parsed.dataset().is_empty());
        assert!(parsed.warnings().is_empty());
    }

    #[test]
    fn test_normalize_rows_directly() {
        let parsed = normalize(vec![
            Row::new("P1", "alice", "2020-01-10", "t"),
            Row::new("P1", "bob", "2020-01-10", "t"),
        ]);
        let (dataset, warnings) = parsed.into_parts();
        assert_eq!(dataset.events()[0].actors().len(), 2);
        assert!(warnings.is_empty());
    }
}
