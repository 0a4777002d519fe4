//! Error codes for the normalizer diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors (the input cannot be read as rows)
//! - `E1xx` - Row errors (a row or event is dropped or flagged)

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Invalid JSON.
    ///
    /// The input is not syntactically valid JSON.
    E001,

    /// Unexpected document shape.
    ///
    /// The top-level JSON value must be an array of row objects.
    E002,

    /// Invalid row.
    ///
    /// A row is not an object, or one of its cells has an unsupported type
    /// (cells must be strings, numbers or null).
    E003,

    // =========================================================================
    // Row Errors (E1xx)
    // =========================================================================
    /// Malformed date.
    ///
    /// The `date_submitted` cell is neither a recognizable date string nor a
    /// numeric spreadsheet serial. The event is kept as unscheduled.
    E100,

    /// Missing date.
    ///
    /// The first row of an event has no `date_submitted` cell. The event is
    /// kept as unscheduled.
    E101,

    /// Missing event identifier.
    ///
    /// A row has no `proposal_no` cell and cannot be grouped; it is skipped.
    E102,

    /// Event without actors.
    ///
    /// None of an event's rows names a `PI`; the event is skipped.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON",
            ErrorCode::E002 => "unexpected document shape",
            ErrorCode::E003 => "invalid row",
            ErrorCode::E100 => "malformed date",
            ErrorCode::E101 => "missing date",
            ErrorCode::E102 => "missing event identifier",
            ErrorCode::E103 => "event without actors",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E103.to_string(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "unexpected document shape");
        assert_eq!(ErrorCode::E100.description(), "malformed date");
    }
}
