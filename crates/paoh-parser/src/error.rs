//! Error and diagnostic system for the PAOH row normalizer.
//!
//! - Error codes for documentation and searchability
//! - Severity levels: errors abort normalization, warnings are kept on the
//!   resulting [`Dataset`](crate::Dataset)
//! - Row numbers and source locations for context
//! - Diagnostic collector for accumulating multiple problems in one pass
//!
//! # Example
//!
//! ```
//! # use paoh_parser::error::{Diagnostic, ErrorCode};
//! let diag = Diagnostic::warning("date `someday` is not a recognizable date")
//!     .with_code(ErrorCode::E100)
//!     .with_row(12)
//!     .with_help("use YYYY-MM-DD or a spreadsheet serial number");
//! assert!(diag.severity().is_warning());
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use severity::Severity;
