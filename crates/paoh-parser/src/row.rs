//! Spreadsheet rows as exported to JSON.

use serde::Deserialize;

/// A single spreadsheet cell.
///
/// Spreadsheet exports write numbers (including serial dates) as JSON
/// numbers and everything else as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Returns the cell rendered as text.
    ///
    /// Integral numbers print without a fractional part, so an identifier
    /// stored as `1023` reads back as `"1023"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                format!("{}", *value as i64)
            }
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.trim().to_string(),
        }
    }

    /// Returns `true` for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(text) if text.trim().is_empty())
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// One input row: one actor's participation in one event.
///
/// Unknown columns are ignored. Missing and `null` cells read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Row {
    /// Event identifier; rows sharing it form one event.
    #[serde(default)]
    pub proposal_no: Option<Cell>,

    /// The actor named by this row.
    #[serde(default, rename = "PI")]
    pub pi: Option<Cell>,

    /// Event date: a date string or a spreadsheet serial number.
    #[serde(default)]
    pub date_submitted: Option<Cell>,

    #[serde(default)]
    pub title: Option<Cell>,
}

impl Row {
    /// Creates a row with every cell present.
    pub fn new(
        proposal_no: impl Into<Cell>,
        pi: impl Into<Cell>,
        date_submitted: impl Into<Cell>,
        title: impl Into<Cell>,
    ) -> Self {
        Self {
            proposal_no: Some(proposal_no.into()),
            pi: Some(pi.into()),
            date_submitted: Some(date_submitted.into()),
            title: Some(title.into()),
        }
    }

    /// The event identifier, if present and not blank.
    pub(crate) fn event_key(&self) -> Option<String> {
        self.proposal_no
            .as_ref()
            .filter(|cell| !cell.is_blank())
            .map(Cell::to_text)
    }

    /// The actor name, if present and not blank.
    pub(crate) fn actor_name(&self) -> Option<String> {
        self.pi
            .as_ref()
            .filter(|cell| !cell.is_blank())
            .map(Cell::to_text)
    }
}
