//! Row normalization: merges rows into events.
//!
//! Rows sharing an event identifier become one [`Event`]:
//! - actors are the non-blank `PI` cells, de-duplicated in first-seen order
//! - date and title come from the first row of the group
//!
//! Events whose date cannot be read become [`UnscheduledEvent`]s and a
//! warning is recorded; they never abort normalization.

use indexmap::IndexMap;
use log::{debug, warn};

use paoh_core::{
    dataset::Dataset,
    event::{Event, UnscheduledEvent},
    identifier::ActorId,
};

use crate::{
    date::parse_date,
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    row::{Cell, Row},
};

/// A row together with its 1-based position in the input.
pub(crate) type NumberedRow = (usize, Row);

/// Groups rows by event identifier, keeping first-seen order of events.
fn group_rows(
    rows: impl IntoIterator<Item = NumberedRow>,
    collector: &mut DiagnosticCollector,
) -> IndexMap<String, Vec<NumberedRow>> {
    let mut groups: IndexMap<String, Vec<NumberedRow>> = IndexMap::new();

    for (row_number, row) in rows {
        match row.event_key() {
            Some(key) => groups.entry(key).or_default().push((row_number, row)),
            None => collector.emit(
                Diagnostic::warning("row has no `proposal_no` and was skipped")
                    .with_code(ErrorCode::E102)
                    .with_row(row_number)
                    .with_help("every row needs an event identifier"),
            ),
        }
    }

    groups
}

/// Builds one event from its rows.
///
/// Returns `None` when the group names no actor.
fn build_event(
    id: String,
    rows: &[NumberedRow],
    collector: &mut DiagnosticCollector,
) -> Option<Result<Event, UnscheduledEvent>> {
    let (first_row_number, first_row) = rows.first()?;

    let actors: Vec<ActorId> = rows
        .iter()
        .filter_map(|(_, row)| row.actor_name())
        .map(|name| ActorId::new(&name))
        .collect();

    if actors.is_empty() {
        collector.emit(
            Diagnostic::warning(format!("event `{id}` names no actor and was skipped"))
                .with_code(ErrorCode::E103)
                .with_row(*first_row_number)
                .with_help("fill in the `PI` column of at least one of its rows"),
        );
        return None;
    }

    let title = first_row
        .title
        .as_ref()
        .map(Cell::to_text)
        .unwrap_or_default();

    let Some(cell) = first_row.date_submitted.as_ref() else {
        collector.emit(
            Diagnostic::warning(format!("event `{id}` has no `date_submitted`"))
                .with_code(ErrorCode::E101)
                .with_row(*first_row_number)
                .with_help("the event is listed as unscheduled and left out of the plot"),
        );
        return Some(Err(UnscheduledEvent::new(id, title, actors, None)));
    };

    match parse_date(cell) {
        Some(date) => Some(Ok(Event::new(id, date, title, actors))),
        None => {
            let raw = cell.to_text();
            collector.emit(
                Diagnostic::warning(format!(
                    "date `{raw}` of event `{id}` is not a recognizable date"
                ))
                .with_code(ErrorCode::E100)
                .with_row(*first_row_number)
                .with_help("use YYYY-MM-DD, MM/DD/YYYY or a spreadsheet serial number"),
            );
            Some(Err(UnscheduledEvent::new(id, title, actors, Some(raw))))
        }
    }
}

/// Normalizes numbered rows into a dataset, reporting problems to `collector`.
pub(crate) fn normalize_rows(
    rows: impl IntoIterator<Item = NumberedRow>,
    collector: &mut DiagnosticCollector,
) -> Dataset {
    let groups = group_rows(rows, collector);
    debug!(groups_count = groups.len(); "Rows grouped by event identifier");

    let mut events = Vec::new();
    let mut unscheduled = Vec::new();

    for (id, rows) in groups {
        match build_event(id, &rows, collector) {
            Some(Ok(event)) => events.push(event),
            Some(Err(event)) => {
                warn!(event_id:% = event.id(); "Event left unscheduled");
                unscheduled.push(event);
            }
            None => {}
        }
    }

    debug!(
        events_count = events.len(),
        unscheduled_count = unscheduled.len();
        "Rows normalized"
    );

    Dataset::new(events, unscheduled)
}


#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec((0u8..6, 0u8..4), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(event, actor)| {
                    Row::new(
                        format!("E{event}").as_str(),
                        format!("A{actor}").as_str(),
                        "2020-01-10",
                        "t",
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn one_event_per_distinct_identifier(rows in arb_rows()) {
            let distinct: HashSet<_> = rows.iter().filter_map(Row::event_key).collect();

            let mut collector = DiagnosticCollector::new();
            let numbered = rows.into_iter().enumerate().map(|(i, r)| (i + 1, r));
            let dataset = normalize_rows(numbered, &mut collector);

            prop_assert_eq!(dataset.events().len(), distinct.len());
            for event in dataset.events() {
                let unique: HashSet<_> = event.actors().iter().collect();
                prop_assert_eq!(unique.len(), event.actors().len());
            }
        }
    }
}
