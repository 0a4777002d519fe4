//! Temporal deconfliction.
//!
//! Events sharing an exact date would draw on top of each other, and events
//! a day apart are hard to tell apart. Deconfliction runs in two passes:
//!
//! 1. the events are sorted by date, then every group of `n > 1` events on
//!    one date is spread symmetrically around that date, `spread_step`
//!    apart, in input order;
//! 2. one forward sweep over the date-sorted events pushes each event to at
//!    least `min_spacing` after its predecessor.
//!
//! The sweep never revisits earlier events, so a dense cluster can drift
//! arbitrarily far forward.

use chrono::TimeDelta;
use indexmap::IndexMap;
use log::{debug, trace};

use paoh_core::event::{Event, Timestamp};

use crate::layout::{LayoutContext, LayoutError};

const MILLIS_PER_DAY: i64 = 86_400_000;

fn days(count: u32) -> TimeDelta {
    // At most about 3.7e17 ms, well inside the TimeDelta range.
    TimeDelta::milliseconds(i64::from(count) * MILLIS_PER_DAY)
}

fn shift(event: &Event, date: Timestamp, delta: TimeDelta) -> Result<Timestamp, LayoutError> {
    date.checked_add_signed(delta)
        .ok_or_else(|| LayoutError::date_out_of_range(event.id()))
}

/// Spreads each group of same-date events symmetrically around its date.
fn spread_collisions(events: &mut [Event], step: TimeDelta) -> Result<(), LayoutError> {
    let mut groups: IndexMap<Timestamp, Vec<usize>> = IndexMap::new();
    for (index, event) in events.iter().enumerate() {
        groups.entry(event.date()).or_default().push(index);
    }

    let step_ms = step.num_milliseconds();
    for (date, members) in groups.iter().filter(|(_, members)| members.len() > 1) {
        trace!(date:% = date, group_size = members.len(); "Spreading date collision");

        let width_ms = (members.len() as i64 - 1).checked_mul(step_ms);
        for (position, &index) in members.iter().enumerate() {
            let event = &mut events[index];
            let offset = width_ms
                .and_then(|width| (position as i64).checked_mul(step_ms)?.checked_sub(width / 2))
                .and_then(TimeDelta::try_milliseconds)
                .ok_or_else(|| LayoutError::date_out_of_range(event.id()))?;
            let spread = shift(event, *date, offset)?;
            event.reschedule(spread);
        }
    }

    Ok(())
}

/// Pushes each event forward until it is `min_spacing` after its predecessor.
///
/// Expects `events` sorted by date.
fn enforce_min_spacing(events: &mut [Event], min_spacing: TimeDelta) -> Result<usize, LayoutError> {
    let mut moved = 0;
    for i in 1..events.len() {
        let previous = events[i - 1].date();
        let event = &mut events[i];
        if event.date() - previous < min_spacing {
            let pushed = shift(event, previous, min_spacing)?;
            event.reschedule(pushed);
            moved += 1;
        }
    }
    Ok(moved)
}

/// Adjusts event dates so that no two events collide.
///
/// Returns the events sorted by their adjusted date. Events that a spread
/// moves onto another event's instant stay in original date order, then
/// input order.
///
/// # Errors
///
/// Returns [`LayoutError::DateOutOfRange`] if an adjusted date falls outside
/// the representable range.
pub fn deconflict(mut events: Vec<Event>, ctx: &LayoutContext) -> Result<Vec<Event>, LayoutError> {
    let config = ctx.config();

    // Spread results may tie with other dates; ties keep original date order.
    events.sort_by_key(Event::date);
    spread_collisions(&mut events, days(config.spread_step_days()))?;
    events.sort_by_key(Event::date);

    let moved = enforce_min_spacing(&mut events, days(config.min_spacing_days()))?;

    debug!(events_count = events.len(), pushed_count = moved; "Events deconflicted");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use paoh_core::identifier::ActorId;

    use super::*;
    use crate::config::LayoutConfig;

    fn ctx() -> LayoutContext {
        LayoutContext::new(LayoutConfig::default(), paoh_core::geometry::Size::new(100.0, 100.0))
    }

    fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn event(id: &str, date: Timestamp) -> Event {
        Event::new(id, date, id, [ActorId::new(id)])
    }

    fn dates(events: &[Event]) -> Vec<Timestamp> {
        events.iter().map(Event::date).collect()
    }

    #[test]
    fn test_three_on_one_date_spread_five_days() {
        let day = ymd(2020, 1, 10);
        let result = deconflict(
            vec![event("a", day), event("b", day), event("c", day)],
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![ymd(2020, 1, 5), ymd(2020, 1, 10), ymd(2020, 1, 15)]
        );
        let ids: Vec<_> = result.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_pair_spreads_by_half_steps() {
        let day = ymd(2020, 1, 10);
        let result = deconflict(vec![event("a", day), event("b", day)], &ctx()).unwrap();

        let half = TimeDelta::milliseconds(5 * MILLIS_PER_DAY / 2);
        assert_eq!(dates(&result), vec![day - half, day + half]);
    }

    #[test]
    fn test_one_day_apart_pushed_to_three() {
        let result = deconflict(
            vec![event("a", ymd(2020, 1, 10)), event("b", ymd(2020, 1, 11))],
            &ctx(),
        )
        .unwrap();

        assert_eq!(dates(&result), vec![ymd(2020, 1, 10), ymd(2020, 1, 13)]);
    }

    #[test]
    fn test_push_cascades_forward() {
        let result = deconflict(
            vec![
                event("a", ymd(2020, 1, 10)),
                event("b", ymd(2020, 1, 11)),
                event("c", ymd(2020, 1, 12)),
            ],
            &ctx(),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![ymd(2020, 1, 10), ymd(2020, 1, 13), ymd(2020, 1, 16)]
        );
    }

    #[test]
    fn test_unordered_input_is_sorted() {
        let result = deconflict(
            vec![event("late", ymd(2021, 1, 1)), event("early", ymd(2020, 1, 1))],
            &ctx(),
        )
        .unwrap();

        assert_eq!(result[0].id().as_str(), "early");
        assert_eq!(result[1].id().as_str(), "late");
    }

    #[test]
    fn test_spread_tie_keeps_original_date_order() {
        let later = Utc.with_ymd_and_hms(2020, 1, 12, 12, 0, 0).unwrap();
        let result = deconflict(
            vec![
                event("x", later),
                event("g1", ymd(2020, 1, 10)),
                event("g2", ymd(2020, 1, 10)),
            ],
            &ctx(),
        )
        .unwrap();

        let ids: Vec<_> = result.iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2", "x"]);
        assert_eq!(result[1].date(), later);
        assert_eq!(
            result[2].date(),
            Utc.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(deconflict(Vec::new(), &ctx()).unwrap().is_empty());

        let single = deconflict(vec![event("a", ymd(2020, 1, 1))], &ctx()).unwrap();
        assert_eq!(dates(&single), vec![ymd(2020, 1, 1)]);
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = deconflict(
            vec![
                event("a", Timestamp::MAX_UTC),
                event("b", Timestamp::MAX_UTC),
            ],
            &ctx(),
        );

        assert_eq!(
            result.unwrap_err(),
            LayoutError::DateOutOfRange {
                event_id: "b".to_string()
            }
        );
    }

    #[test]
    fn test_custom_spacing() {
        let ctx = LayoutContext::new(
            LayoutConfig::default().with_spacing(2, 7),
            paoh_core::geometry::Size::new(100.0, 100.0),
        );
        let day = ymd(2020, 1, 10);
        let result = deconflict(vec![event("a", day), event("b", day)], &ctx).unwrap();

        assert_eq!(dates(&result), vec![ymd(2020, 1, 9), ymd(2020, 1, 16)]);
    }
}
