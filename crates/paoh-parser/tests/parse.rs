use chrono::{TimeZone, Utc};

use paoh_core::identifier::ActorId;
use paoh_parser::{error::ErrorCode, parse};

#[test]
fn test_grant_export() {
    let source = r#"[
        {"proposal_no": 1001, "PI": "Ada", "date_submitted": "2020-01-10", "title": "Engines"},
        {"proposal_no": 1001, "PI": "Charles", "date_submitted": "2020-01-10", "title": "Engines"},
        {"proposal_no": 1002, "PI": "Grace", "date_submitted": 43870, "title": "Compilers"},
        {"proposal_no": 1003, "PI": "Ada", "date_submitted": "03/15/2020", "title": "Notes", "status": "funded"}
    ]"#;

    let parsed = parse(source).expect("Failed to parse");
    assert!(parsed.warnings().is_empty());

    let events = parsed.dataset().events();
    assert_eq!(events.len(), 3);

    assert_eq!(events[0].id().as_str(), "1001");
    assert_eq!(
        events[0].actors(),
        &[ActorId::new("Ada"), ActorId::new("Charles")]
    );
    assert!(events[0].is_multi_actor());

    // Serial 43870 is 30 days after 2020-01-10.
    assert_eq!(
        events[1].date(),
        Utc.with_ymd_and_hms(2020, 2, 9, 0, 0, 0).unwrap()
    );
    assert_eq!(
        events[2].date(),
        Utc.with_ymd_and_hms(2020, 3, 15, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_partial_data_keeps_good_events() {
    let source = r#"[
        {"proposal_no": "A", "PI": "Ada", "date_submitted": "2020-01-10", "title": "ok"},
        {"proposal_no": "B", "PI": "Grace", "date_submitted": "pending", "title": "bad date"},
        {"PI": "Linus", "date_submitted": "2020-01-10", "title": "no id"},
        {"proposal_no": "C", "PI": "", "date_submitted": "2020-01-10", "title": "no actor"}
    ]"#;

    let parsed = parse(source).expect("Failed to parse");

    let codes: Vec<_> = parsed.warnings().iter().filter_map(|w| w.code()).collect();
    assert_eq!(codes, vec![ErrorCode::E102, ErrorCode::E100, ErrorCode::E103]);

    let dataset = parsed.dataset();
    assert_eq!(dataset.events().len(), 1);
    assert_eq!(dataset.unscheduled().len(), 1);
    assert_eq!(dataset.unscheduled()[0].title(), "bad date");
}

#[test]
fn test_invalid_rows_fail_the_parse() {
    let err = parse(r#"[{"proposal_no": [1, 2]}]"#).unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E003));
    assert_eq!(err.diagnostics()[0].row(), Some(1));
}

#[test]
fn test_parse_error_message_mentions_first_error() {
    let err = parse("not json").unwrap_err();
    assert!(err.to_string().starts_with("error[E001]: invalid JSON"));
}
