//! Persisted filter record format tests
//!
//! The record layout must stay compatible with what earlier page sessions
//! wrote: `{"areas":[...],"centros":[...],"logs":[...],"query":"..."}`.

use alegre_common::filter::FilterState;

#[test]
fn parses_record_written_by_a_previous_session() {
    let raw = r#"{"areas":["musica","teatro"],"centros":["norte"],"logs":[],"query":"luz"}"#;
    let state = FilterState::from_json(raw).unwrap();

    assert!(state.areas.contains("musica"));
    assert!(state.areas.contains("teatro"));
    assert!(state.centros.contains("norte"));
    assert!(state.logs.is_empty());
    assert_eq!(state.query, "luz");
}

#[test]
fn missing_fields_default_instead_of_failing() {
    let state = FilterState::from_json(r#"{"areas":["luces"]}"#).unwrap();
    assert!(state.areas.contains("luces"));
    assert!(state.query.is_empty());
}

#[test]
fn structurally_corrupt_records_fail_parsing() {
    assert!(FilterState::from_json("not json at all").is_err());
    assert!(FilterState::from_json(r#"{"areas":"musica"}"#).is_err());
    assert!(FilterState::from_json("null").is_err());
}

#[test]
fn round_trip_preserves_state() {
    let mut state = FilterState::default();
    state.areas.insert("plastica".to_string());
    state.logs.insert("semana2".to_string());
    state.query = "ensayo".to_string();

    let json = state.to_json().unwrap();
    assert_eq!(FilterState::from_json(&json).unwrap(), state);
}
