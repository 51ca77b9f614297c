//! Serialized report shape: camelCase keys, stage-as-label, lossless
//! round-trip for the consuming result page / PDF / email surfaces.

use life_clock_core::types::LifeClockFinalReport;
use life_clock_engine::report::compose_report;

use super::helpers::session_from_totals;

#[test]
fn test_report_serializes_camel_case() {
    let report = compose_report(&session_from_totals(&[20; 10])).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"lifeIndex\""));
    assert!(json.contains("\"lifeCurve\""));
    assert!(json.contains("\"dominantEnergy\""));
    assert!(json.contains("\"archetypeName\""));
    assert!(json.contains("\"archetypeEmoji\""));
    assert!(json.contains("\"archetypeMessage\""));
}

#[test]
fn test_stage_serializes_as_full_label() {
    let report = compose_report(&session_from_totals(&[20; 10])).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("The Alchemist — shaping inner mastery."));
}

#[test]
fn test_force_type_tag_is_lowercase() {
    let report = compose_report(&session_from_totals(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["forces"]["shadow"]["type"], "shadow");
    assert_eq!(json["forces"]["power"]["type"], "power");
    assert_eq!(json["forces"]["shadow"]["phase"]["id"], 1);
}

#[test]
fn test_report_round_trips_losslessly() {
    let report = compose_report(&session_from_totals(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]))
        .unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: LifeClockFinalReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_revelation_categories_lowercase_on_wire() {
    let report = compose_report(&session_from_totals(&[20; 10])).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    let revelations = json["revelations"].as_array().unwrap();
    assert_eq!(revelations[0]["category"], "phase");
    assert_eq!(revelations[10]["category"], "energy");
    assert_eq!(revelations[46]["category"], "force");
}
