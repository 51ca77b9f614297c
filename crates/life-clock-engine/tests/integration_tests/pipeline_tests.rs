//! End-to-end pipeline tests: catalog answers through report
//! composition, reference round-trips, byte-identical determinism.

use life_clock_core::types::{EnergyType, LifeStage};
use life_clock_engine::report::{compose_report, ReportComposer};

use super::helpers::{answered_session, session_from_totals};

#[test]
fn test_round_trip_uniform_twenty() {
    let report = compose_report(&session_from_totals(&[20; 10])).unwrap();

    assert_eq!(report.life_index.life_index, 67);
    assert_eq!(report.life_index.stage, LifeStage::Alchemist);
    assert_eq!(
        report.summary.stage,
        "The Alchemist — shaping inner mastery."
    );
    for axis in EnergyType::ALL {
        assert_eq!(report.profile.averages.get(axis), 20.0);
    }
    assert_eq!(report.profile.dominant, EnergyType::Mind);

    // All-equal totals: stable sort order decides the extremes.
    assert_eq!(report.forces.shadow.phase.id, 1);
    assert_eq!(report.forces.fear.phase.id, 2);
    assert_eq!(report.forces.power.phase.id, 10);

    assert_eq!(report.revelations.len(), 47);
    assert_eq!(report.life_curve.len(), 10);
}

#[test]
fn test_full_quiz_to_report_through_catalog() {
    // Answer the real catalog end to end with the best options.
    let results = {
        use life_clock_core::types::PhaseAnswer;
        use life_clock_engine::phases::phase;
        (1..=10u8)
            .map(|id| {
                let definition = phase(id).unwrap();
                let answers: Vec<PhaseAnswer> = definition
                    .questions
                    .iter()
                    .map(|question| {
                        let top = question
                            .options
                            .iter()
                            .max_by_key(|option| option.value)
                            .unwrap();
                        PhaseAnswer::new(top.value, top.feedback)
                    })
                    .collect();
                definition.evaluate(&answers)
            })
            .collect::<Vec<_>>()
    };

    let report = compose_report(&results).unwrap();
    assert_eq!(report.life_index.life_index, 100);
    assert_eq!(report.life_index.stage, LifeStage::Luminary);
    assert_eq!(report.profile.dominant, EnergyType::Mind);
    assert!(report.destiny.contains("full power"));
    for point in &report.life_curve {
        assert_eq!(point.value, 100);
    }
}

#[test]
fn test_catalog_column_sessions_compose() {
    // Every uniform option column produces a complete, coherent report.
    for option_index in 0..4 {
        let results = answered_session(option_index);
        let report = compose_report(&results).unwrap();
        assert_eq!(report.revelations.len(), 47);
        assert_eq!(report.life_curve.len(), 10);
        assert!(!report.destiny.is_empty());
        assert!(!report.summary.archetype_name.is_empty());
    }
}

#[test]
fn test_report_is_byte_identical_across_runs() {
    let results = session_from_totals(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);

    let first = serde_json::to_string(&compose_report(&results).unwrap()).unwrap();
    let second = serde_json::to_string(&compose_report(&results).unwrap()).unwrap();
    assert_eq!(first, second);

    // A long-lived composer behaves identically to throwaway ones.
    let composer = ReportComposer::new();
    let third = serde_json::to_string(&composer.compose(&results).unwrap()).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_destiny_matches_dominant_energy_and_index() {
    let report = compose_report(&session_from_totals(&[30; 10])).unwrap();
    // Uniform maximum: Mind dominant by tie-break, index 100.
    assert!(report.destiny.contains("through understanding"));
    assert!(report.destiny.contains("full power"));

    let low = compose_report(&session_from_totals(&[6; 10])).unwrap();
    assert!(low.destiny.contains("winding up"));
}

#[test]
fn test_summary_consistent_with_report_fields() {
    let report = compose_report(&session_from_totals(&[20; 10])).unwrap();
    assert_eq!(report.summary.score, report.life_index.life_index);
    assert_eq!(report.summary.dominant_energy, report.profile.dominant);
    assert_eq!(report.archetype, report.summary.archetype_name);
    assert_eq!(report.summary.stage, report.life_index.stage.label());
}
