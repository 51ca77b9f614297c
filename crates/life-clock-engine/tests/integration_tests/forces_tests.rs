//! Hidden forces tests: extremal selection, the two-result edge case,
//! precondition errors, and 10x3 narrative table completeness.

use life_clock_core::types::{ForceType, PhaseResult};
use life_clock_engine::error::EngineError;
use life_clock_engine::forces::{analyze_forces, narrative_for};

use super::helpers::session_from_totals;

#[test]
fn test_shadow_fear_power_selection() {
    let results = session_from_totals(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);
    let forces = analyze_forces(&results).unwrap();

    assert_eq!(forces.shadow.phase.id, 1);
    assert_eq!(forces.shadow.score, 5);
    assert_eq!(forces.fear.phase.id, 2);
    assert_eq!(forces.fear.score, 10);
    assert_eq!(forces.power.phase.id, 6);
    assert_eq!(forces.power.score, 30);
}

#[test]
fn test_two_results_fear_equals_power() {
    let results = vec![
        PhaseResult::new(1, "Origins", 5, "A"),
        PhaseResult::new(2, "Learning", 30, "B"),
    ];
    let forces = analyze_forces(&results).unwrap();
    assert_eq!(forces.shadow.phase.id, 1);
    assert_eq!(forces.fear.phase.id, 2);
    assert_eq!(forces.power.phase.id, 2);
}

#[test]
fn test_fewer_than_two_results_is_an_error() {
    let one = vec![PhaseResult::new(1, "Origins", 5, "A")];
    assert!(matches!(
        analyze_forces(&one),
        Err(EngineError::InsufficientPhases {
            required: 2,
            actual: 1
        })
    ));
    assert!(matches!(
        analyze_forces(&[]),
        Err(EngineError::InsufficientPhases {
            required: 2,
            actual: 0
        })
    ));
}

#[test]
fn test_stable_sort_for_equal_totals() {
    let results = session_from_totals(&[20; 10]);
    let forces = analyze_forces(&results).unwrap();
    // Stable ascending sort keeps input order among equals.
    assert_eq!(forces.shadow.phase.id, 1);
    assert_eq!(forces.fear.phase.id, 2);
    assert_eq!(forces.power.phase.id, 10);
}

#[test]
fn test_narrative_table_is_complete_10x3() {
    for phase_id in 1u8..=10 {
        for force in ForceType::ALL {
            let narrative = narrative_for(phase_id, force).unwrap_or_else(|| {
                panic!("missing narrative for phase {} force {}", phase_id, force)
            });
            assert!(!narrative.title.is_empty());
            assert!(!narrative.description.is_empty());
            assert!(!narrative.insight.is_empty());
            assert!(!narrative.action.is_empty());
        }
    }
}

#[test]
fn test_out_of_domain_phase_id_fails_hard() {
    let results = vec![
        PhaseResult::new(1, "Origins", 5, "A"),
        PhaseResult::new(11, "Beyond", 30, "B"),
    ];
    assert!(matches!(
        analyze_forces(&results),
        Err(EngineError::UnknownPhase { id: 11 })
    ));
}

#[test]
fn test_forces_carry_phase_snapshot() {
    let results = session_from_totals(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);
    let forces = analyze_forces(&results).unwrap();
    assert_eq!(forces.shadow.phase.title, "Origins");
    assert_eq!(forces.shadow.phase.total, forces.shadow.score);
    assert_eq!(forces.power.force, ForceType::Power);
}
