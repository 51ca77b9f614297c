//! Hidden forces analysis.
//!
//! Selects the extremal phases of a session (lowest, second-lowest,
//! highest by total) and decorates them with the static force narratives.

mod insights;

pub use insights::{narrative_for, ForceNarrative};

use life_clock_core::types::{ForceType, HiddenForce, HiddenForces, PhaseResult};

use crate::error::{EngineError, EngineResult};

/// Analyze a session's hidden forces.
///
/// Sorts the results ascending by `total` with a stable sort, then takes
/// shadow = first, fear = second, power = last. With exactly two results
/// fear and power resolve to the same phase; that edge case is accepted.
/// Fewer than two results cannot satisfy the fear lookup and return
/// [`EngineError::InsufficientPhases`]; a phase id outside 1..=10 breaks
/// the static narrative lookup and returns [`EngineError::UnknownPhase`].
///
/// # Example
///
/// ```
/// use life_clock_core::types::PhaseResult;
/// use life_clock_engine::forces::analyze_forces;
///
/// let totals = [5, 10, 15, 20, 25, 30, 18, 22, 28, 12];
/// let results: Vec<PhaseResult> = totals
///     .iter()
///     .enumerate()
///     .map(|(i, &t)| PhaseResult::new(i as u8 + 1, "", t, ""))
///     .collect();
///
/// let forces = analyze_forces(&results).unwrap();
/// assert_eq!(forces.shadow.phase.id, 1);
/// assert_eq!(forces.fear.phase.id, 2);
/// assert_eq!(forces.power.phase.id, 6);
/// ```
pub fn analyze_forces(results: &[PhaseResult]) -> EngineResult<HiddenForces> {
    if results.len() < 2 {
        return Err(EngineError::insufficient(2, results.len()));
    }

    let mut sorted: Vec<&PhaseResult> = results.iter().collect();
    // Stable: equal totals keep input order, which pins down the
    // shadow/fear choice for all-equal sessions.
    sorted.sort_by_key(|r| r.total);

    let shadow = build_force(ForceType::Shadow, sorted[0])?;
    let fear = build_force(ForceType::Fear, sorted[1])?;
    let power = build_force(ForceType::Power, sorted[sorted.len() - 1])?;

    Ok(HiddenForces {
        shadow,
        fear,
        power,
    })
}

fn build_force(force: ForceType, phase: &PhaseResult) -> EngineResult<HiddenForce> {
    let narrative =
        narrative_for(phase.id, force).ok_or(EngineError::UnknownPhase { id: phase.id })?;
    Ok(HiddenForce {
        force,
        phase: phase.clone(),
        score: phase.total,
        title: narrative.title.to_string(),
        description: narrative.description.to_string(),
        insight: narrative.insight.to_string(),
        action: narrative.action.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u8, total: i32) -> PhaseResult {
        PhaseResult::new(id, format!("Phase {}", id), total, "Archetype")
    }

    #[test]
    fn test_extremal_selection() {
        let totals = [5, 10, 15, 20, 25, 30, 18, 22, 28, 12];
        let results: Vec<PhaseResult> = totals
            .iter()
            .enumerate()
            .map(|(i, &t)| result(i as u8 + 1, t))
            .collect();

        let forces = analyze_forces(&results).unwrap();
        assert_eq!(forces.shadow.phase.id, 1);
        assert_eq!(forces.shadow.score, 5);
        assert_eq!(forces.fear.phase.id, 2);
        assert_eq!(forces.fear.score, 10);
        assert_eq!(forces.power.phase.id, 6);
        assert_eq!(forces.power.score, 30);
    }

    #[test]
    fn test_two_results_share_fear_and_power() {
        let results = vec![result(1, 5), result(2, 30)];
        let forces = analyze_forces(&results).unwrap();
        assert_eq!(forces.shadow.phase.id, 1);
        assert_eq!(forces.fear.phase.id, 2);
        assert_eq!(forces.power.phase.id, 2);
    }

    #[test]
    fn test_too_few_results() {
        let err = analyze_forces(&[result(1, 5)]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientPhases {
                required: 2,
                actual: 1
            }
        ));
        assert!(analyze_forces(&[]).is_err());
    }

    #[test]
    fn test_unknown_phase_id_fails_hard() {
        let results = vec![result(1, 5), result(42, 30)];
        let err = analyze_forces(&results).unwrap_err();
        assert!(matches!(err, EngineError::UnknownPhase { id: 42 }));
    }

    #[test]
    fn test_all_equal_uses_stable_order() {
        // Equal totals: stable sort keeps input order, so shadow is the
        // first-listed phase and fear the second.
        let results: Vec<PhaseResult> = (1..=10).map(|id| result(id, 20)).collect();
        let forces = analyze_forces(&results).unwrap();
        assert_eq!(forces.shadow.phase.id, 1);
        assert_eq!(forces.fear.phase.id, 2);
        assert_eq!(forces.power.phase.id, 10);
    }

    #[test]
    fn test_narrative_fields_populated() {
        let results = vec![result(3, 2), result(7, 28)];
        let forces = analyze_forces(&results).unwrap();
        assert_eq!(forces.shadow.title, "The Stalled Engine");
        assert_eq!(forces.power.title, "The Open Hand");
        assert!(!forces.fear.insight.is_empty());
        assert!(!forces.fear.action.is_empty());
    }
}
