//! Final report composition.
//!
//! Orchestrates the whole pipeline: phase results in, one read-only
//! `LifeClockFinalReport` out. Data flows one direction; the composer
//! only reads component outputs and never mutates them.

use life_clock_core::types::{LifeClockFinalReport, LifeCurvePoint, PhaseResult};
use tracing::debug;

use crate::destiny::{generate_destiny_phrase, generate_result_summary};
use crate::energy::compute_profile;
use crate::error::EngineResult;
use crate::forces::analyze_forces;
use crate::insight::InsightGenerator;
use crate::life_index::compute_life_index;

/// Build the life curve: one point per phase in id order, value = the
/// phase's rounded percentage of the 30-point maximum, clamped 0..=100.
pub fn compute_life_curve(results: &[PhaseResult]) -> Vec<LifeCurvePoint> {
    let mut ordered: Vec<&PhaseResult> = results.iter().collect();
    ordered.sort_by_key(|r| r.id);

    ordered
        .into_iter()
        .map(|result| LifeCurvePoint {
            phase: result.id,
            label: result.title.clone(),
            value: result.percent().round().clamp(0.0, 100.0) as u8,
        })
        .collect()
}

/// The report composer.
///
/// Stateless; exists as a struct so call sites construct it once next to
/// the surrounding application's other services.
#[derive(Debug, Default)]
pub struct ReportComposer {
    insights: InsightGenerator,
}

impl ReportComposer {
    /// Create a composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the complete report for a finished session.
    ///
    /// Expects the ten phase results of a completed quiz (ids 1..=10).
    /// Degraded inputs degrade the profile/index/curve silently, but the
    /// forces analyzer and the revelation pools fail hard on fewer than
    /// two results or out-of-domain ids; see the error module for why
    /// that asymmetry is kept.
    pub fn compose(&self, results: &[PhaseResult]) -> EngineResult<LifeClockFinalReport> {
        let profile = compute_profile(results);
        let life_index = compute_life_index(results);
        let life_curve = compute_life_curve(results);
        let destiny = generate_destiny_phrase(&profile, life_index.life_index);
        let summary = generate_result_summary(&profile, &life_index);
        let forces = analyze_forces(results)?;
        let revelations = self.insights.generate(results, &profile)?;

        debug!(
            life_index = life_index.life_index,
            dominant = %profile.dominant,
            revelations = revelations.len(),
            "composed report"
        );

        Ok(LifeClockFinalReport {
            archetype: summary.archetype_name.clone(),
            profile,
            life_index,
            life_curve,
            destiny,
            summary,
            forces,
            revelations,
        })
    }
}

/// Compose a report with a throwaway composer.
pub fn compose_report(results: &[PhaseResult]) -> EngineResult<LifeClockFinalReport> {
    ReportComposer::new().compose(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_clock_core::types::{EnergyType, LifeStage};

    fn session(totals: &[i32]) -> Vec<PhaseResult> {
        let titles = [
            "Origins",
            "Learning",
            "Action",
            "Bonds",
            "Meaning",
            "Ambition",
            "Compassion",
            "Reflection",
            "Transcendence",
            "Legacy",
        ];
        totals
            .iter()
            .enumerate()
            .map(|(i, &total)| {
                PhaseResult::new(i as u8 + 1, titles[i], total, format!("Archetype {}", i + 1))
            })
            .collect()
    }

    #[test]
    fn test_life_curve_sorted_by_id() {
        let mut results = session(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);
        results.reverse();
        let curve = compute_life_curve(&results);
        assert_eq!(curve.len(), 10);
        for (i, point) in curve.iter().enumerate() {
            assert_eq!(point.phase as usize, i + 1);
        }
        // Phase 1 total 5 -> 17%, phase 6 total 30 -> 100%.
        assert_eq!(curve[0].value, 17);
        assert_eq!(curve[5].value, 100);
    }

    #[test]
    fn test_life_curve_clamps_negative() {
        let curve = compute_life_curve(&[PhaseResult::new(1, "Origins", -6, "A")]);
        assert_eq!(curve[0].value, 0);
    }

    #[test]
    fn test_compose_round_trip_uniform_twenty() {
        let report = compose_report(&session(&[20; 10])).unwrap();

        assert_eq!(report.life_index.life_index, 67);
        assert_eq!(report.life_index.stage, LifeStage::Alchemist);
        assert_eq!(
            report.summary.stage,
            "The Alchemist — shaping inner mastery."
        );
        assert_eq!(report.profile.averages.mind, 20.0);
        assert_eq!(report.profile.averages.spirit, 20.0);
        assert_eq!(report.profile.dominant, EnergyType::Mind);
        assert_eq!(report.archetype, "The Architect");
        // All-equal session: stable ascending sort keeps input order.
        assert_eq!(report.forces.shadow.phase.id, 1);
        assert_eq!(report.forces.fear.phase.id, 2);
        assert_eq!(report.forces.power.phase.id, 10);
        assert_eq!(report.revelations.len(), 47);
    }

    #[test]
    fn test_compose_is_read_only_over_input() {
        let results = session(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);
        let snapshot = results.clone();
        let _ = compose_report(&results).unwrap();
        assert_eq!(results, snapshot);
    }

    #[test]
    fn test_compose_fails_on_insufficient_results() {
        let results = session(&[20; 10]);
        assert!(compose_report(&results[..1]).is_err());
        assert!(compose_report(&[]).is_err());
    }

    #[test]
    fn test_compose_deterministic() {
        let results = session(&[5, 10, 15, 20, 25, 30, 18, 22, 28, 12]);
        let first = compose_report(&results).unwrap();
        let second = compose_report(&results).unwrap();
        assert_eq!(first, second);
    }
}
