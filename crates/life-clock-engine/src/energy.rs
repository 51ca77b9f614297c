//! Energy profile aggregation.
//!
//! Maps phase results onto the four energy axes via the fixed phase
//! partition and selects the dominant axis.

use life_clock_core::types::{EnergyAverages, EnergyProfile, EnergyType, PhaseResult};

/// Aggregate phase results into an energy profile.
///
/// For each axis, the average is the arithmetic mean of `total` over the
/// axis's member phases present in `results`. An axis with no members
/// present averages 0.0; the division by zero is special-cased, never
/// surfaced as NaN. The dominant axis is the strictly highest average,
/// with ties resolved to the earliest axis in the canonical order
/// `[Mind, Heart, Drive, Spirit]` via a stable descending sort.
///
/// Pure and total for any input, including the empty slice (all axes 0.0,
/// dominant Mind by the tie rule).
///
/// # Example
///
/// ```
/// use life_clock_core::types::{EnergyType, PhaseResult};
/// use life_clock_engine::energy::compute_profile;
///
/// let results = vec![
///     PhaseResult::new(1, "Origins", 30, "The Rooted One"),
///     PhaseResult::new(2, "Learning", 25, "The Scholar of Experience"),
///     PhaseResult::new(8, "Reflection", 24, "The Illuminated"),
/// ];
/// let profile = compute_profile(&results);
/// assert!((profile.averages.mind - 26.333334).abs() < 1e-4);
/// assert_eq!(profile.averages.heart, 0.0);
/// assert_eq!(profile.dominant, EnergyType::Mind);
/// ```
pub fn compute_profile(results: &[PhaseResult]) -> EnergyProfile {
    let mut averages = EnergyAverages::default();

    for axis in EnergyType::ALL {
        let members = axis.member_phases();
        let mut sum = 0i32;
        let mut count = 0u32;
        for result in results {
            if members.contains(&result.id) {
                sum += result.total;
                count += 1;
            }
        }
        *averages.get_mut(axis) = if count == 0 {
            0.0
        } else {
            sum as f32 / count as f32
        };
    }

    EnergyProfile {
        averages,
        dominant: dominant_axis(&averages),
    }
}

/// The axis with the highest average; canonical-order tie-break.
fn dominant_axis(averages: &EnergyAverages) -> EnergyType {
    let mut ranked: Vec<(EnergyType, f32)> = EnergyType::ALL
        .iter()
        .map(|&axis| (axis, averages.get(axis)))
        .collect();
    // Stable sort: equal averages keep the canonical Mind, Heart, Drive,
    // Spirit order, so the first element is the tie-break winner.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked[0].0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: u8, total: i32) -> PhaseResult {
        PhaseResult::new(id, format!("Phase {}", id), total, "Archetype")
    }

    #[test]
    fn test_axis_means_over_present_members() {
        let results = vec![result(1, 30), result(2, 25), result(8, 24)];
        let profile = compute_profile(&results);
        assert!((profile.averages.mind - (30.0 + 25.0 + 24.0) / 3.0).abs() < 1e-5);
        assert_eq!(profile.averages.heart, 0.0);
        assert_eq!(profile.averages.drive, 0.0);
        assert_eq!(profile.averages.spirit, 0.0);
    }

    #[test]
    fn test_partial_axis_membership() {
        // Only one of Heart's two members present: average is that total.
        let results = vec![result(4, 18)];
        let profile = compute_profile(&results);
        assert_eq!(profile.averages.heart, 18.0);
        assert_eq!(profile.dominant, EnergyType::Heart);
    }

    #[test]
    fn test_empty_input_is_total() {
        let profile = compute_profile(&[]);
        assert_eq!(profile.averages, EnergyAverages::default());
        assert_eq!(profile.dominant, EnergyType::Mind);
    }

    #[test]
    fn test_tie_break_canonical_order() {
        // All ten phases equal: every axis averages 20, Mind wins.
        let results: Vec<PhaseResult> = (1..=10).map(|id| result(id, 20)).collect();
        let profile = compute_profile(&results);
        assert_eq!(profile.averages.mind, 20.0);
        assert_eq!(profile.averages.spirit, 20.0);
        assert_eq!(profile.dominant, EnergyType::Mind);
    }

    #[test]
    fn test_tie_break_skips_lower_earlier_axis() {
        // Heart and Drive tie above Mind: Heart precedes Drive canonically.
        let results = vec![result(1, 5), result(4, 25), result(3, 25)];
        let profile = compute_profile(&results);
        assert_eq!(profile.dominant, EnergyType::Heart);
    }

    #[test]
    fn test_strictly_highest_wins_regardless_of_order() {
        let results = vec![result(5, 28), result(1, 10)];
        let profile = compute_profile(&results);
        assert_eq!(profile.dominant, EnergyType::Spirit);
    }

    #[test]
    fn test_negative_totals_average() {
        let results = vec![result(4, -2), result(7, 4)];
        let profile = compute_profile(&results);
        assert_eq!(profile.averages.heart, 1.0);
    }
}
