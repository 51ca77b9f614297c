//! Life index calculation.
//!
//! Normalizes the whole-quiz total into a 0..=100 maturity index and its
//! four-tier stage.

use life_clock_core::types::{LifeIndexResult, LifeStage, PhaseResult};

/// Fixed whole-quiz maximum: ten phases at 30 points each. The constant
/// does not scale down when fewer phases are supplied; an incomplete quiz
/// silently lowers the ratio instead.
pub const MAX_SCORE: i32 = 10 * PhaseResult::MAX_TOTAL;

/// Compute the life index and stage for a set of phase results.
///
/// `life_index = round(sum(total) / 300 * 100)` with round-half-up on the
/// `.5` boundary, clamped into 0..=100 (the lower clamp is reachable only
/// when negative-valued answer options drive the aggregate below zero).
/// Stage banding is an ordered strict-`<` chain over 40, 65, 85: an index
/// of exactly 40 is a Wanderer, not a Sleeper.
///
/// Pure and total; the empty slice yields index 0, Sleeper.
///
/// # Example
///
/// ```
/// use life_clock_core::types::{LifeStage, PhaseResult};
/// use life_clock_engine::life_index::compute_life_index;
///
/// let results: Vec<PhaseResult> = (1..=10)
///     .map(|id| PhaseResult::new(id, "", 20, ""))
///     .collect();
/// let index = compute_life_index(&results);
/// assert_eq!(index.life_index, 67);
/// assert_eq!(index.stage, LifeStage::Alchemist);
/// ```
pub fn compute_life_index(results: &[PhaseResult]) -> LifeIndexResult {
    let sum: i32 = results.iter().map(|r| r.total).sum();
    let ratio = sum as f64 / MAX_SCORE as f64;
    // f64::round rounds half away from zero, which is round-half-up for
    // the non-negative range this clamps into.
    let life_index = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;

    LifeIndexResult {
        life_index,
        stage: LifeStage::from_index(life_index),
    }
}
