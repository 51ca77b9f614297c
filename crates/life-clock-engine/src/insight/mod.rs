//! Revelation generation pipeline.
//!
//! Produces exactly 47 revelations from a completed session: five
//! generation batches in fixed order (10 phase + 4 energy + 10 pattern +
//! 10 extreme + 7 contradiction + 6 force), then five post-processing
//! passes in fixed order (multi-citation injection, legacy phase-1 quote
//! pass, cross-revelation sentence de-duplication, golden-quote
//! guarantee, final renumbering). Everything is deterministic in the
//! input; regenerating from the same session yields byte-identical text.

pub mod citation;
pub mod dedup;
pub mod quotes;
pub mod rng;
mod templates;

pub use templates::{
    EnergyTemplate, PhaseTierTemplate, StaticRevelation, CONTRADICTION_REVELATIONS,
    ENERGY_TEMPLATES, EXTREME_REVELATIONS, FORCE_REVELATIONS, PATTERN_REVELATIONS, PHASE_TIERS,
};

use life_clock_core::types::{
    EnergyProfile, EnergyType, PhaseResult, Revelation, RevelationCategory,
};
use tracing::debug;

use crate::error::EngineResult;

use citation::{ensure_golden_quotes, inject_citations, legacy_quote_pass};
use dedup::DeduplicationPass;
use quotes::pools_for_run;
use templates::{energy_template_for, phase_revelation_title};

/// Total revelations for a complete ten-phase session.
pub const REVELATION_COUNT: usize = 47;

/// Percent-of-max threshold at which an axis takes its high energy text.
const ENERGY_HIGH_THRESHOLD: i32 = 70;

/// Generate the full, post-processed revelation list for a session.
///
/// Convenience wrapper over [`InsightGenerator`].
pub fn generate_insights(
    results: &[PhaseResult],
    profile: &EnergyProfile,
) -> EngineResult<Vec<Revelation>> {
    InsightGenerator::new().generate(results, profile)
}

/// The revelation pipeline.
///
/// Stateless between runs; all run state (the seen-sentence set, the
/// quote-uniqueness set) lives inside a single `generate` call, which is
/// why concurrent report generations need no locking.
#[derive(Debug, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    /// Create a generator.
    pub fn new() -> Self {
        Self
    }

    /// Run generation plus all post-processing passes, in order.
    ///
    /// For a complete session (ten results, ids 1..=10) the output is
    /// exactly [`REVELATION_COUNT`] revelations with non-empty bodies and
    /// titles numbered `"1. …"` through `"47. …"`. A phase id outside
    /// 1..=10 breaks the quote-pool lookup and fails with
    /// `EngineError::UnknownPhase`.
    pub fn generate(
        &self,
        results: &[PhaseResult],
        profile: &EnergyProfile,
    ) -> EngineResult<Vec<Revelation>> {
        let mut revelations = generate_batches(results, profile);
        let pools = pools_for_run(results, revelations.len())?;

        // Pass 1: multi-citation injection.
        inject_citations(&mut revelations, &pools);

        // Pass 2: legacy phase-1 quote distribution.
        legacy_quote_pass(&mut revelations, results, profile);

        // Pass 3: cross-revelation sentence de-duplication. The pass
        // object carries the global seen-set into pass 4.
        let mut dedup = DeduplicationPass::new();
        for revelation in &mut revelations {
            revelation.insight = dedup.apply(&revelation.insight);
        }

        // Pass 4: golden-quote guarantee.
        ensure_golden_quotes(&mut revelations, &pools, &mut dedup);

        // Pass 5: final renumbering.
        for (index, revelation) in revelations.iter_mut().enumerate() {
            revelation.title = format!("{}. {}", index + 1, revelation.title);
        }

        debug!(count = revelations.len(), "generated revelations");
        Ok(revelations)
    }
}

/// Run the five generation batches in fixed order, without decoration.
fn generate_batches(results: &[PhaseResult], profile: &EnergyProfile) -> Vec<Revelation> {
    let mut revelations = Vec::with_capacity(REVELATION_COUNT);

    // Batch 1: one revelation per phase result, tiered by score percent.
    for result in results {
        let tier = phase_tier(result.percent());
        let insight = tier
            .template
            .replace("{title}", &result.title)
            .replace("{archetype}", &result.archetype);
        revelations.push(Revelation {
            category: RevelationCategory::Phase,
            title: phase_revelation_title(&result.title),
            insight,
            icon: tier.icon.to_string(),
        });
    }

    // Batch 2: one revelation per axis, high/low at 70 percent.
    for axis in EnergyType::ALL {
        let template = energy_template_for(axis);
        let percent = (profile.averages.get(axis) / PhaseResult::MAX_TOTAL as f32 * 100.0)
            .round() as i32;
        let body = if percent >= ENERGY_HIGH_THRESHOLD {
            template.high
        } else {
            template.low
        };
        revelations.push(Revelation {
            category: RevelationCategory::Energy,
            title: template.title.to_string(),
            insight: body.to_string(),
            icon: template.icon.to_string(),
        });
    }

    // Batches 3-6: fixed static lists.
    for (list, category) in [
        (&PATTERN_REVELATIONS[..], RevelationCategory::Pattern),
        (&EXTREME_REVELATIONS[..], RevelationCategory::Extreme),
        (
            &CONTRADICTION_REVELATIONS[..],
            RevelationCategory::Contradiction,
        ),
        (&FORCE_REVELATIONS[..], RevelationCategory::Force),
    ] {
        for item in list {
            revelations.push(Revelation {
                category,
                title: item.title.to_string(),
                insight: item.insight.to_string(),
                icon: item.icon.to_string(),
            });
        }
    }

    revelations
}

/// Tier template for a phase score percent: `<40`, `<60`, `<80`, else.
#[inline]
fn phase_tier(percent: f32) -> &'static PhaseTierTemplate {
    if percent < 40.0 {
        &PHASE_TIERS[0]
    } else if percent < 60.0 {
        &PHASE_TIERS[1]
    } else if percent < 80.0 {
        &PHASE_TIERS[2]
    } else {
        &PHASE_TIERS[3]
    }
}
