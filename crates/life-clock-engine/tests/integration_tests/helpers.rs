//! Helper functions: deterministic session construction (NO MOCKS).

use life_clock_core::types::{PhaseAnswer, PhaseResult};
use life_clock_engine::phases::{phase, profile_for};

/// Build a session directly from per-phase totals (ids 1..=10, catalog
/// titles, archetypes looked up from the real band tables).
pub fn session_from_totals(totals: &[i32]) -> Vec<PhaseResult> {
    totals
        .iter()
        .enumerate()
        .map(|(i, &total)| {
            let id = i as u8 + 1;
            let definition = phase(id).expect("catalog phase");
            let archetype = profile_for(id, total).expect("band table entry").archetype;
            PhaseResult::new(id, definition.title, total, archetype)
        })
        .collect()
}

/// Build a session by actually answering every question of every phase
/// with the option at `option_index`, exercising the real catalog and
/// evaluation path.
pub fn answered_session(option_index: usize) -> Vec<PhaseResult> {
    (1..=10)
        .map(|id| {
            let definition = phase(id).expect("catalog phase");
            let answers: Vec<PhaseAnswer> = definition
                .questions
                .iter()
                .map(|question| {
                    let option = &question.options[option_index];
                    PhaseAnswer::new(option.value, option.feedback)
                })
                .collect();
            definition.evaluate(&answers)
        })
        .collect()
}
