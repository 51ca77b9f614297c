//! Static quote pools and per-revelation pool resolution.
//!
//! Each phase carries its own pool; energy revelations draw from their
//! axis member phases' pools concatenated in id order; the remaining
//! categories draw from all ten pools concatenated in id order.

use life_clock_core::types::{EnergyType, PhaseResult};

use crate::error::{EngineError, EngineResult};

/// Per-phase quote pools, indexed by `id - 1`.
static PHASE_QUOTES: [&[&str]; 10] = [
    // Phase 1: Origins
    &[
        "Every tree is a negotiation between a seed and a place.",
        "The first rooms we live in never stop being lived in.",
        "You inherit the map before you ever see the territory.",
        "What shaped you in silence can only be reshaped out loud.",
        "A closed first chapter keeps rewriting the later ones.",
    ],
    // Phase 2: Learning
    &[
        "A mind stays young exactly as long as it stays wrong sometimes.",
        "Every belief deserves to meet its strongest enemy once.",
        "The tuition for a lesson is only paid once if you take notes.",
        "Curiosity is hunger that makes you richer the more you feed it.",
        "An unread page weighs more than a read library.",
    ],
    // Phase 3: Action
    &[
        "Discipline is remembering what you wanted after you stop wanting it.",
        "The gap between deciding and doing is where lives disappear.",
        "Start badly; perfection is a spectator.",
        "A promise kept to yourself is the hardest currency there is.",
        "Mood is weather; structure is climate.",
    ],
    // Phase 4: Bonds
    &[
        "We are built in conversation and repaired in it too.",
        "Love unspoken is a letter that was written and never sent.",
        "The wall that keeps out the wolf also keeps out the fire's warmth.",
        "Being fully known is the risk that pays in being fully held.",
        "An apology offered first costs pride and buys everything else.",
    ],
    // Phase 5: Meaning
    &[
        "A calendar is the most honest autobiography.",
        "The why can carry any how, but no how can carry a missing why.",
        "Meaning is not found lying around; it is built on purpose.",
        "A life without a question becomes someone else's answer.",
        "What you would do unpaid is pointing somewhere; follow it.",
    ],
    // Phase 6: Ambition
    &[
        "Write the goal down; ink is the first act of will.",
        "A vision you can see survives weather that kills a wish.",
        "Let results do your arguing.",
        "The safe harbor rots more hulls than the open sea.",
        "Choose rivals who make your game bigger, not your heart smaller.",
    ],
    // Phase 7: Compassion
    &[
        "Kindness given in secret has no overhead.",
        "The ear that merely waits to speak hears nothing.",
        "Mercy is a muscle; it grows only under load.",
        "To see someone no one sees is the cheapest miracle available.",
        "The hand you open for others should open for you too.",
    ],
    // Phase 8: Reflection
    &[
        "The unexamined pattern repeats on schedule.",
        "Name the feeling and it loses its commanding rank.",
        "Your saboteur works unsupervised until you learn its face.",
        "A journal is a mirror that holds still.",
        "Envy, read correctly, is a signed letter from your buried wishes.",
    ],
    // Phase 9: Transcendence
    &[
        "Silence is not empty; it is where the rest of you waits.",
        "Awe is the correct response to being here at all.",
        "Zoom out far enough and every worry finds its true size.",
        "Gratitude without a reason is the deepest kind.",
        "The night sky is a free cathedral with infinite seating.",
    ],
    // Phase 10: Legacy
    &[
        "Plant trees whose shade you will never sit in.",
        "What you repair outlives you longer than what you buy.",
        "The last page can teach the first ones, if read early.",
        "Time is only an enemy to those who never introduce themselves.",
        "A legacy is written daily or not at all.",
    ],
];

/// A phase's own pool, or `None` outside 1..=10.
#[inline]
pub fn phase_pool(phase_id: u8) -> Option<&'static [&'static str]> {
    PHASE_QUOTES
        .get(phase_id.checked_sub(1)? as usize)
        .copied()
}

/// Pool grouped over an axis's member phases, in id order.
pub fn energy_pool(axis: EnergyType) -> Vec<&'static str> {
    axis.member_phases()
        .iter()
        .filter_map(|&id| phase_pool(id))
        .flatten()
        .copied()
        .collect()
}

/// Pool grouped over all ten phases, in id order.
pub fn grouped_pool() -> Vec<&'static str> {
    PHASE_QUOTES.iter().flat_map(|pool| pool.iter().copied()).collect()
}

/// Resolve the quote pool for every revelation index of a generation run.
///
/// The batch layout is positional: the first `results.len()` revelations
/// are the phase batch (pool = that phase's own quotes), the next four are
/// the energy batch in canonical axis order (pool = axis members' quotes),
/// and everything after draws from the full grouped pool.
pub fn pools_for_run(results: &[PhaseResult], total: usize) -> EngineResult<Vec<Vec<&'static str>>> {
    let phase_count = results.len();
    let mut pools = Vec::with_capacity(total);

    for index in 0..total {
        let pool = if index < phase_count {
            let id = results[index].id;
            phase_pool(id)
                .ok_or(EngineError::UnknownPhase { id })?
                .to_vec()
        } else if index < phase_count + EnergyType::ALL.len() {
            energy_pool(EnergyType::ALL[index - phase_count])
        } else {
            grouped_pool()
        };
        pools.push(pool);
    }

    Ok(pools)
}
