//! Destiny phrase and result summary generators.
//!
//! Small pure template functions over the energy profile and life index.
//! Note the suffix banding here uses strict `>` (85, 65) while the stage
//! banding in `life_index` uses strict `<` (40, 65, 85). The two rules
//! disagree at the exact boundary values and both are contractual; they
//! must not be unified into a shared helper.

use life_clock_core::types::{EnergyProfile, EnergyType, LifeIndexResult, ResultSummary};

/// Archetype card for a dominant energy axis.
#[derive(Debug, Clone, Copy)]
pub struct EnergyArchetype {
    /// Archetype name.
    pub name: &'static str,
    /// Archetype emoji.
    pub emoji: &'static str,
    /// One-line archetype message.
    pub message: &'static str,
}

/// The four archetype cards, keyed by dominant energy.
#[inline]
pub fn archetype_for(energy: EnergyType) -> &'static EnergyArchetype {
    match energy {
        EnergyType::Mind => &EnergyArchetype {
            name: "The Architect",
            emoji: "🧠",
            message: "You build your life the way others build houses: from a drawing, deliberately.",
        },
        EnergyType::Heart => &EnergyArchetype {
            name: "The Empath",
            emoji: "💗",
            message: "You navigate by connection; people are your instrument panel and your reward.",
        },
        EnergyType::Drive => &EnergyArchetype {
            name: "The Forger",
            emoji: "🔥",
            message: "You convert intention into motion faster than most people finish deciding.",
        },
        EnergyType::Spirit => &EnergyArchetype {
            name: "The Seer",
            emoji: "✨",
            message: "You read the larger currents and live in step with a rhythm others can't hear.",
        },
    }
}

fn essence_for(energy: EnergyType) -> &'static str {
    match energy {
        EnergyType::Mind => {
            "Your destiny runs through understanding: you are here to see clearly and to build from what you see."
        }
        EnergyType::Heart => {
            "Your destiny runs through connection: you are here to bind people together and be changed by them."
        }
        EnergyType::Drive => {
            "Your destiny runs through action: you are here to move first and make the path by walking it."
        }
        EnergyType::Spirit => {
            "Your destiny runs through meaning: you are here to listen for the larger story and live inside it."
        }
    }
}

fn suffix_for(life_index: u8) -> &'static str {
    // Strict `>`: an index of exactly 85 takes the middle branch, and
    // exactly 65 takes the last. Deliberately different boundary
    // semantics from the LifeStage bands.
    if life_index > 85 {
        "The clock of your life is running at full power; your task now is direction, not repair."
    } else if life_index > 65 {
        "The clock of your life runs strong; a few chambers still wait for your attention."
    } else {
        "The clock of your life is still winding up; what wakes now decides the remaining hours."
    }
}

/// Build the destiny phrase: essence sentence plus index-banded suffix.
///
/// # Example
///
/// ```
/// use life_clock_core::types::{EnergyAverages, EnergyProfile, EnergyType};
/// use life_clock_engine::destiny::generate_destiny_phrase;
///
/// let profile = EnergyProfile {
///     averages: EnergyAverages::default(),
///     dominant: EnergyType::Drive,
/// };
/// let phrase = generate_destiny_phrase(&profile, 90);
/// assert!(phrase.contains("through action"));
/// assert!(phrase.contains("full power"));
/// ```
pub fn generate_destiny_phrase(profile: &EnergyProfile, life_index: u8) -> String {
    format!(
        "{} {}",
        essence_for(profile.dominant),
        suffix_for(life_index)
    )
}

/// Build the result page summary block for a profile and life index.
pub fn generate_result_summary(
    profile: &EnergyProfile,
    life_index: &LifeIndexResult,
) -> ResultSummary {
    let archetype = archetype_for(profile.dominant);
    ResultSummary {
        score: life_index.life_index,
        stage: life_index.stage.label().to_string(),
        dominant_energy: profile.dominant,
        archetype_name: archetype.name.to_string(),
        archetype_emoji: archetype.emoji.to_string(),
        archetype_message: archetype.message.to_string(),
    }
}
