//! Quiz phase answer and result types.

use serde::{Deserialize, Serialize};

use super::energy::EnergyType;

/// One user response to one question.
///
/// Ephemeral: created during quiz traversal and folded into a phase total,
/// never persisted beyond local session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAnswer {
    /// Score carried by the chosen answer option (small signed range,
    /// -1..=3 in the shipped catalog).
    pub value: i32,
    /// Canned feedback text attached to the chosen option.
    pub feedback: String,
}

impl PhaseAnswer {
    /// Build an answer from an option's score and feedback text.
    pub fn new(value: i32, feedback: impl Into<String>) -> Self {
        Self {
            value,
            feedback: feedback.into(),
        }
    }
}

/// The evaluated outcome of one completed phase.
///
/// Ten of these (unique ids 1..=10) form a completed quiz session. Created
/// once per phase completion and immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    /// Phase id in 1..=10.
    pub id: u8,
    /// Phase title as shown in the report.
    pub title: String,
    /// Sum of the phase's answer values. Reachable maximum is 30.
    pub total: i32,
    /// Archetype name selected by score-banding.
    pub archetype: String,
}

impl PhaseResult {
    /// Per-phase maximum total, used as a hard constant by every
    /// downstream normalizer.
    pub const MAX_TOTAL: i32 = 30;

    /// Build a phase result.
    pub fn new(id: u8, title: impl Into<String>, total: i32, archetype: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            total,
            archetype: archetype.into(),
        }
    }

    /// The energy axis this phase belongs to, or `None` for out-of-domain
    /// ids.
    #[inline]
    pub fn energy(&self) -> Option<EnergyType> {
        EnergyType::for_phase(self.id)
    }

    /// This phase's total as a percentage of [`Self::MAX_TOTAL`].
    ///
    /// Unclamped; callers that need the 0..=100 window clamp themselves.
    #[inline]
    pub fn percent(&self) -> f32 {
        self.total as f32 / Self::MAX_TOTAL as f32 * 100.0
    }
}
