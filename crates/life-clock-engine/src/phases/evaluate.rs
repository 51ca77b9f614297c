//! Phase evaluation: answers to a scored, archetyped `PhaseResult`.

use life_clock_core::types::{PhaseAnswer, PhaseResult};

use super::catalog::PhaseDefinition;
use super::profiles::{global_feedback_for, profile_for, PhaseProfile};

impl PhaseDefinition {
    /// Sum a completed phase's answers and select its profile.
    ///
    /// A phase with fewer than ten answers is a caller-side invariant
    /// violation (the quiz flow only calls this once a phase completes);
    /// the sum is taken over whatever is supplied rather than guessing a
    /// recovery.
    ///
    /// # Example
    ///
    /// ```
    /// use life_clock_core::types::PhaseAnswer;
    /// use life_clock_engine::phases::phase;
    ///
    /// let origins = phase(1).unwrap();
    /// let answers: Vec<PhaseAnswer> =
    ///     (0..10).map(|_| PhaseAnswer::new(3, "")).collect();
    /// let result = origins.evaluate(&answers);
    /// assert_eq!(result.total, 30);
    /// assert_eq!(result.archetype, "The Rooted One");
    /// ```
    pub fn evaluate(&self, answers: &[PhaseAnswer]) -> PhaseResult {
        let total: i32 = answers.iter().map(|a| a.value).sum();
        let profile = self.profile(total);
        PhaseResult::new(self.id, self.title, total, profile.archetype)
    }

    /// The profile band a total falls into.
    ///
    /// The band table is total over every reachable score for a phase in
    /// the static catalog, so the lookup cannot miss.
    #[inline]
    pub fn profile(&self, total: i32) -> &'static PhaseProfile {
        // Panics only for a hand-built definition with an id outside the
        // static catalog, which is a precondition violation.
        profile_for(self.id, total).expect("phase id inside the static catalog")
    }

    /// The global feedback line for a total.
    ///
    /// Banded independently of [`Self::profile`]; the two tables share
    /// neither cut points nor a rule.
    #[inline]
    pub fn global_feedback(&self, total: i32) -> &'static str {
        global_feedback_for(self.id, total).expect("phase id inside the static catalog")
    }
}
