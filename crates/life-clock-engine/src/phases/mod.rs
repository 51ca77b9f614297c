//! Static phase definitions and per-phase evaluation.
//!
//! Ten phases, ten questions each, four scored answer options per
//! question, plus two independent score-band tables (archetype profiles
//! and global feedback). The catalog is literal content loaded once at
//! process start; evaluation is pure.

mod catalog;
mod evaluate;
mod profiles;

pub use catalog::{phase, AnswerOption, PhaseDefinition, Question, PHASES};
pub use profiles::{global_feedback_for, profile_for, PhaseProfile};
