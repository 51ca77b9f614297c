//! Hidden force types.
//!
//! Hidden forces are the extremal phases of a quiz session: the
//! lowest-scoring phase (shadow), the second-lowest (fear) and the highest
//! (power), each decorated with canned insight and action text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

use super::phase::PhaseResult;

/// The three hidden force roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceType {
    /// The lowest-scoring phase.
    Shadow,
    /// The second-lowest-scoring phase.
    Fear,
    /// The highest-scoring phase.
    Power,
}

impl ForceType {
    /// All force roles in presentation order.
    pub const ALL: [ForceType; 3] = [ForceType::Shadow, ForceType::Fear, ForceType::Power];

    /// Lowercase wire name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shadow => "shadow",
            Self::Fear => "fear",
            Self::Power => "power",
        }
    }
}

impl fmt::Display for ForceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shadow" => Ok(Self::Shadow),
            "fear" => Ok(Self::Fear),
            "power" => Ok(Self::Power),
            other => Err(CoreError::InvalidForceType(other.to_string())),
        }
    }
}

/// One hidden force: an extremal phase plus its canned narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenForce {
    /// Which role this force plays.
    #[serde(rename = "type")]
    pub force: ForceType,
    /// The phase result this force points at.
    pub phase: PhaseResult,
    /// The phase's total, lifted for direct rendering.
    pub score: i32,
    /// Force card title.
    pub title: String,
    /// Short description of what this force means.
    pub description: String,
    /// Longer insight paragraph.
    pub insight: String,
    /// Suggested action sentence.
    pub action: String,
}

/// The three hidden forces of one session.
///
/// With exactly two phase results, `fear` and `power` may reference the
/// same phase; the analyzer documents that as a caller-visible edge case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenForces {
    /// Lowest-scoring phase.
    pub shadow: HiddenForce,
    /// Second-lowest-scoring phase.
    pub fear: HiddenForce,
    /// Highest-scoring phase.
    pub power: HiddenForce,
}

impl HiddenForces {
    /// The three forces in presentation order (shadow, fear, power).
    pub fn iter(&self) -> impl Iterator<Item = &HiddenForce> {
        [&self.shadow, &self.fear, &self.power].into_iter()
    }
}
