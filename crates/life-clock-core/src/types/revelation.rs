//! Narrative revelation types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The six revelation categories, in generation-batch order.
///
/// The generator emits a fixed number of revelations per category:
/// 10 phase + 4 energy + 10 pattern + 10 extreme + 7 contradiction +
/// 6 force = 47 total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationCategory {
    /// One revelation per quiz phase.
    Phase,
    /// One revelation per energy axis.
    Energy,
    /// Recurring behavioral patterns.
    Pattern,
    /// Extremes of the profile.
    Extreme,
    /// Inner contradictions.
    Contradiction,
    /// The hidden-force storyline.
    Force,
}

impl RevelationCategory {
    /// All categories in generation-batch order.
    pub const ALL: [RevelationCategory; 6] = [
        RevelationCategory::Phase,
        RevelationCategory::Energy,
        RevelationCategory::Pattern,
        RevelationCategory::Extreme,
        RevelationCategory::Contradiction,
        RevelationCategory::Force,
    ];

    /// Number of revelations generated for this category.
    #[inline]
    pub fn batch_size(&self) -> usize {
        match self {
            Self::Phase => 10,
            Self::Energy => 4,
            Self::Pattern => 10,
            Self::Extreme => 10,
            Self::Contradiction => 7,
            Self::Force => 6,
        }
    }

    /// Lowercase wire name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phase => "phase",
            Self::Energy => "energy",
            Self::Pattern => "pattern",
            Self::Extreme => "extreme",
            Self::Contradiction => "contradiction",
            Self::Force => "force",
        }
    }
}

impl fmt::Display for RevelationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevelationCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// One long-form narrative revelation.
///
/// Immutable once the generation pipeline completes. Titles carry a final
/// 1-based number prefix (`"12. …"`) assigned by the last pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revelation {
    /// Generation category.
    pub category: RevelationCategory,
    /// Card title, numbered in final list order.
    pub title: String,
    /// The narrative body. May contain `\n\n` paragraph breaks and
    /// `<span class="quote-gold">…</span>` quote markup.
    pub insight: String,
    /// Emoji icon for the card.
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_sizes_sum_to_47() {
        let total: usize = RevelationCategory::ALL
            .iter()
            .map(|c| c.batch_size())
            .sum();
        assert_eq!(total, 47);
    }

    #[test]
    fn test_category_roundtrip() {
        for category in RevelationCategory::ALL {
            let parsed: RevelationCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("destiny".parse::<RevelationCategory>().is_err());
    }
}
