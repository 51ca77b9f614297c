//! Life index maturity stages.
//!
//! The life index normalizes the whole-quiz total into 0..=100; the stage
//! is a four-tier qualitative label over that index.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Four-tier maturity stage over the life index.
///
/// # Stage Bands
///
/// Strict upper bounds, inclusive lower bounds:
///
/// ```text
/// index < 40   Sleeper
/// index < 65   Wanderer
/// index < 85   Alchemist
/// else         Luminary
/// ```
///
/// An index of exactly 40 is therefore a Wanderer, not a Sleeper.
///
/// # Example
///
/// ```
/// use life_clock_core::types::LifeStage;
///
/// assert_eq!(LifeStage::from_index(0), LifeStage::Sleeper);
/// assert_eq!(LifeStage::from_index(39), LifeStage::Sleeper);
/// assert_eq!(LifeStage::from_index(40), LifeStage::Wanderer);
/// assert_eq!(LifeStage::from_index(64), LifeStage::Wanderer);
/// assert_eq!(LifeStage::from_index(65), LifeStage::Alchemist);
/// assert_eq!(LifeStage::from_index(84), LifeStage::Alchemist);
/// assert_eq!(LifeStage::from_index(85), LifeStage::Luminary);
/// assert_eq!(LifeStage::from_index(100), LifeStage::Luminary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    /// Index below 40.
    Sleeper,
    /// Index in 40..65.
    Wanderer,
    /// Index in 65..85.
    Alchemist,
    /// Index 85 and above.
    Luminary,
}

impl LifeStage {
    /// Upper bound (exclusive) of the Sleeper band.
    pub const SLEEPER_BOUND: u8 = 40;

    /// Upper bound (exclusive) of the Wanderer band.
    pub const WANDERER_BOUND: u8 = 65;

    /// Upper bound (exclusive) of the Alchemist band.
    pub const ALCHEMIST_BOUND: u8 = 85;

    /// Classify a life index into its stage.
    ///
    /// Ordered range checks, not a table: the strict-`<` boundary behavior
    /// is a contract (see the type-level doc).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        if index < Self::SLEEPER_BOUND {
            LifeStage::Sleeper
        } else if index < Self::WANDERER_BOUND {
            LifeStage::Wanderer
        } else if index < Self::ALCHEMIST_BOUND {
            LifeStage::Alchemist
        } else {
            LifeStage::Luminary
        }
    }

    /// Short stage name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sleeper => "Sleeper",
            Self::Wanderer => "Wanderer",
            Self::Alchemist => "Alchemist",
            Self::Luminary => "Luminary",
        }
    }

    /// Full stage label as shown in the report and email.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sleeper => "The Sleeper — energy waiting to wake.",
            Self::Wanderer => "The Wanderer — searching for direction.",
            Self::Alchemist => "The Alchemist — shaping inner mastery.",
            Self::Luminary => "The Luminary — radiating full alignment.",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LifeStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the short name, case-insensitive, or the full label.
        let lowered = s.to_lowercase();
        for stage in [
            Self::Sleeper,
            Self::Wanderer,
            Self::Alchemist,
            Self::Luminary,
        ] {
            if lowered == stage.name().to_lowercase() || s == stage.label() {
                return Ok(stage);
            }
        }
        Err(CoreError::InvalidStage(s.to_string()))
    }
}

// The report contract is `stage: string` with the full label, so the enum
// serializes as its label rather than as a variant name.
impl Serialize for LifeStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for LifeStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StageVisitor;

        impl Visitor<'_> for StageVisitor {
            type Value = LifeStage;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a life stage name or label")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LifeStage, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(StageVisitor)
    }
}

/// Normalized life index plus its qualitative stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeIndexResult {
    /// Maturity index in 0..=100.
    pub life_index: u8,
    /// Stage label over the index.
    pub stage: LifeStage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_boundaries() {
        assert_eq!(LifeStage::from_index(39), LifeStage::Sleeper);
        assert_eq!(LifeStage::from_index(40), LifeStage::Wanderer);
        assert_eq!(LifeStage::from_index(64), LifeStage::Wanderer);
        assert_eq!(LifeStage::from_index(65), LifeStage::Alchemist);
        assert_eq!(LifeStage::from_index(84), LifeStage::Alchemist);
        assert_eq!(LifeStage::from_index(85), LifeStage::Luminary);
    }

    #[test]
    fn test_label_text() {
        assert_eq!(
            LifeStage::Alchemist.label(),
            "The Alchemist — shaping inner mastery."
        );
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&LifeStage::Wanderer).unwrap();
        assert_eq!(json, "\"The Wanderer — searching for direction.\"");
    }

    #[test]
    fn test_deserialize_accepts_name_and_label() {
        let from_name: LifeStage = serde_json::from_str("\"luminary\"").unwrap();
        assert_eq!(from_name, LifeStage::Luminary);

        let from_label: LifeStage =
            serde_json::from_str("\"The Sleeper — energy waiting to wake.\"").unwrap();
        assert_eq!(from_label, LifeStage::Sleeper);
    }

    #[test]
    fn test_index_result_serde_shape() {
        let result = LifeIndexResult {
            life_index: 67,
            stage: LifeStage::Alchemist,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"lifeIndex\":67"));
        assert!(json.contains("Alchemist"));
    }
}
