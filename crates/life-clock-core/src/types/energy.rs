//! Energy axis classification for phase results.
//!
//! The ten quiz phases map onto four energy axes via a fixed partition.
//! Axis averages and the dominant axis drive the destiny phrase, the result
//! summary, and the energy revelation batch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The four energy axes a completed quiz is projected onto.
///
/// # Partition
///
/// Each phase id belongs to exactly one axis:
/// - **Mind**: phases 1, 2, 8
/// - **Heart**: phases 4, 7
/// - **Drive**: phases 3, 6
/// - **Spirit**: phases 5, 9, 10
///
/// # Ordering
///
/// `EnergyType::ALL` fixes the canonical iteration order
/// `[Mind, Heart, Drive, Spirit]`. Dominant-axis selection breaks ties by
/// this order (first-seen wins under a stable sort), so the ordering is a
/// behavioral contract, not a cosmetic detail.
///
/// # Example
///
/// ```
/// use life_clock_core::types::EnergyType;
///
/// assert_eq!(EnergyType::for_phase(8), Some(EnergyType::Mind));
/// assert_eq!(EnergyType::for_phase(10), Some(EnergyType::Spirit));
/// assert_eq!(EnergyType::for_phase(11), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    /// Thought, memory and self-knowledge (phases 1, 2, 8).
    Mind,
    /// Bonds and compassion (phases 4, 7).
    Heart,
    /// Will, discipline and ambition (phases 3, 6).
    Drive,
    /// Meaning, transcendence and legacy (phases 5, 9, 10).
    Spirit,
}

impl EnergyType {
    /// Canonical iteration order used for tie-breaking.
    pub const ALL: [EnergyType; 4] = [
        EnergyType::Mind,
        EnergyType::Heart,
        EnergyType::Drive,
        EnergyType::Spirit,
    ];

    /// Phase ids statically assigned to this axis.
    #[inline]
    pub fn member_phases(&self) -> &'static [u8] {
        match self {
            Self::Mind => &[1, 2, 8],
            Self::Heart => &[4, 7],
            Self::Drive => &[3, 6],
            Self::Spirit => &[5, 9, 10],
        }
    }

    /// The axis a phase id belongs to, or `None` for ids outside 1..=10.
    #[inline]
    pub fn for_phase(phase_id: u8) -> Option<EnergyType> {
        Self::ALL
            .iter()
            .copied()
            .find(|axis| axis.member_phases().contains(&phase_id))
    }

    /// Human-readable axis name as shown in the report.
    #[inline]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mind => "Mind",
            Self::Heart => "Heart",
            Self::Drive => "Drive",
            Self::Spirit => "Spirit",
        }
    }
}

impl fmt::Display for EnergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EnergyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mind" => Ok(Self::Mind),
            "heart" => Ok(Self::Heart),
            "drive" => Ok(Self::Drive),
            "spirit" => Ok(Self::Spirit),
            other => Err(CoreError::InvalidEnergyType(other.to_string())),
        }
    }
}

/// Per-axis average of phase totals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyAverages {
    /// Mean phase total over Mind phases present in the input.
    pub mind: f32,
    /// Mean phase total over Heart phases present in the input.
    pub heart: f32,
    /// Mean phase total over Drive phases present in the input.
    pub drive: f32,
    /// Mean phase total over Spirit phases present in the input.
    pub spirit: f32,
}

impl EnergyAverages {
    /// Average for a single axis.
    #[inline]
    pub fn get(&self, axis: EnergyType) -> f32 {
        match axis {
            EnergyType::Mind => self.mind,
            EnergyType::Heart => self.heart,
            EnergyType::Drive => self.drive,
            EnergyType::Spirit => self.spirit,
        }
    }

    /// Mutable access for a single axis.
    #[inline]
    pub fn get_mut(&mut self, axis: EnergyType) -> &mut f32 {
        match axis {
            EnergyType::Mind => &mut self.mind,
            EnergyType::Heart => &mut self.heart,
            EnergyType::Drive => &mut self.drive,
            EnergyType::Spirit => &mut self.spirit,
        }
    }
}

/// Aggregated energy profile of a completed quiz.
///
/// Derived data, never persisted. `dominant` is the axis with the strictly
/// highest average; equal averages resolve to the earliest axis in
/// [`EnergyType::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyProfile {
    /// Per-axis averages over member phases present in the input.
    pub averages: EnergyAverages,
    /// The dominant energy axis.
    #[serde(rename = "dominantEnergy")]
    pub dominant: EnergyType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_all_phases_once() {
        let mut seen = Vec::new();
        for axis in EnergyType::ALL {
            seen.extend_from_slice(axis.member_phases());
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_for_phase_lookup() {
        assert_eq!(EnergyType::for_phase(1), Some(EnergyType::Mind));
        assert_eq!(EnergyType::for_phase(4), Some(EnergyType::Heart));
        assert_eq!(EnergyType::for_phase(6), Some(EnergyType::Drive));
        assert_eq!(EnergyType::for_phase(9), Some(EnergyType::Spirit));
        assert_eq!(EnergyType::for_phase(0), None);
        assert_eq!(EnergyType::for_phase(11), None);
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(EnergyType::ALL[0], EnergyType::Mind);
        assert_eq!(EnergyType::ALL[3], EnergyType::Spirit);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for axis in EnergyType::ALL {
            let parsed: EnergyType = axis.display_name().parse().unwrap();
            assert_eq!(parsed, axis);
        }
        assert!("water".parse::<EnergyType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&EnergyType::Spirit).unwrap();
        assert_eq!(json, "\"spirit\"");
    }

    #[test]
    fn test_averages_accessors() {
        let mut avg = EnergyAverages::default();
        *avg.get_mut(EnergyType::Heart) = 12.5;
        assert_eq!(avg.get(EnergyType::Heart), 12.5);
        assert_eq!(avg.get(EnergyType::Mind), 0.0);
    }
}
