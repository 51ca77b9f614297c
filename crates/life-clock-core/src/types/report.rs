//! The composed final report.
//!
//! Built once per completed quiz session and read-only afterward. Consumed
//! by the result page, the PDF generator and the payment-confirmation
//! email; serialized as camelCase JSON for those surfaces.

use serde::{Deserialize, Serialize};

use super::energy::{EnergyProfile, EnergyType};
use super::force::HiddenForces;
use super::revelation::Revelation;
use super::stage::LifeIndexResult;

/// One point of the life curve: a phase's score as a percentage of the
/// per-phase maximum, in phase-id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeCurvePoint {
    /// Phase id in 1..=10.
    pub phase: u8,
    /// Phase title, used as the curve label.
    pub label: String,
    /// Rounded percentage of the 30-point phase maximum, clamped 0..=100.
    pub value: u8,
}

/// Summary block for the result page header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// The life index, 0..=100.
    pub score: u8,
    /// Full stage label.
    pub stage: String,
    /// Dominant energy axis.
    pub dominant_energy: EnergyType,
    /// Archetype name for the dominant axis.
    pub archetype_name: String,
    /// Archetype emoji for the dominant axis.
    pub archetype_emoji: String,
    /// Archetype one-liner for the dominant axis.
    pub archetype_message: String,
}

/// The complete Life Clock report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeClockFinalReport {
    /// Aggregated energy profile.
    pub profile: EnergyProfile,
    /// Normalized life index and stage.
    pub life_index: LifeIndexResult,
    /// Per-phase curve points in phase-id order.
    pub life_curve: Vec<LifeCurvePoint>,
    /// Destiny phrase (essence sentence + index-banded suffix).
    pub destiny: String,
    /// Archetype name, lifted from the summary for direct rendering.
    pub archetype: String,
    /// Result page summary block.
    pub summary: ResultSummary,
    /// Shadow/fear/power forces.
    pub forces: HiddenForces,
    /// The 47 numbered revelations in final order.
    pub revelations: Vec<Revelation>,
}
