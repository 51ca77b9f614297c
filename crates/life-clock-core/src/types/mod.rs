//! Core domain types for the Life Clock report engine.

mod energy;
mod force;
mod phase;
mod report;
mod revelation;
mod stage;

pub use energy::{EnergyAverages, EnergyProfile, EnergyType};
pub use force::{ForceType, HiddenForce, HiddenForces};
pub use phase::{PhaseAnswer, PhaseResult};
pub use report::{LifeClockFinalReport, LifeCurvePoint, ResultSummary};
pub use revelation::{Revelation, RevelationCategory};
pub use stage::{LifeIndexResult, LifeStage};
