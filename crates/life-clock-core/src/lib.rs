//! Life Clock Core Library
//!
//! Provides the core domain types shared by the Life Clock scoring and
//! report-generation engine and its consumers (result page, PDF renderer,
//! transactional email).
//!
//! # Architecture
//!
//! This crate defines:
//! - Quiz domain types (`PhaseAnswer`, `PhaseResult`)
//! - Energy axis types (`EnergyType`, `EnergyProfile`)
//! - Maturity types (`LifeStage`, `LifeIndexResult`)
//! - Hidden force types (`ForceType`, `HiddenForce`, `HiddenForces`)
//! - Narrative types (`RevelationCategory`, `Revelation`)
//! - The composed report (`LifeClockFinalReport`)
//! - Error types and result aliases
//!
//! All types are plain in-memory data with serde support; no I/O happens in
//! this crate.
//!
//! # Example
//!
//! ```
//! use life_clock_core::types::{EnergyType, PhaseResult};
//!
//! let result = PhaseResult::new(1, "Origins", 24, "The Rooted One");
//! assert_eq!(result.energy(), Some(EnergyType::Mind));
//! ```

pub mod error;
pub mod types;

// Re-exports for convenience
pub use error::{CoreError, CoreResult};
pub use types::{
    EnergyAverages, EnergyProfile, EnergyType, ForceType, HiddenForce, HiddenForces,
    LifeClockFinalReport, LifeCurvePoint, LifeIndexResult, LifeStage, PhaseAnswer, PhaseResult,
    ResultSummary, Revelation, RevelationCategory,
};
