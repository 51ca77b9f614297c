//! Life Clock scoring and report-generation engine.
//!
//! This crate is the deterministic core of the Life Clock funnel: raw
//! per-phase answer scores in, one personalized report out. The pipeline
//! is strictly one-directional:
//!
//! ```text
//! answers -> phase evaluation -> {energy profile, life index}
//!         -> {destiny, forces, insights} -> composed report
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and result aliases
//! - [`phases`]: Static phase catalog and per-phase evaluation
//! - [`energy`]: Energy profile aggregation over the four axes
//! - [`life_index`]: Life index normalization and stage banding
//! - [`forces`]: Hidden forces analysis (shadow/fear/power)
//! - [`destiny`]: Destiny phrase and result summary generators
//! - [`insight`]: The 47-revelation generation pipeline
//! - [`report`]: Final report composition
//!
//! # Determinism
//!
//! Every function here is a pure function of its arguments. The
//! "random-looking" quote selection is seeded from the input data via
//! FNV-1a and xorshift, so identical sessions always produce
//! byte-identical reports; that property is what lets repeat visits and
//! regression tests see stable text.
//!
//! # Example
//!
//! ```
//! use life_clock_core::types::PhaseResult;
//! use life_clock_engine::report::compose_report;
//!
//! let results: Vec<PhaseResult> = (1..=10)
//!     .map(|id| PhaseResult::new(id, format!("Phase {}", id), 20, "Archetype"))
//!     .collect();
//!
//! let report = compose_report(&results).unwrap();
//! assert_eq!(report.life_index.life_index, 67);
//! assert_eq!(report.revelations.len(), 47);
//! ```

pub mod destiny;
pub mod energy;
pub mod error;
pub mod forces;
pub mod insight;
pub mod life_index;
pub mod phases;
pub mod report;

// Re-export commonly used items from this crate
pub use error::{EngineError, EngineResult};
pub use insight::{generate_insights, InsightGenerator, REVELATION_COUNT};
pub use report::{compose_report, ReportComposer};

// Re-export core types from life-clock-core (DO NOT DUPLICATE)
pub use life_clock_core::types::{
    EnergyAverages, EnergyProfile, EnergyType, ForceType, HiddenForce, HiddenForces,
    LifeClockFinalReport, LifeCurvePoint, LifeIndexResult, LifeStage, PhaseAnswer, PhaseResult,
    ResultSummary, Revelation, RevelationCategory,
};
