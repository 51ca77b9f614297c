//! Core error types.

use thiserror::Error;

/// Errors raised by core domain type operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string could not be parsed into an `EnergyType`.
    #[error("Unknown energy type: '{0}'. Expected one of: mind, heart, drive, spirit")]
    InvalidEnergyType(String),

    /// A string could not be parsed into a `ForceType`.
    #[error("Unknown force type: '{0}'. Expected one of: shadow, fear, power")]
    InvalidForceType(String),

    /// A string could not be parsed into a `RevelationCategory`.
    #[error("Unknown revelation category: '{0}'")]
    InvalidCategory(String),

    /// A string could not be parsed into a `LifeStage`.
    #[error("Unknown life stage: '{0}'. Expected one of: sleeper, wanderer, alchemist, luminary")]
    InvalidStage(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_energy_type_display() {
        let err = CoreError::InvalidEnergyType("water".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("water"));
        assert!(msg.contains("mind, heart, drive, spirit"));
    }

    #[test]
    fn test_invalid_force_type_display() {
        let err = CoreError::InvalidForceType("doubt".to_string());
        assert!(format!("{}", err).contains("doubt"));
    }

    #[test]
    fn test_invalid_stage_display() {
        let err = CoreError::InvalidStage("dreamer".to_string());
        assert!(format!("{}", err).contains("dreamer"));
    }
}
