//! Unified error types for the domain layer
//!
//! The simulation is total over its documented inputs: gauges clamp instead of
//! failing. Errors are reserved for caller mistakes such as unknown action
//! kinds or malformed labels coming in from outer layers.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a non-positive energy grant)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Caller supplied an input the engine does not understand
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if amount == 0 {
    ///     return Err(DomainError::validation("energy grant must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// ```ignore
    /// impl FromStr for GrowthStage {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "baby" => Ok(Self::Baby),
    ///             _ => Err(DomainError::parse(format!("Unknown growth stage: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
