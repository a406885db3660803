//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock rules). Missing records and storage faults belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank name, oversized unit).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Consumption would take stock below zero under a policy that forbids it.
    #[error("insufficient stock: {available} available, {requested} requested")]
    InsufficientStock { available: f64, requested: f64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient(available: f64, requested: f64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }
}
