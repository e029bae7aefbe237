//! Errores específicos del core.

use city_domain::DomainError;
use thiserror::Error;

/// Fallos de la primitiva clave-valor.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("storage unavailable: {0}")] Unavailable(String),
    #[error("storage io error: {0}")] Io(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ProcessError {
    #[error("invalid step number {0} (steps start at 1)")] InvalidStep(u32),
    #[error("invalid step reference '{0}'")] InvalidStepInput(String),
    #[error("invalid segment id: {0}")] InvalidSegment(String),
    #[error("invalid city data: {0}")] InvalidCityData(DomainError),
    #[error("serialization failed: {0}")] Serialization(String),
    #[error("durable write rejected: {0}")] StorageUnavailable(#[from] StoreError),
}
