//! Errores del dominio de ciudades.

use thiserror::Error;

/// Error del dominio (validación de datos de ciudad y proveedores externos).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Error externo: {0}")]
    ExternalError(String),

    #[error("Error de serialización: {0}")]
    SerializationError(String),

    #[error("Entidad no encontrada: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
