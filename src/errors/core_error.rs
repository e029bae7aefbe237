use city_core::{ProcessError, StageKind, StepNumber};
use city_domain::DomainError;
use city_persistence::PersistenceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de proceso: {0}")]
    Process(#[from] ProcessError),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de persistencia: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Etapa desconocida: paso {0}")]
    UnknownStage(StepNumber),
    #[error("El catálogo no define una etapa {0:?}")]
    MissingStage(StageKind),
    #[error("No hay datos de ciudad disponibles")]
    MissingCityData,
}
