//! Errores de persistencia.
//! Mapea errores de IO del sistema de archivos a variantes semánticas y de ahí
//! a `StoreError` del core.

use std::io;

use city_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    #[error("storage directory unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::Unavailable(msg) => StoreError::Unavailable(msg),
            PersistenceError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => StoreError::Unavailable(e.to_string()),
            other => StoreError::Io(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_maps_to_unavailable() {
        let err = PersistenceError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(matches!(StoreError::from(err), StoreError::Unavailable(_)));
    }

    #[test]
    fn invalid_key_maps_to_io() {
        let err = PersistenceError::InvalidKey("../x".into());
        assert_eq!(StoreError::from(err), StoreError::Io("invalid storage key: ../x".into()));
    }
}
