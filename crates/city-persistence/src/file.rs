//! `FileKeyValueStore`: implementación durable de `KeyValueStore`.
//!
//! - Cada clave es un archivo `<root>/<key>.json`.
//! - `set` escribe el valor completo en un temporal y lo renombra encima del
//!   destino: un lector nunca ve una escritura a medias.
//! - `remove` borra el archivo; si no existe, no es error.
//! - Las claves se restringen a `[A-Za-z0-9._-]` y no pueden empezar por `.`
//!   (evita salir del directorio raíz y choca con los temporales).
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use city_core::{KeyValueStore, StoreError};
use log::{debug, warn};

use crate::config::StoreConfig;
use crate::error::PersistenceError;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Abre (y crea si hace falta) el directorio raíz.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| PersistenceError::Unavailable(format!("{}: {e}", root.display())))?;
        debug!("file store opened root={}", root.display());
        Ok(Self { root })
    }

    pub fn from_config(cfg: &StoreConfig) -> Result<Self, PersistenceError> { Self::open(&cfg.state_dir) }

    pub fn root(&self) -> &Path { &self.root }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_key(key: &str) -> Result<(), PersistenceError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-');
    if key.is_empty() || key.starts_with('.') || !key.chars().all(allowed) {
        return Err(PersistenceError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.read(key).map_err(|e| {
            warn!("file store read failed key={key} error={e}");
            e.into()
        })
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.write(key, &value).map_err(|e| {
            warn!("file store write failed key={key} error={e}");
            e.into()
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.delete(key).map_err(|e| {
            warn!("file store remove failed key={key} error={e}");
            e.into()
        })
    }
}
