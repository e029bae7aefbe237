//! city-persistence
//!
//! Backend durable del `KeyValueStore` del core: un archivo JSON por clave
//! dentro de un directorio raíz. Sustituye al almacenamiento del navegador
//! (sobrevive reinicios completos de la aplicación).
//!
//! Módulos:
//! - `file`: `FileKeyValueStore` (escrituras completas vía archivo temporal +
//!   rename).
//! - `config`: carga de configuración desde .env.
//! - `error`: errores de persistencia y su mapeo a `StoreError`.

pub mod config;
pub mod error;
pub mod file;

pub use config::{init_dotenv, StoreConfig};
pub use error::PersistenceError;
pub use file::FileKeyValueStore;
