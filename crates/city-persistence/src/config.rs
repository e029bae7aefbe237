//! Carga de configuración de almacenamiento desde variables de entorno.
//! Usa `CITYFLOW_STATE_DIR` y `CITYFLOW_PROCESS_KEY` (ambas opcionales).

use std::env;
use std::path::PathBuf;

use city_core::constants::PROCESS_STORAGE_KEY;
use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_STATE_DIR: &str = ".cityflow";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub state_dir: PathBuf,
    pub process_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { state_dir: PathBuf::from(DEFAULT_STATE_DIR), process_key: PROCESS_STORAGE_KEY.to_string() }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Igual que `from_env` pero con una función de búsqueda inyectable.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let state_dir = lookup("CITYFLOW_STATE_DIR").filter(|v| !v.trim().is_empty())
                                                     .map(PathBuf::from)
                                                     .unwrap_or(defaults.state_dir);
        let process_key = lookup("CITYFLOW_PROCESS_KEY").filter(|v| !v.trim().is_empty())
                                                         .unwrap_or(defaults.process_key);
        Self { state_dir, process_key }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }
