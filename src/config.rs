//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`) con la configuración del store durable y el directorio del que
//! lee el proveedor de datos de ciudad.
use std::env;
use std::path::PathBuf;

use city_persistence::{init_dotenv, StoreConfig};
use once_cell::sync::Lazy;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Store durable (directorio de estado y clave del proceso).
    pub store: StoreConfig,
    /// Directorio con los datasets `<city_id>.json` del proveedor.
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let data_dir = lookup("CITYFLOW_DATA_DIR").filter(|v| !v.trim().is_empty())
                                                  .map(PathBuf::from)
                                                  .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        AppConfig { store: StoreConfig::from_lookup(&lookup), data_dir }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);
