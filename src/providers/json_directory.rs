//! Proveedor que lee datasets de ciudad ya descargados desde un directorio.
//!
//! Cada ciudad es un archivo `<dir>/<city_id>.json` con la forma serializada de
//! `CityData`. El archivo debe declarar el mismo `cityId` que se pidió.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use city_domain::{CityData, CityDataProvider, DomainError};
use log::debug;

pub struct JsonDirectoryProvider {
    dir: PathBuf,
}

impl JsonDirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }
}

impl CityDataProvider for JsonDirectoryProvider {
    fn name(&self) -> &str { "json-directory" }

    fn fetch(&self, city_id: &str) -> Result<CityData, DomainError> {
        let valid_id = !city_id.is_empty() && city_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_id {
            return Err(DomainError::ValidationError(format!("invalid city id '{city_id}'")));
        }
        let path = self.dir.join(format!("{city_id}.json"));
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
                                                 ErrorKind::NotFound => DomainError::NotFound(format!("city '{city_id}'")),
                                                 _ => DomainError::ExternalError(format!("{}: {e}", path.display())),
                                             })?;
        let data: CityData = serde_json::from_str(&raw)?;
        if data.city_id != city_id {
            return Err(DomainError::ValidationError(format!("file {} declares cityId '{}'", path.display(), data.city_id)));
        }
        data.validate()?;
        debug!("provider={} loaded city={} segments={}", self.name(), city_id, data.segments.len());
        Ok(data)
    }
}
