//! Relay de datos entre pasos (alcance de sesión).
//!
//! Independiente del `ProcessController`: guarda el último payload publicado
//! bajo una clave fija del store de sesión. Cada `publish` sobrescribe; leer
//! no limpia. Un valor ilegible o inválido se trata como ausente.
use chrono::{DateTime, Utc};
use city_domain::CityData;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::RELAY_STORAGE_KEY;
use crate::errors::ProcessError;
use crate::step::StepNumber;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub produced_by: StepNumber,
    pub produced_at: DateTime<Utc>,
    pub city_data: CityData,
}

impl RelayPayload {
    pub fn new(produced_by: StepNumber, city_data: CityData) -> Self {
        Self { produced_by, produced_at: Utc::now(), city_data }
    }
}

pub struct StepDataRelay<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StepDataRelay<S> {
    pub fn new(store: S) -> Self { Self::with_key(store, RELAY_STORAGE_KEY) }

    pub fn with_key(store: S, key: &str) -> Self { Self { store, key: key.to_string() } }

    pub fn storage_key(&self) -> &str { &self.key }

    pub fn publish(&mut self, payload: &RelayPayload) -> Result<(), ProcessError> {
        payload.city_data.validate().map_err(ProcessError::InvalidCityData)?;
        let raw = serde_json::to_string(payload).map_err(|e| ProcessError::Serialization(e.to_string()))?;
        self.store.set(&self.key, raw)?;
        debug!("relay publish key={} produced_by={}", self.key, payload.produced_by);
        Ok(())
    }

    pub fn consume(&self) -> Option<RelayPayload> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("relay store unavailable key={} error={e}", self.key);
                return None;
            }
        };
        let payload: RelayPayload = match serde_json::from_str(&raw) {
            Ok(p) => p,
            Err(e) => {
                warn!("relay payload unreadable key={} error={e}", self.key);
                return None;
            }
        };
        if let Err(e) = payload.city_data.validate() {
            warn!("relay payload rejected key={} error={e}", self.key);
            return None;
        }
        Some(payload)
    }

    pub fn into_store(self) -> S { self.store }
}
