//! Controlador del proceso: única fuente de verdad del progreso.
//!
//! Rol:
//! - Carga el `WorkflowState` persistido UNA vez al construirse. Registro
//!   ausente, ilegible o con esquema inválido -> estado por defecto (se
//!   registra con `warn!`, nunca se propaga al llamador).
//! - Mantiene el estado en memoria y, tras cada mutación, reescribe el objeto
//!   completo en el store durable (sin escrituras parciales ni debounce).
//! - Si la escritura durable falla, la mutación no se aplica en memoria y se
//!   devuelve `ProcessError::StorageUnavailable`; memoria y store quedan
//!   reconciliados.
//!
//! El controlador no valida el orden de los pasos: navegar o completar pasos
//! fuera de secuencia es política del llamador.
use std::collections::BTreeSet;

use city_domain::{CityData, SegmentId};
use log::{debug, warn};

use crate::constants::PROCESS_STORAGE_KEY;
use crate::errors::ProcessError;
use crate::state::WorkflowState;
use crate::step::{StepNumber, StepStatus};
use crate::store::KeyValueStore;

/// Cómo se obtuvo el estado inicial del controlador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    /// No había registro durable.
    Fresh,
    /// Se restauró un registro válido.
    Restored,
    /// Había registro pero era ilegible (o el store falló); se usaron defaults.
    Recovered,
}

pub struct ProcessController<S: KeyValueStore> {
    store: S,
    key: String,
    state: WorkflowState,
    origin: StateOrigin,
}

impl<S: KeyValueStore> ProcessController<S> {
    pub fn new(store: S) -> Self { Self::with_key(store, PROCESS_STORAGE_KEY) }

    pub fn with_key(store: S, key: &str) -> Self {
        let (state, origin) = load_state(&store, key);
        debug!("process controller ready key={key} origin={origin:?} current_step={}", state.current_step);
        Self { store, key: key.to_string(), state, origin }
    }

    pub fn state(&self) -> &WorkflowState { &self.state }
    pub fn origin(&self) -> StateOrigin { self.origin }
    pub fn storage_key(&self) -> &str { &self.key }
    pub fn current_step(&self) -> StepNumber { self.state.current_step }
    pub fn city_data(&self) -> Option<&CityData> { self.state.city_data.as_ref() }
    pub fn selected_segment_id(&self) -> Option<&SegmentId> { self.state.selected_segment_id.as_ref() }
    pub fn completed_steps(&self) -> &BTreeSet<StepNumber> { &self.state.completed_steps }

    pub fn is_step_completed(&self, step: StepNumber) -> bool { self.state.completed_steps.contains(&step) }

    pub fn step_status(&self, step: StepNumber) -> StepStatus {
        StepStatus::from_flags(self.state.current_step == step, self.is_step_completed(step))
    }

    /// Reemplaza `cityData` (validado en la frontera); el resto se conserva.
    pub fn update_city_data(&mut self, data: CityData) -> Result<(), ProcessError> {
        data.validate().map_err(ProcessError::InvalidCityData)?;
        let mut next = self.state.clone();
        next.city_data = Some(data);
        self.commit(next)
    }

    /// Fija el paso actual sin comprobar alcanzabilidad.
    pub fn set_current_step(&mut self, step: StepNumber) -> Result<(), ProcessError> {
        let mut next = self.state.clone();
        next.current_step = step;
        self.commit(next)
    }

    /// Marca `step` como completado. Idempotente; persiste igualmente.
    pub fn complete_step(&mut self, step: StepNumber) -> Result<(), ProcessError> {
        let mut next = self.state.clone();
        next.completed_steps.insert(step);
        self.commit(next)
    }

    pub fn set_selected_segment(&mut self, id: &str) -> Result<(), ProcessError> {
        let id = SegmentId::parse(id).map_err(|e| ProcessError::InvalidSegment(e.to_string()))?;
        let mut next = self.state.clone();
        next.selected_segment_id = Some(id);
        self.commit(next)
    }

    /// Vuelve a defaults y elimina la clave durable (no la sobrescribe).
    pub fn reset_process(&mut self) -> Result<(), ProcessError> {
        if let Err(e) = self.store.remove(&self.key) {
            warn!("reset_process: could not remove key={} error={e}", self.key);
            return Err(e.into());
        }
        self.state = WorkflowState::default();
        debug!("process reset key={}", self.key);
        Ok(())
    }

    /// Devuelve el store (p. ej. para simular una recarga en tests).
    pub fn into_store(self) -> S { self.store }

    fn commit(&mut self, next: WorkflowState) -> Result<(), ProcessError> {
        let raw = next.to_json()?;
        if let Err(e) = self.store.set(&self.key, raw) {
            warn!("durable write failed key={} error={e}", self.key);
            return Err(e.into());
        }
        self.state = next;
        Ok(())
    }
}

fn load_state<S: KeyValueStore>(store: &S, key: &str) -> (WorkflowState, StateOrigin) {
    match store.get(key) {
        Ok(None) => (WorkflowState::default(), StateOrigin::Fresh),
        Ok(Some(raw)) => match WorkflowState::from_json(&raw) {
            Ok(state) => (state, StateOrigin::Restored),
            Err(e) => {
                warn!("persisted state unreadable key={key} error={e}; using defaults");
                (WorkflowState::default(), StateOrigin::Recovered)
            }
        },
        Err(e) => {
            warn!("durable store unavailable key={key} error={e}; using defaults");
            (WorkflowState::default(), StateOrigin::Recovered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryKeyValueStore;

    fn n(v: u32) -> StepNumber { StepNumber::new(v).unwrap() }

    #[test]
    fn every_mutation_rewrites_full_record() {
        let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
        ctl.set_current_step(n(3)).unwrap();
        ctl.set_selected_segment("seg-1").unwrap();
        let store = ctl.into_store();
        let raw = store.get(PROCESS_STORAGE_KEY).unwrap().expect("record written");
        let stored = WorkflowState::from_json(&raw).unwrap();
        assert_eq!(stored.current_step, n(3));
        assert_eq!(stored.selected_segment_id.unwrap().as_str(), "seg-1");
    }

    #[test]
    fn blank_segment_is_rejected_without_write() {
        let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
        assert!(matches!(ctl.set_selected_segment("  "), Err(ProcessError::InvalidSegment(_))));
        assert!(ctl.into_store().is_empty());
    }

    #[test]
    fn step_status_badges() {
        let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
        ctl.complete_step(n(1)).unwrap();
        assert_eq!(ctl.step_status(n(1)), StepStatus::Revisiting);
        ctl.set_current_step(n(2)).unwrap();
        assert_eq!(ctl.step_status(n(1)), StepStatus::Completed);
        assert_eq!(ctl.step_status(n(2)), StepStatus::Current);
        assert_eq!(ctl.step_status(n(3)), StepStatus::Pending);
    }

    #[test]
    fn custom_key_is_used() {
        let mut ctl = ProcessController::with_key(InMemoryKeyValueStore::new(), "other");
        ctl.complete_step(n(2)).unwrap();
        assert_eq!(ctl.storage_key(), "other");
        let store = ctl.into_store();
        assert!(store.contains_key("other"));
        assert!(!store.contains_key(PROCESS_STORAGE_KEY));
    }
}
