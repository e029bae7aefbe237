//! Orquestador de una sesión de evaluación.
//!
//! `EvaluationSession` agrupa, por inyección explícita, el `ProcessController`
//! (estado durable) y el `StepDataRelay` (handoff de sesión) junto con el
//! catálogo de etapas. Implementa el flujo de control de cada pantalla:
//! leer el estado previo, hacer su trabajo, escribir su salida y marcar la
//! etapa como completada.
//!
//! Políticas de la sesión (no del controlador):
//! - `navigate` rechaza pasos que no están en el catálogo.
//! - Completar una etapa mueve el paso actual a la siguiente sólo si eso lo
//!   hace avanzar; nunca retrocede automáticamente.
//! - No se exige haber completado etapas previas para avanzar.
use city_core::{KeyValueStore, ProcessController, RelayPayload, Stage, StageKind, StepCatalog, StepDataRelay, StepNumber, StepStatus};
use city_domain::{CityData, CityDataProvider, DomainError, SegmentId};
use log::info;

use crate::errors::CoreError;

pub struct EvaluationSession<D: KeyValueStore, R: KeyValueStore> {
    controller: ProcessController<D>,
    relay: StepDataRelay<R>,
    catalog: StepCatalog,
}

impl<D: KeyValueStore, R: KeyValueStore> EvaluationSession<D, R> {
    pub fn new(controller: ProcessController<D>, relay: StepDataRelay<R>) -> Self {
        Self::with_catalog(controller, relay, StepCatalog::evaluation())
    }

    pub fn with_catalog(controller: ProcessController<D>, relay: StepDataRelay<R>, catalog: StepCatalog) -> Self {
        Self { controller, relay, catalog }
    }

    pub fn controller(&self) -> &ProcessController<D> { &self.controller }
    pub fn relay(&self) -> &StepDataRelay<R> { &self.relay }
    pub fn catalog(&self) -> &StepCatalog { &self.catalog }

    pub fn current_stage(&self) -> Option<&Stage> { self.catalog.stage(self.controller.current_step()) }

    /// Estado de cada etapa del catálogo, en orden, para la capa de render.
    pub fn stage_statuses(&self) -> Vec<(&Stage, StepStatus)> {
        self.catalog.iter().map(|s| (s, self.controller.step_status(s.number))).collect()
    }

    /// Datos con los que trabaja la etapa actual: el payload del relay sólo
    /// si hay `cityData` persistido de la misma ciudad; si no, lo persistido.
    /// Sin estado durable (proceso nuevo o reiniciado) el relay no se usa.
    pub fn working_city_data(&self) -> Option<CityData> {
        let persisted = self.controller.city_data()?;
        self.relay
            .consume()
            .map(|p| p.city_data)
            .filter(|d| d.city_id == persisted.city_id)
            .or_else(|| Some(persisted.clone()))
    }

    /// Etapa de adquisición: descarga, persiste, entrega al relay y avanza.
    pub fn acquire<P: CityDataProvider>(&mut self, provider: &P, city_id: &str) -> Result<&CityData, CoreError> {
        let step = self.stage_number(StageKind::Acquire)?;
        let data = provider.fetch(city_id)?;
        info!("acquired city={} via provider={} segments={}", data.city_id, provider.name(), data.segments.len());
        self.controller.update_city_data(data.clone())?;
        self.hand_off(step, data)?;
        self.finish_stage(step)?;
        self.controller.city_data().ok_or(CoreError::MissingCityData)
    }

    /// Etapa de refinamiento: descarta segmentos cortos. Devuelve cuántos.
    pub fn refine(&mut self, min_length_m: f64) -> Result<usize, CoreError> {
        let step = self.stage_number(StageKind::Refine)?;
        if !min_length_m.is_finite() || min_length_m < 0.0 {
            return Err(DomainError::ValidationError(format!("min length must be a non-negative number, got {min_length_m}")).into());
        }
        let mut data = self.working_city_data().ok_or(CoreError::MissingCityData)?;
        let removed = data.drop_short_segments(min_length_m);
        info!("refined city={} removed={} remaining={}", data.city_id, removed, data.segments.len());
        self.controller.update_city_data(data.clone())?;
        self.hand_off(step, data)?;
        self.finish_stage(step)?;
        Ok(removed)
    }

    /// Etapa de evaluación: elige un segmento existente en los datos.
    pub fn select_segment(&mut self, segment_id: &str) -> Result<SegmentId, CoreError> {
        let step = self.stage_number(StageKind::Evaluate)?;
        let data = self.working_city_data().ok_or(CoreError::MissingCityData)?;
        let id = SegmentId::parse(segment_id)?;
        if data.segment(&id).is_none() {
            return Err(DomainError::NotFound(format!("segment '{id}' in city '{}'", data.city_id)).into());
        }
        self.controller.set_selected_segment(id.as_str())?;
        self.finish_stage(step)?;
        Ok(id)
    }

    /// Mueve al siguiente paso del catálogo. `None` si ya es el último.
    pub fn advance(&mut self) -> Result<Option<StepNumber>, CoreError> {
        let next = self.catalog.next_after(self.controller.current_step());
        if let Some(step) = next {
            self.controller.set_current_step(step)?;
        }
        Ok(next)
    }

    /// Mueve al paso anterior del catálogo. `None` si ya es el primero.
    pub fn retreat(&mut self) -> Result<Option<StepNumber>, CoreError> {
        let prev = self.catalog.previous_before(self.controller.current_step());
        if let Some(step) = prev {
            self.controller.set_current_step(step)?;
        }
        Ok(prev)
    }

    pub fn navigate(&mut self, step: StepNumber) -> Result<(), CoreError> {
        if !self.catalog.contains(step) {
            return Err(CoreError::UnknownStage(step));
        }
        self.controller.set_current_step(step)?;
        Ok(())
    }

    pub fn complete(&mut self, step: StepNumber) -> Result<(), CoreError> {
        if !self.catalog.contains(step) {
            return Err(CoreError::UnknownStage(step));
        }
        self.controller.complete_step(step)?;
        Ok(())
    }

    /// Reinicia el proceso durable. El relay expira con la sesión; mientras
    /// no haya `cityData` persistido su valor se ignora.
    pub fn reset(&mut self) -> Result<(), CoreError> {
        self.controller.reset_process()?;
        info!("evaluation process reset");
        Ok(())
    }

    pub fn into_parts(self) -> (ProcessController<D>, StepDataRelay<R>) { (self.controller, self.relay) }

    fn stage_number(&self, kind: StageKind) -> Result<StepNumber, CoreError> {
        self.catalog.stage_of_kind(kind).map(|s| s.number).ok_or(CoreError::MissingStage(kind))
    }

    fn hand_off(&mut self, step: StepNumber, data: CityData) -> Result<(), CoreError> {
        self.relay.publish(&RelayPayload::new(step, data))?;
        Ok(())
    }

    fn finish_stage(&mut self, step: StepNumber) -> Result<(), CoreError> {
        self.controller.complete_step(step)?;
        if let Some(next) = self.catalog.next_after(step) {
            if next > self.controller.current_step() {
                self.controller.set_current_step(next)?;
            }
        }
        Ok(())
    }
}
