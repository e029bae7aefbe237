//! Estado durable del proceso (`WorkflowState`).
//!
//! Forma persistida (JSON, camelCase):
//! `{"currentStep":1,"cityData":null,"selectedSegmentId":null,"completedSteps":[]}`
//!
//! `completedSteps` es un `BTreeSet`: los duplicados desaparecen tanto al
//! escribir como al leer un registro antiguo que los contuviera.
use std::collections::BTreeSet;

use city_domain::{CityData, SegmentId};
use serde::{Deserialize, Serialize};

use crate::errors::ProcessError;
use crate::step::StepNumber;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub current_step: StepNumber,
    #[serde(default)]
    pub city_data: Option<CityData>,
    #[serde(default)]
    pub selected_segment_id: Option<SegmentId>,
    #[serde(default)]
    pub completed_steps: BTreeSet<StepNumber>,
}

impl WorkflowState {
    pub fn is_default(&self) -> bool { *self == WorkflowState::default() }

    pub fn to_json(&self) -> Result<String, ProcessError> {
        serde_json::to_string(self).map_err(|e| ProcessError::Serialization(e.to_string()))
    }

    /// Parsea un registro persistido y revalida `cityData` en la frontera.
    pub fn from_json(raw: &str) -> Result<Self, ProcessError> {
        let state: WorkflowState = serde_json::from_str(raw).map_err(|e| ProcessError::Serialization(e.to_string()))?;
        if let Some(data) = &state.city_data {
            data.validate().map_err(ProcessError::InvalidCityData)?;
        }
        Ok(state)
    }
}
