//! Catálogo de etapas del proceso de evaluación.
//!
//! El controlador no valida números de paso contra el catálogo; el catálogo
//! lo usan los llamadores (sesión, CLI) para navegar y para decidir qué hacer
//! con referencias a pasos sin pantalla.
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::StepNumber;
use crate::errors::ProcessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageKind { Acquire, Refine, Evaluate, Results }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub number: StepNumber,
    pub id: &'static str,
    pub name: &'static str,
    pub kind: StageKind,
}

/// Lista de etapas ordenada por número, sin duplicados.
#[derive(Debug, Clone)]
pub struct StepCatalog { stages: Vec<Stage> }

impl StepCatalog {
    pub fn new(mut stages: Vec<Stage>) -> Result<Self, ProcessError> {
        stages.sort_by_key(|s| s.number);
        if let Some(dup) = stages.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(ProcessError::InvalidStepInput(format!("duplicate stage number {}", dup[0].number)));
        }
        Ok(Self { stages })
    }

    /// Las cuatro etapas estándar: descarga, refinamiento, evaluación,
    /// resultados.
    pub fn evaluation() -> Self {
        let standard = [("acquire", "Select & download city data", StageKind::Acquire),
                        ("refine", "Refine data", StageKind::Refine),
                        ("evaluate", "Evaluate structure", StageKind::Evaluate),
                        ("results", "View results", StageKind::Results)];
        // números consecutivos desde 1: nunca hay duplicados
        let stages = (0u32..).zip(standard)
                             .map(|(offset, (id, name, kind))| Stage { number: StepNumber::from_nonzero(NonZeroU32::MIN.saturating_add(offset)),
                                                                       id,
                                                                       name,
                                                                       kind })
                             .collect();
        Self { stages }
    }

    pub fn stage(&self, step: StepNumber) -> Option<&Stage> { self.stages.iter().find(|s| s.number == step) }

    pub fn stage_of_kind(&self, kind: StageKind) -> Option<&Stage> { self.stages.iter().find(|s| s.kind == kind) }

    pub fn contains(&self, step: StepNumber) -> bool { self.stage(step).is_some() }

    pub fn next_after(&self, step: StepNumber) -> Option<StepNumber> {
        self.stages.iter().map(|s| s.number).find(|n| *n > step)
    }

    pub fn previous_before(&self, step: StepNumber) -> Option<StepNumber> {
        self.stages.iter().rev().map(|s| s.number).find(|n| *n < step)
    }

    pub fn first(&self) -> Option<&Stage> { self.stages.first() }

    pub fn last(&self) -> Option<&Stage> { self.stages.last() }

    /// El último paso es simplemente el que no tiene siguiente destino.
    pub fn is_last(&self, step: StepNumber) -> bool { self.contains(step) && self.next_after(step).is_none() }

    pub fn len(&self) -> usize { self.stages.len() }

    pub fn is_empty(&self) -> bool { self.stages.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> { self.stages.iter() }
}
