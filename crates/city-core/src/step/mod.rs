//! Definiciones relacionadas a Steps.
//!
//! Un step es una etapa del proceso guiado identificada por un entero
//! positivo. Este módulo define:
//! - `StepNumber`: número de paso (>= 1).
//! - `StepStatus`: estado observable de un paso para la capa de render.
//! - `StepCatalog` / `Stage`: catálogo ordenado de etapas conocidas.

mod catalog;
mod number;
mod status;

pub use catalog::{Stage, StageKind, StepCatalog};
pub use number::StepNumber;
pub use status::StepStatus;
