//! city-core: controlador de progreso del proceso de evaluación y relay de
//! datos entre pasos.
pub mod constants;
pub mod controller;
pub mod errors;
pub mod relay;
pub mod state;
pub mod step;
pub mod store;

pub use controller::{ProcessController, StateOrigin};
pub use errors::{ProcessError, StoreError};
pub use relay::{RelayPayload, StepDataRelay};
pub use state::WorkflowState;
pub use step::{Stage, StageKind, StepCatalog, StepNumber, StepStatus};
pub use store::{InMemoryKeyValueStore, KeyValueStore};
