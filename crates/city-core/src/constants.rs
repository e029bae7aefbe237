//! Constantes del core.
//!
//! Las claves de almacenamiento forman parte del contrato de persistencia:
//! cambiarlas hace que los registros ya guardados dejen de encontrarse y el
//! proceso arranque de nuevo en el paso 1.

/// Clave fija del registro durable de `WorkflowState`.
pub const PROCESS_STORAGE_KEY: &str = "cityflow.evaluation_process";

/// Clave fija (de sesión) del payload del relay. Distinta de la durable.
pub const RELAY_STORAGE_KEY: &str = "cityflow.step_data";
