//! CityFlow Rust Library
//!
//! Este crate actúa como la librería de aplicación de CityFlow:
//! - Expone `config` (variables de entorno / .env).
//! - Expone `errors` con el error de aplicación `CoreError`.
//! - Expone `providers` (fuentes de datos de ciudad).
//! - Expone `session` (`EvaluationSession`, orquestación de etapas).
//!
//! El estado y su persistencia viven en `city-core` y `city-persistence`.

pub mod config;
pub mod errors;
pub mod providers;
pub mod session;

pub use config::{AppConfig, CONFIG};
pub use errors::CoreError;
pub use providers::JsonDirectoryProvider;
pub use session::EvaluationSession;
