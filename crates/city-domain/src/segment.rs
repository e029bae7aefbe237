//! Segmentos de infraestructura (tramos de vía, ciclovías, etc.).
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Identificador de un segmento. Nunca vacío (se normaliza con `trim`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SegmentId(String);

impl SegmentId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError("segment id must not be empty".to_string()));
        }
        Ok(SegmentId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl TryFrom<String> for SegmentId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self, Self::Error> { SegmentId::parse(&value) }
}

impl From<SegmentId> for String {
    fn from(id: SegmentId) -> Self { id.0 }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Road,
    CycleLane,
    Footpath,
    Transit,
    Other,
}

/// Tramo individual de infraestructura descargado por el proveedor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    #[serde(default)]
    pub name: Option<String>,
    pub kind: SegmentKind,
    pub length_m: f64,
}

impl Segment {
    pub fn new(id: SegmentId, kind: SegmentKind, length_m: f64) -> Self {
        Self { id, name: None, kind, length_m }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
