//! Datos de ciudad producidos por el paso de adquisición.
//!
//! `CityData` es el payload que viaja entre pasos del proceso de evaluación:
//! - lo produce un `CityDataProvider` (descarga),
//! - lo modifica el paso de refinamiento,
//! - lo consume el paso de evaluación (selección de segmento) y el cálculo
//!   final del índice (externo a este crate).
//!
//! El esquema pertenece al dominio: quien acepta un `CityData` debe llamar a
//! `validate` en la frontera antes de guardarlo.
use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Segment, SegmentId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityData {
    pub city_id: String,
    pub name: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Métricas agregadas entregadas por el proveedor (nombre -> valor).
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    pub downloaded_at: DateTime<Utc>,
    #[serde(default)]
    pub refined: bool,
}

impl CityData {
    pub fn new(city_id: &str, name: &str, segments: Vec<Segment>) -> Result<Self, DomainError> {
        let data = CityData { city_id: city_id.trim().to_string(),
                              name: name.to_string(),
                              segments,
                              metrics: BTreeMap::new(),
                              downloaded_at: Utc::now(),
                              refined: false };
        data.validate()?;
        Ok(data)
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    /// Valida invariantes del esquema: id no vacío, ids de segmento únicos,
    /// longitudes finitas y no negativas, métricas finitas.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.city_id.trim().is_empty() {
            return Err(DomainError::ValidationError("cityId must not be empty".to_string()));
        }
        let mut seen = HashSet::new();
        for seg in &self.segments {
            if !seen.insert(seg.id.as_str()) {
                return Err(DomainError::ValidationError(format!("duplicate segment id '{}'", seg.id)));
            }
            if !seg.length_m.is_finite() || seg.length_m < 0.0 {
                return Err(DomainError::ValidationError(format!("segment '{}' has invalid length {}", seg.id, seg.length_m)));
            }
        }
        if let Some((k, v)) = self.metrics.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DomainError::ValidationError(format!("metric '{k}' is not finite ({v})")));
        }
        Ok(())
    }

    pub fn segment(&self, id: &SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| &s.id == id)
    }

    pub fn total_length_m(&self) -> f64 {
        self.segments.iter().map(|s| s.length_m).sum()
    }

    /// Refinamiento básico: descarta segmentos más cortos que `min_length_m`.
    /// Devuelve cuántos se eliminaron y marca los datos como refinados.
    pub fn drop_short_segments(&mut self, min_length_m: f64) -> usize {
        let before = self.segments.len();
        self.segments.retain(|s| s.length_m >= min_length_m);
        self.refined = true;
        before - self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentKind;

    fn seg(id: &str, len: f64) -> Segment {
        Segment::new(SegmentId::parse(id).unwrap(), SegmentKind::Road, len)
    }

    #[test]
    fn new_rejects_empty_city_id() {
        let err = CityData::new("  ", "Nowhere", vec![]).unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[test]
    fn duplicate_segment_ids_rejected() {
        let err = CityData::new("bog", "Bogotá", vec![seg("s1", 1.0), seg("s1", 2.0)]).unwrap_err();
        assert!(err.to_string().contains("duplicate segment id 's1'"));
    }

    #[test]
    fn negative_or_nan_lengths_rejected() {
        assert!(CityData::new("bog", "Bogotá", vec![seg("s1", -1.0)]).is_err());
        assert!(CityData::new("bog", "Bogotá", vec![seg("s1", f64::NAN)]).is_err());
    }

    #[test]
    fn non_finite_metric_rejected() {
        let data = CityData::new("bog", "Bogotá", vec![]).unwrap().with_metric("density", f64::INFINITY);
        assert!(data.validate().is_err());
    }

    #[test]
    fn drop_short_segments_marks_refined() {
        let mut data = CityData::new("bog", "Bogotá", vec![seg("s1", 5.0), seg("s2", 50.0), seg("s3", 500.0)]).unwrap();
        let removed = data.drop_short_segments(10.0);
        assert_eq!(removed, 1);
        assert!(data.refined);
        assert_eq!(data.total_length_m(), 550.0);
        assert!(data.segment(&SegmentId::parse("s1").unwrap()).is_none());
    }
}
