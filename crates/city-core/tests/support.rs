#![allow(dead_code)]

use city_core::{KeyValueStore, StepNumber, StoreError};
use city_domain::{CityData, Segment, SegmentId, SegmentKind};

pub fn step(n: u32) -> StepNumber { StepNumber::new(n).expect("positive step") }

pub fn sample_city(id: &str) -> CityData {
    let segments = vec![Segment::new(SegmentId::parse("s-1").unwrap(), SegmentKind::Road, 120.0),
                        Segment::new(SegmentId::parse("s-2").unwrap(), SegmentKind::CycleLane, 8.0)];
    CityData::new(id, "Sample City", segments).expect("valid sample")
}

/// Store que puede fallar en lectura y/o escritura.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: city_core::InMemoryKeyValueStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: usize,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("reads disabled".into()));
        }
        self.inner.get(key)
    }
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io("disk full".into()));
        }
        self.writes += 1;
        self.inner.set(key, value)
    }
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io("disk full".into()));
        }
        self.inner.remove(key)
    }
}
