//! El controlador sobre el store de archivos: recargas reales desde disco.

use city_core::constants::PROCESS_STORAGE_KEY;
use city_core::{KeyValueStore, ProcessController, StateOrigin, StepNumber};
use city_domain::{CityData, Segment, SegmentId, SegmentKind};
use city_persistence::FileKeyValueStore;
use tempfile::TempDir;

fn step(n: u32) -> StepNumber { StepNumber::new(n).unwrap() }

fn open(dir: &TempDir) -> ProcessController<FileKeyValueStore> {
    ProcessController::new(FileKeyValueStore::open(dir.path()).expect("open store"))
}

#[test]
fn scenario_survives_process_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut ctl = open(&dir);
        assert_eq!(ctl.origin(), StateOrigin::Fresh);
        ctl.set_current_step(step(2)).unwrap();
        ctl.complete_step(step(1)).unwrap();
    }
    let ctl = open(&dir);
    assert_eq!(ctl.origin(), StateOrigin::Restored);
    assert_eq!(ctl.current_step(), step(2));
    assert!(ctl.is_step_completed(step(1)));
    assert!(!ctl.is_step_completed(step(2)));
}

#[test]
fn city_data_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let city = CityData::new("bog", "Bogotá", vec![Segment::new(SegmentId::parse("k7").unwrap(), SegmentKind::Road, 950.0)]).unwrap()
                                                                                                                         .with_metric("density", 4.2);
    {
        let mut ctl = open(&dir);
        ctl.update_city_data(city.clone()).unwrap();
    }
    assert_eq!(open(&dir).city_data(), Some(&city));
}

#[test]
fn reset_deletes_file() {
    let dir = TempDir::new().unwrap();
    let mut ctl = open(&dir);
    ctl.complete_step(step(1)).unwrap();
    let path = FileKeyValueStore::open(dir.path()).unwrap().path_for(PROCESS_STORAGE_KEY).unwrap();
    assert!(path.exists());

    ctl.reset_process().unwrap();
    assert!(!path.exists());
    let fresh = open(&dir);
    assert_eq!(fresh.origin(), StateOrigin::Fresh);
    assert!(fresh.state().is_default());
}

#[test]
fn corrupt_file_recovers_to_defaults_and_next_write_repairs() {
    let dir = TempDir::new().unwrap();
    let mut raw_store = FileKeyValueStore::open(dir.path()).unwrap();
    raw_store.set(PROCESS_STORAGE_KEY, "{\"currentStep\": ".into()).unwrap();

    let mut ctl = open(&dir);
    assert_eq!(ctl.origin(), StateOrigin::Recovered);
    assert!(ctl.state().is_default());

    ctl.complete_step(step(1)).unwrap();
    let reloaded = open(&dir);
    assert_eq!(reloaded.origin(), StateOrigin::Restored);
    assert!(reloaded.is_step_completed(step(1)));
}
