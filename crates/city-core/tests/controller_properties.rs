mod support;

use city_core::constants::PROCESS_STORAGE_KEY;
use city_core::{InMemoryKeyValueStore, KeyValueStore, ProcessController, StateOrigin, WorkflowState};
use support::{sample_city, step};

#[test]
fn fresh_store_yields_defaults() {
    let ctl = ProcessController::new(InMemoryKeyValueStore::new());
    assert_eq!(ctl.origin(), StateOrigin::Fresh);
    assert!(ctl.state().is_default());
}

#[test]
fn complete_step_is_idempotent() {
    let mut once = ProcessController::new(InMemoryKeyValueStore::new());
    once.complete_step(step(2)).unwrap();

    let mut twice = ProcessController::new(InMemoryKeyValueStore::new());
    twice.complete_step(step(2)).unwrap();
    twice.complete_step(step(2)).unwrap();

    assert_eq!(once.completed_steps(), twice.completed_steps());
    assert_eq!(once.state(), twice.state());
}

#[test]
fn completed_steps_never_hold_duplicates() {
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    for s in [3, 1, 3, 2, 1, 1, 4, 2] {
        ctl.complete_step(step(s)).unwrap();
    }
    let listed: Vec<u32> = ctl.completed_steps().iter().map(|s| s.get()).collect();
    assert_eq!(listed, vec![1, 2, 3, 4]);

    let raw = ctl.into_store().get(PROCESS_STORAGE_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["completedSteps"], serde_json::json!([1, 2, 3, 4]));
}

#[test]
fn reset_clears_everything_and_deletes_record() {
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    ctl.update_city_data(sample_city("bog")).unwrap();
    ctl.set_current_step(step(3)).unwrap();
    ctl.complete_step(step(1)).unwrap();
    ctl.set_selected_segment("s-1").unwrap();

    ctl.reset_process().unwrap();
    assert_eq!(ctl.current_step(), step(1));
    assert!(ctl.city_data().is_none());
    assert!(ctl.selected_segment_id().is_none());
    assert!(ctl.completed_steps().is_empty());

    let store = ctl.into_store();
    assert!(!store.contains_key(PROCESS_STORAGE_KEY), "durable key must be deleted, not overwritten");
    let reloaded = ProcessController::new(store);
    assert_eq!(reloaded.origin(), StateOrigin::Fresh);
    assert!(reloaded.state().is_default());
}

#[test]
fn city_data_survives_reload() {
    let city = sample_city("med");
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    ctl.update_city_data(city.clone()).unwrap();

    let reloaded = ProcessController::new(ctl.into_store());
    assert_eq!(reloaded.origin(), StateOrigin::Restored);
    assert_eq!(reloaded.city_data(), Some(&city));
}

#[test]
fn update_city_data_preserves_other_fields() {
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    ctl.set_current_step(step(2)).unwrap();
    ctl.complete_step(step(1)).unwrap();
    ctl.set_selected_segment("s-9").unwrap();
    ctl.update_city_data(sample_city("cal")).unwrap();
    assert_eq!(ctl.current_step(), step(2));
    assert!(ctl.is_step_completed(step(1)));
    assert_eq!(ctl.selected_segment_id().map(|s| s.as_str()), Some("s-9"));
}

#[test]
fn corrupt_record_recovers_to_defaults() {
    for garbage in ["{not json", "42", r#"{"currentStep":-3}"#, ""] {
        let mut store = InMemoryKeyValueStore::new();
        store.set(PROCESS_STORAGE_KEY, garbage.to_string()).unwrap();
        let ctl = ProcessController::new(store);
        assert_eq!(ctl.origin(), StateOrigin::Recovered, "input {garbage:?}");
        assert_eq!(ctl.state(), &WorkflowState::default());
    }
}

#[test]
fn reload_scenario_keeps_step_and_completion() {
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    ctl.set_current_step(step(2)).unwrap();
    ctl.complete_step(step(1)).unwrap();

    let reloaded = ProcessController::new(ctl.into_store());
    assert_eq!(reloaded.current_step(), step(2));
    assert!(reloaded.is_step_completed(step(1)));
    assert!(!reloaded.is_step_completed(step(2)));
}

#[test]
fn set_current_step_does_not_enforce_order() {
    let mut ctl = ProcessController::new(InMemoryKeyValueStore::new());
    ctl.set_current_step(step(40)).unwrap();
    assert_eq!(ctl.current_step(), step(40));
    ctl.set_current_step(step(1)).unwrap();
    assert_eq!(ctl.current_step(), step(1));
}
