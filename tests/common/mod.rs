//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use slotkeeper::registry::{Slot, SlotNo, SlotRegistry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a registry from `(slot_no, covered, ev_charging)` triples.
pub fn registry_with(slots: &[(SlotNo, bool, bool)]) -> SlotRegistry {
    let mut registry = SlotRegistry::new();
    for &(slot_no, covered, ev) in slots {
        registry
            .add(slot_no, covered, ev)
            .expect("test slot should be accepted");
    }
    registry
}

pub fn slot_numbers(slots: &[Slot]) -> Vec<SlotNo> {
    slots.iter().map(|slot| slot.slot_no).collect()
}

/// Write `content` to `<tempdir>/<name>` and return both.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
