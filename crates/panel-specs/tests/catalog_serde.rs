//! Serialization of catalog descriptors for host tooling.
//!
//! Run with: cargo test -p panel-specs --features serde

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use panel_specs::catalog::{CATALOG, LTK101B4029W};
use panel_specs::{DisplayTiming, InitCommand};

#[test]
fn timing_survives_json() {
    let json = serde_json::to_string(&LTK101B4029W.timing).unwrap();
    let back: DisplayTiming = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LTK101B4029W.timing);
}

#[test]
fn profile_exports_commands_in_order() {
    let value = serde_json::to_value(LTK101B4029W).unwrap();
    assert_eq!(value["compatible"], "leadtek,ltk101b4029w");
    let entries = value["commands"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 152);
    let first: InitCommand = serde_json::from_value(entries[0].clone()).unwrap();
    assert_eq!(first, InitCommand::new(0xE0, 0x00));
}

#[test]
fn whole_catalog_serializes() {
    let json = serde_json::to_string(CATALOG).unwrap();
    assert!(json.contains("leadtek,ltk500hd1829"));
    assert!(json.contains("\"clock_khz\":69217"));
}
