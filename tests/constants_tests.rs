// Host-side tests for the DOM hooks the front end binds to.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn control_button_ids_are_distinct_and_non_empty() {
    let ids: HashSet<&str> = CONTROL_BUTTON_IDS.iter().copied().collect();
    assert_eq!(ids.len(), CONTROL_BUTTON_IDS.len());
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
    assert!(!ids.contains(CANVAS_ID));
}

#[test]
fn selectors_use_class_syntax() {
    assert!(COLOR_PICKER_SELECTOR.starts_with('.'));
    assert!(INSTRUCTIONS_SELECTOR.starts_with('.'));
    assert!(!SWATCH_CLASS.starts_with('.'));
    assert!(MODE_ATTRIBUTE.starts_with("data-"));
}

#[test]
fn swatch_ids_are_unique_per_palette_entry() {
    let ids: HashSet<String> = (0..glowpaint_core::PALETTE.len()).map(swatch_id).collect();
    assert_eq!(ids.len(), glowpaint_core::PALETTE.len());
    assert_eq!(swatch_id(3), "swatch-3");
}

#[test]
fn help_keys_do_not_shadow_sketch_shortcuts() {
    for key in HELP_TOGGLE_KEYS {
        assert_eq!(glowpaint_core::action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn page_provides_every_control_button() {
    let page = include_str!("../index.html");
    for id in CONTROL_BUTTON_IDS {
        assert!(
            page.contains(&format!("id=\"{}\"", id)),
            "index.html lacks #{}",
            id
        );
    }
    assert!(page.contains(&format!("id=\"{}\"", CANVAS_ID)));
}
