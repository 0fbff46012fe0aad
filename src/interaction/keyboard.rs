//! Arrow-key routing for container keydown events
//!
//! Left arrow steps back, right arrow steps forward, anything else is a
//! no-op. Events are only handled when they originated inside the carousel
//! container and no other handler has already claimed them.

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node};

use crate::models::state::Direction;

/// Maps a `KeyboardEvent::key()` value to a navigation direction
#[must_use]
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Previous),
        "ArrowRight" => Some(Direction::Next),
        _ => None,
    }
}

/// Whether a keydown event should be handled by the carousel.
///
/// Rejects events whose default was already prevented by another handler
/// and events whose target lies outside the container.
#[must_use]
pub fn should_handle(event: &KeyboardEvent, container: &Element) -> bool {
    if event.default_prevented() {
        return false;
    }
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
