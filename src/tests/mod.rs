//! Behavioral tests for the carousel core
//!
//! BDD-style tests using given-when-then naming over the pure state and
//! configuration layers. DOM-touching behavior is covered by the
//! `wasm-bindgen-test` modules next to each component.
