//! Event plumbing: tracked listeners, keyboard routing, and the autoplay timer

pub mod autoplay;
pub mod keyboard;
pub mod listeners;
