//! Pure data for the carousel: configuration and the slide-index state machine

pub mod options;
pub mod state;
