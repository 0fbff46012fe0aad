//! Embeddable content carousel widget for the browser
//!
//! A single UI component: a carousel that cycles through a fixed set of
//! slide elements inside a host-provided container, with optional autoplay,
//! pagination indicators, and arrow-key navigation. The crate is a thin
//! orchestration layer over browser APIs via web-sys; it holds no state
//! beyond an in-memory slide index and performs no I/O.
//!
//! ## Module Structure
//! - `carousel`: the controller (construction, `create`/`destroy`, navigation)
//! - `models`: configuration options and the slide-index state machine
//! - `components`: DOM restructuring, pagination indicators, slide offsets
//! - `interaction`: tracked listeners, keyboard routing, the autoplay timer
//! - `error`: error types and console diagnostics
//!
//! ## Usage
//!
//! ```no_run
//! use carousel_ui::{Carousel, CarouselOptions};
//!
//! # fn example() -> Result<(), carousel_ui::CarouselError> {
//! let mut carousel = Carousel::new("#gallery", ".slide", CarouselOptions::default())?;
//! carousel.create()?;
//! // ... later, before removing the container from the page:
//! carousel.destroy();
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod carousel;
pub mod components;
pub mod error;
pub mod interaction;
pub mod models;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use error::CarouselError;
pub use models::options::{CarouselOptions, DEFAULT_AUTOPLAY_INTERVAL_MS};
pub use models::state::Direction;
