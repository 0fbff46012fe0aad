//! DOM construction and synchronization for the carousel
//!
//! Pure offset math lives in `offsets`; element creation and attribute
//! wiring live in `structure` and `pagination`.

pub mod offsets;
pub mod pagination;
pub mod structure;
