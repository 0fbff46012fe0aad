//! Slide positioning via horizontal transform offsets
//!
//! The sole positioning mechanism: slide `k` sits at
//! `translateX(100 × (k − current)%)`, so the current slide is always at
//! offset 0 and the rest are laid out left and right proportionally. Any
//! animation comes from a declarative CSS transition on the slides, never
//! from code.

use web_sys::HtmlElement;

use crate::error::CarouselError;

/// Horizontal offset of slide `index` relative to the current slide, in
/// percent of the viewport width.
#[must_use]
pub const fn offset_percent(index: usize, current: usize) -> i64 {
    (index as i64 - current as i64) * 100
}

/// CSS transform value for a given percent offset
#[must_use]
pub fn transform_value(offset: i64) -> String {
    format!("translateX({offset}%)")
}

/// Repositions every slide relative to the current index.
///
/// # Errors
///
/// Returns an error if a style property assignment is rejected by the host.
pub fn apply_offsets(slides: &[HtmlElement], current: usize) -> Result<(), CarouselError> {
    for (index, slide) in slides.iter().enumerate() {
        let value = transform_value(offset_percent(index, current));
        slide
            .style()
            .set_property("transform", &value)
            .map_err(|e| CarouselError::from_js("failed to set slide transform", &e))?;
    }
    Ok(())
}
