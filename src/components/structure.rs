//! One-time DOM restructuring for the carousel container
//!
//! Wraps the slides in an inner track element and creates the previous/next
//! controls. Controls are standard `<button type="button">` elements with
//! `aria-label`s so keyboard and assistive-technology users get real
//! interactive elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::CarouselError;
use crate::models::state::Direction;

/// CSS class names applied to created elements
pub mod class {
    /// Inner positioning track that holds every slide
    pub const TRACK: &str = "carousel-track";
    /// Shared class for both navigation controls
    pub const CONTROL: &str = "carousel-control";
    /// Previous-slide control
    pub const CONTROL_PREV: &str = "carousel-control-prev";
    /// Next-slide control
    pub const CONTROL_NEXT: &str = "carousel-control-next";
    /// Pagination indicator container
    pub const PAGINATION: &str = "carousel-pagination";
    /// Single pagination indicator
    pub const DOT: &str = "carousel-dot";
    /// Marker carried by exactly one indicator at a time
    pub const DOT_ACTIVE: &str = "carousel-dot-active";
}

/// Accessible label for a navigation control
#[must_use]
pub const fn control_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Previous => "Previous slide",
        Direction::Next => "Next slide",
    }
}

/// Moves every slide into a freshly created track element appended to the
/// container, and returns the track.
///
/// # Errors
///
/// Returns an error if element creation or reparenting fails.
pub fn wrap_slides(
    document: &Document,
    container: &Element,
    slides: &[HtmlElement],
) -> Result<Element, CarouselError> {
    let track = document
        .create_element("div")
        .map_err(|e| CarouselError::from_js("failed to create track element", &e))?;
    track.set_class_name(class::TRACK);
    for slide in slides {
        track
            .append_child(slide)
            .map_err(|e| CarouselError::from_js("failed to move slide into track", &e))?;
    }
    container
        .append_child(&track)
        .map_err(|e| CarouselError::from_js("failed to append track to container", &e))?;
    Ok(track)
}

/// Creates a previous/next control button and appends it to the container.
///
/// # Errors
///
/// Returns an error if element creation or attribute assignment fails.
pub fn create_control(
    document: &Document,
    container: &Element,
    direction: Direction,
) -> Result<HtmlElement, CarouselError> {
    let button = document
        .create_element("button")
        .map_err(|e| CarouselError::from_js("failed to create control element", &e))?;
    let (direction_class, glyph) = match direction {
        Direction::Previous => (class::CONTROL_PREV, "\u{2039}"),
        Direction::Next => (class::CONTROL_NEXT, "\u{203a}"),
    };
    button.set_class_name(&format!("{} {direction_class}", class::CONTROL));
    button
        .set_attribute("type", "button")
        .map_err(|e| CarouselError::from_js("failed to set control type", &e))?;
    button
        .set_attribute("aria-label", control_label(direction))
        .map_err(|e| CarouselError::from_js("failed to set control label", &e))?;
    button.set_text_content(Some(glyph));
    container
        .append_child(&button)
        .map_err(|e| CarouselError::from_js("failed to append control", &e))?;
    button
        .dyn_into::<HtmlElement>()
        .map_err(|_| CarouselError::Dom("created control is not an HTML element".to_string()))
}

/// Makes the container focusable so it can receive keydown events.
///
/// # Errors
///
/// Returns an error if the attribute assignment fails.
pub fn make_focusable(container: &Element) -> Result<(), CarouselError> {
    container
        .set_attribute("tabindex", "0")
        .map_err(|e| CarouselError::from_js("failed to make container focusable", &e))
}
