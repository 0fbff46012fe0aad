//! Error types for carousel construction and DOM wiring
//!
//! Only two failures are fatal configuration errors visible to callers: an
//! unresolved container selector and an empty slide selection. Both are
//! surfaced once through the browser console error sink and returned as
//! `Err`; every other operation on a validly constructed carousel is total.

use wasm_bindgen::JsValue;

/// Errors that can occur while constructing or wiring a carousel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// Failed to get window object
    #[error("failed to get window: window is not available")]
    WindowNotAvailable,

    /// Failed to get document object
    #[error("failed to get document: document is not available")]
    DocumentNotAvailable,

    /// Container selector resolved to no element
    #[error("container selector '{0}' matched no element")]
    ContainerNotFound(String),

    /// Slide selector matched nothing inside the container
    #[error("slide selector '{0}' matched no elements inside the container")]
    NoSlides(String),

    /// Selector string was rejected by the host
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A carousel cannot exist without slides
    #[error("carousel requires at least one slide")]
    EmptySlideSet,

    /// Direct navigation target outside the slide sequence
    #[error("slide index {index} out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },

    /// Options value could not be deserialized
    #[error("invalid carousel options: {0}")]
    InvalidOptions(String),

    /// A DOM mutation or listener registration failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl CarouselError {
    /// Wraps a raw JS error value with context
    pub(crate) fn from_js(context: &str, value: &JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }
}

/// Reports a construction failure through the browser console error sink.
///
/// Called exactly once per fatal configuration error; no structured error
/// object crosses the JS boundary.
pub(crate) fn report(error: &CarouselError) {
    web_sys::console::error_1(&format!("carousel: {error}").into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_not_found_display() {
        let error = CarouselError::ContainerNotFound("#missing".to_string());
        assert_eq!(
            error.to_string(),
            "container selector '#missing' matched no element"
        );
    }

    #[test]
    fn test_no_slides_display() {
        let error = CarouselError::NoSlides(".slide".to_string());
        assert_eq!(
            error.to_string(),
            "slide selector '.slide' matched no elements inside the container"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let error = CarouselError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(
            error.to_string(),
            "slide index 5 out of range for 3 slides"
        );
    }

    #[test]
    fn test_invalid_selector_display() {
        let error = CarouselError::InvalidSelector {
            selector: "[[".to_string(),
            message: "syntax error".to_string(),
        };
        assert!(error.to_string().contains("invalid selector"));
        assert!(error.to_string().contains("[["));
    }

    #[test]
    fn test_error_clone_and_equality() {
        let error = CarouselError::EmptySlideSet;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
