//! Pagination indicators with a single active marker
//!
//! One `role=tab` button per slide inside a `role=tablist` container. The
//! active marker (class + `aria-selected`) always sits on exactly one
//! indicator, the one matching the current slide index.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::components::structure::class;
use crate::error::CarouselError;

/// Accessible label for the indicator at `index`
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Creates the pagination container with one indicator per slide and appends
/// it to the carousel container. Returns the list element and the indicators
/// in slide order.
///
/// # Errors
///
/// Returns an error if element creation or attribute assignment fails.
pub fn create_pagination(
    document: &Document,
    container: &Element,
    count: usize,
) -> Result<(Element, Vec<HtmlElement>), CarouselError> {
    let list = document
        .create_element("div")
        .map_err(|e| CarouselError::from_js("failed to create pagination container", &e))?;
    list.set_class_name(class::PAGINATION);
    list.set_attribute("role", "tablist")
        .map_err(|e| CarouselError::from_js("failed to set tablist role", &e))?;
    list.set_attribute("aria-label", "Slides")
        .map_err(|e| CarouselError::from_js("failed to set pagination label", &e))?;

    let mut dots = Vec::with_capacity(count);
    for index in 0..count {
        let dot = document
            .create_element("button")
            .map_err(|e| CarouselError::from_js("failed to create indicator", &e))?;
        dot.set_class_name(class::DOT);
        dot.set_attribute("type", "button")
            .map_err(|e| CarouselError::from_js("failed to set indicator type", &e))?;
        dot.set_attribute("role", "tab")
            .map_err(|e| CarouselError::from_js("failed to set indicator role", &e))?;
        dot.set_attribute("aria-label", &dot_label(index))
            .map_err(|e| CarouselError::from_js("failed to set indicator label", &e))?;
        dot.set_attribute("aria-selected", "false")
            .map_err(|e| CarouselError::from_js("failed to set indicator selection", &e))?;
        list.append_child(&dot)
            .map_err(|e| CarouselError::from_js("failed to append indicator", &e))?;
        dots.push(
            dot.dyn_into::<HtmlElement>()
                .map_err(|_| CarouselError::Dom("indicator is not an HTML element".to_string()))?,
        );
    }

    container
        .append_child(&list)
        .map_err(|e| CarouselError::from_js("failed to append pagination", &e))?;
    Ok((list, dots))
}

/// Moves the active marker to the indicator at `current`.
///
/// Clears the marker everywhere else, keeping the one-to-one correspondence
/// between the active indicator and the current slide.
///
/// # Errors
///
/// Returns an error if a class-list or attribute mutation fails.
pub fn sync_active(dots: &[HtmlElement], current: usize) -> Result<(), CarouselError> {
    for (index, dot) in dots.iter().enumerate() {
        let active = index == current;
        if active {
            dot.class_list()
                .add_1(class::DOT_ACTIVE)
                .map_err(|e| CarouselError::from_js("failed to mark indicator active", &e))?;
        } else {
            dot.class_list()
                .remove_1(class::DOT_ACTIVE)
                .map_err(|e| CarouselError::from_js("failed to clear indicator", &e))?;
        }
        dot.set_attribute("aria-selected", if active { "true" } else { "false" })
            .map_err(|e| CarouselError::from_js("failed to update indicator selection", &e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_labels_are_one_based() {
        assert_eq!(dot_label(0), "Go to slide 1");
        assert_eq!(dot_label(2), "Go to slide 3");
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_document() -> Result<Document, CarouselError> {
        web_sys::window()
            .ok_or(CarouselError::WindowNotAvailable)?
            .document()
            .ok_or(CarouselError::DocumentNotAvailable)
    }

    fn active_count(dots: &[HtmlElement]) -> usize {
        dots.iter()
            .filter(|dot| dot.class_list().contains(class::DOT_ACTIVE))
            .count()
    }

    #[wasm_bindgen_test]
    fn test_create_pagination_builds_one_tab_per_slide() -> Result<(), CarouselError> {
        let document = test_document()?;
        let container = document
            .create_element("div")
            .map_err(|e| CarouselError::from_js("create container", &e))?;

        let (list, dots) = create_pagination(&document, &container, 4)?;

        assert_eq!(list.get_attribute("role").as_deref(), Some("tablist"));
        assert_eq!(dots.len(), 4);
        for (index, dot) in dots.iter().enumerate() {
            assert_eq!(dot.get_attribute("role").as_deref(), Some("tab"));
            assert_eq!(
                dot.get_attribute("aria-label"),
                Some(dot_label(index))
            );
            assert_eq!(dot.get_attribute("aria-selected").as_deref(), Some("false"));
        }
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_sync_active_keeps_exactly_one_marker() -> Result<(), CarouselError> {
        let document = test_document()?;
        let container = document
            .create_element("div")
            .map_err(|e| CarouselError::from_js("create container", &e))?;
        let (_, dots) = create_pagination(&document, &container, 3)?;

        for current in [0, 2, 1, 2, 0] {
            sync_active(&dots, current)?;
            assert_eq!(active_count(&dots), 1, "exactly one active indicator");
            assert!(dots[current].class_list().contains(class::DOT_ACTIVE));
            assert_eq!(
                dots[current].get_attribute("aria-selected").as_deref(),
                Some("true")
            );
        }
        Ok(())
    }
}
