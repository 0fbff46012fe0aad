//! Carousel configuration with host-friendly deserialization
//!
//! Options arrive either as a plain Rust struct or as a JS object from the
//! host page (camelCase keys, deserialized through serde-wasm-bindgen).
//! A `null` autoplay interval disables autoplay regardless of the enabled
//! flag, matching the behavior hosts expect from `{ autoplayInterval: null }`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::CarouselError;

/// Default autoplay interval in milliseconds
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 2000;

/// Recognized carousel options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Whether timer-driven advancement is enabled
    pub autoplay: bool,
    /// Positive milliseconds between autoplay transitions; `None` disables
    /// autoplay regardless of the `autoplay` flag
    pub autoplay_interval: Option<u32>,
    /// Whether one pagination indicator per slide is created
    pub pagination: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
            pagination: true,
        }
    }
}

impl CarouselOptions {
    /// Deserializes options from a host-provided JS value.
    ///
    /// `null` and `undefined` yield the defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an options-shaped object.
    pub fn from_js(value: &JsValue) -> Result<Self, CarouselError> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value.clone())
            .map_err(|e| CarouselError::InvalidOptions(e.to_string()))
    }

    /// Effective autoplay interval: `None` when autoplay is disabled, the
    /// interval itself is null, or the interval is zero. The interval must
    /// be a positive number of milliseconds, so a zero is treated like null
    /// rather than starting a minimum-delay timer. The timer and the hover
    /// pause/resume listeners exist only when this is `Some`.
    #[must_use]
    pub const fn effective_interval(&self) -> Option<u32> {
        if !self.autoplay {
            return None;
        }
        match self.autoplay_interval {
            Some(ms) if ms > 0 => Some(ms),
            _ => None,
        }
    }
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn options_object(
        entries: &[(&str, JsValue)],
    ) -> Result<JsValue, CarouselError> {
        let object = js_sys::Object::new();
        for (key, value) in entries {
            js_sys::Reflect::set(&object, &JsValue::from_str(key), value)
                .map_err(|e| CarouselError::from_js("failed to build options object", &e))?;
        }
        Ok(object.into())
    }

    #[wasm_bindgen_test]
    fn test_from_js_null_gives_defaults() -> Result<(), CarouselError> {
        let options = CarouselOptions::from_js(&JsValue::NULL)?;
        assert_eq!(options, CarouselOptions::default());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_from_js_object_with_null_interval() -> Result<(), CarouselError> {
        let value = options_object(&[("autoplayInterval", JsValue::NULL)])?;
        let options = CarouselOptions::from_js(&value)?;
        assert!(options.autoplay);
        assert_eq!(options.effective_interval(), None);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_from_js_object_with_overrides() -> Result<(), CarouselError> {
        let value = options_object(&[
            ("autoplay", JsValue::FALSE),
            ("pagination", JsValue::FALSE),
        ])?;
        let options = CarouselOptions::from_js(&value)?;
        assert!(!options.autoplay);
        assert!(!options.pagination);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_from_js_rejects_non_object() {
        let result = CarouselOptions::from_js(&JsValue::from_str("autoplay"));
        assert!(result.is_err());
    }
}
