//! WASM demo entry point
//!
//! Trunk compiles this to WASM and serves it with `index.html`, which
//! carries the demo markup (a container with three slides) and the demo
//! stylesheet. The widget itself only ever sees the selectors.

use carousel_ui::{Carousel, CarouselOptions};

fn main() {
    // Panic hook for readable errors in the browser console
    console_error_panic_hook::set_once();

    match mount_demo() {
        Ok(carousel) => {
            // The demo widget lives for the lifetime of the page
            std::mem::forget(carousel);
        }
        Err(e) => web_sys::console::error_1(&format!("demo setup failed: {e}").into()),
    }
}

fn mount_demo() -> Result<Carousel, carousel_ui::CarouselError> {
    let mut carousel = Carousel::new("#demo-carousel", ".demo-slide", CarouselOptions::default())?;
    carousel.create()?;
    Ok(carousel)
}
