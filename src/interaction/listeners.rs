//! Tracked DOM event listener registration
//!
//! Every listener the carousel registers is wrapped in a handle that keeps
//! the backing closure alive and knows how to remove itself. Teardown is
//! explicit: dropping or detaching the handle unregisters the listener, so
//! no closure is ever `forget()`-leaked.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::CarouselError;

/// A registered event listener that detaches itself on drop
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
    detached: bool,
}

impl ListenerHandle {
    /// Registers `callback` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the listener registration.
    pub fn attach<F>(
        target: &EventTarget,
        event: &'static str,
        callback: F,
    ) -> Result<Self, CarouselError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| {
                CarouselError::from_js(&format!("failed to attach {event} listener"), &e)
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
            detached: false,
        })
    }

    /// Removes the listener from its target. Idempotent.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        // Removal failure leaves nothing actionable; the closure is dropped
        // either way, which invalidates the callback.
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        self.detached = true;
    }

    /// Event name this handle is registered for
    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.detach();
    }
}
