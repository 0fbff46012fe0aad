//! Carousel controller: construction, DOM wiring, navigation, teardown
//!
//! One controller instance owns the current-slide index and every DOM
//! reference the widget touches. `new` resolves the container and slides
//! (the only two fatal configuration errors), `create` restructures the DOM
//! and binds listeners, `destroy` detaches them and cancels autoplay.
//! Handler closures share state through `Rc<RefCell<Inner>>`; the browser
//! event loop is single-threaded and runs each handler to completion, so
//! the `RefCell` is never borrowed re-entrantly.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::components::{offsets, pagination, structure};
use crate::error::{self, CarouselError};
use crate::interaction::autoplay::AutoplayTimer;
use crate::interaction::keyboard;
use crate::interaction::listeners::ListenerHandle;
use crate::models::options::CarouselOptions;
use crate::models::state::{Direction, SlideState};

/// State shared between the controller and its handler closures
struct Inner {
    container: Element,
    slides: Vec<HtmlElement>,
    state: SlideState,
    options: CarouselOptions,
    dots: Vec<HtmlElement>,
    /// Present iff autoplay is configured with a non-null interval;
    /// running iff not suspended by pointer hover
    timer: Option<AutoplayTimer>,
    destroyed: bool,
}

/// A single carousel instance over a container element
pub struct Carousel {
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<ListenerHandle>,
    created: bool,
}

impl Carousel {
    /// Resolves the container and slide elements and builds an
    /// uninitialized controller. Call [`create`](Self::create) to restructure
    /// the DOM and bind listeners.
    ///
    /// # Errors
    ///
    /// The two fatal configuration errors, an unresolved container selector
    /// and an empty slide selection, are each reported once through the
    /// console error sink and returned as `Err`; no usable instance exists
    /// on failure.
    pub fn new(
        container_selector: &str,
        slide_selector: &str,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        Self::resolve(container_selector, slide_selector, options).map_err(|e| {
            error::report(&e);
            e
        })
    }

    fn resolve(
        container_selector: &str,
        slide_selector: &str,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        let document = document()?;

        let container = document
            .query_selector(container_selector)
            .map_err(|e| CarouselError::InvalidSelector {
                selector: container_selector.to_string(),
                message: format!("{e:?}"),
            })?
            .ok_or_else(|| CarouselError::ContainerNotFound(container_selector.to_string()))?;

        let matches = container
            .query_selector_all(slide_selector)
            .map_err(|e| CarouselError::InvalidSelector {
                selector: slide_selector.to_string(),
                message: format!("{e:?}"),
            })?;
        let mut slides = Vec::with_capacity(matches.length() as usize);
        for i in 0..matches.length() {
            if let Some(node) = matches.item(i) {
                let slide = node
                    .dyn_into::<HtmlElement>()
                    .map_err(|_| CarouselError::Dom("slide is not an HTML element".to_string()))?;
                slides.push(slide);
            }
        }
        if slides.is_empty() {
            return Err(CarouselError::NoSlides(slide_selector.to_string()));
        }

        let state = SlideState::new(slides.len())?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                container,
                slides,
                state,
                options,
                dots: Vec::new(),
                timer: None,
                destroyed: false,
            })),
            listeners: Vec::new(),
            created: false,
        })
    }

    /// Restructures the DOM and binds all listeners. Idempotent: calling it
    /// again after a successful run is a no-op.
    ///
    /// Wraps the slides in a track, appends previous/next controls, makes
    /// the container focusable, creates pagination indicators when enabled,
    /// and positions slide `i` at `i × 100%`. When autoplay is active it
    /// also binds pointer pause/resume and starts the repeating timer.
    ///
    /// # Errors
    ///
    /// Returns an error if a DOM mutation or listener registration fails.
    pub fn create(&mut self) -> Result<(), CarouselError> {
        if self.created {
            return Ok(());
        }
        let document = document()?;
        let (container, options, count, current) = {
            let inner = self.inner.borrow();
            (
                inner.container.clone(),
                inner.options,
                inner.state.count(),
                inner.state.current(),
            )
        };

        {
            let inner = self.inner.borrow();
            structure::wrap_slides(&document, &container, &inner.slides)?;
            structure::make_focusable(&container)?;
            offsets::apply_offsets(&inner.slides, current)?;
        }

        let prev = structure::create_control(&document, &container, Direction::Previous)?;
        let next = structure::create_control(&document, &container, Direction::Next)?;
        for (control, direction) in [(prev, Direction::Previous), (next, Direction::Next)] {
            let inner = Rc::clone(&self.inner);
            self.listeners.push(ListenerHandle::attach(
                control.unchecked_ref(),
                "click",
                move |_| handle_move(&inner, direction),
            )?);
        }

        {
            let inner = Rc::clone(&self.inner);
            let key_container = container.clone();
            self.listeners.push(ListenerHandle::attach(
                container.unchecked_ref(),
                "keydown",
                move |event| {
                    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if !keyboard::should_handle(key_event, &key_container) {
                        return;
                    }
                    let Some(direction) = keyboard::key_direction(&key_event.key()) else {
                        return;
                    };
                    key_event.prevent_default();
                    handle_move(&inner, direction);
                },
            )?);
        }

        if options.pagination {
            let (_, dots) = pagination::create_pagination(&document, &container, count)?;
            pagination::sync_active(&dots, current)?;
            for (index, dot) in dots.iter().enumerate() {
                let inner = Rc::clone(&self.inner);
                self.listeners.push(ListenerHandle::attach(
                    dot.unchecked_ref(),
                    "click",
                    move |_| handle_jump(&inner, index),
                )?);
            }
            self.inner.borrow_mut().dots = dots;
        }

        if let Some(interval_ms) = options.effective_interval() {
            self.inner.borrow_mut().timer = Some(AutoplayTimer::new(interval_ms));
            start_autoplay(&self.inner);

            let pause_inner = Rc::clone(&self.inner);
            self.listeners.push(ListenerHandle::attach(
                container.unchecked_ref(),
                "pointerenter",
                move |_| {
                    if let Some(timer) = pause_inner.borrow_mut().timer.as_mut() {
                        timer.stop();
                    }
                },
            )?);

            let resume_inner = Rc::clone(&self.inner);
            self.listeners.push(ListenerHandle::attach(
                container.unchecked_ref(),
                "pointerleave",
                move |_| start_autoplay(&resume_inner),
            )?);
        }

        self.created = true;
        Ok(())
    }

    /// Moves one slide in the given direction, wrapping at both ends, and
    /// re-renders. No-op after `destroy`.
    pub fn move_slide(&self, direction: Direction) {
        handle_move(&self.inner, direction);
    }

    /// Jumps directly to `index` and re-renders. No-op after `destroy`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a valid slide index.
    pub fn jump_to(&self, index: usize) -> Result<(), CarouselError> {
        let mut inner = self.inner.borrow_mut();
        if inner.destroyed {
            return Ok(());
        }
        inner.state.jump_to(index)?;
        render(&inner);
        Ok(())
    }

    /// Current slide index
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.borrow().state.current()
    }

    /// Number of slides
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.inner.borrow().state.count()
    }

    /// Whether the autoplay timer is currently scheduled
    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.inner
            .borrow()
            .timer
            .as_ref()
            .is_some_and(AutoplayTimer::is_running)
    }

    /// Detaches every listener registered by `create` and cancels any
    /// active autoplay timer. Safe to call repeatedly, and safe when
    /// autoplay was never started. Subsequent DOM events cause no state
    /// change and no rendering.
    pub fn destroy(&mut self) {
        for mut listener in self.listeners.drain(..) {
            listener.detach();
        }
        let mut inner = self.inner.borrow_mut();
        if let Some(timer) = inner.timer.as_mut() {
            timer.stop();
        }
        inner.timer = None;
        inner.destroyed = true;
    }
}

fn document() -> Result<Document, CarouselError> {
    web_sys::window()
        .ok_or(CarouselError::WindowNotAvailable)?
        .document()
        .ok_or(CarouselError::DocumentNotAvailable)
}

/// Shared transition path for controls, keyboard, and autoplay ticks
fn handle_move(inner: &Rc<RefCell<Inner>>, direction: Direction) {
    let mut inner = inner.borrow_mut();
    if inner.destroyed {
        return;
    }
    inner.state.advance(direction);
    render(&inner);
}

/// Direct navigation from a pagination indicator; the captured index is
/// always valid for the slide set the indicator was created for
fn handle_jump(inner: &Rc<RefCell<Inner>>, index: usize) {
    let mut inner = inner.borrow_mut();
    if inner.destroyed {
        return;
    }
    if inner.state.jump_to(index).is_err() {
        return;
    }
    render(&inner);
}

/// Synchronizes the DOM with the current index: slide offsets first, then
/// the single active pagination marker
fn render(inner: &Inner) {
    if let Err(e) = offsets::apply_offsets(&inner.slides, inner.state.current()) {
        error::report(&e);
        return;
    }
    if !inner.dots.is_empty() {
        if let Err(e) = pagination::sync_active(&inner.dots, inner.state.current()) {
            error::report(&e);
        }
    }
}

/// (Re)starts the autoplay timer with a fresh full interval. Each tick
/// advances to the next slide. No-op when autoplay is suppressed or the
/// carousel is destroyed.
fn start_autoplay(inner: &Rc<RefCell<Inner>>) {
    let tick_inner = Rc::clone(inner);
    let mut inner = inner.borrow_mut();
    if inner.destroyed {
        return;
    }
    if let Some(timer) = inner.timer.as_mut() {
        timer.start(move || handle_move(&tick_inner, Direction::Next));
    }
}
