//! Project dialog binding.
//!
//! Owns the dialog element handles, the trigger listeners (direct and
//! delegated), the document keydown handler for Escape and the Tab trap, and
//! the listeners on the currently rendered gallery.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::consts::{ACTIVE_CLASS, BOUND_ATTR, FOCUSABLE_SELECTOR};
use crate::content::ModalContent;
use crate::error::SiteError;
use crate::state::focus::{TabMove, cycle, is_activation_key};
use crate::state::modal::{ModalEffect, ModalState, TriggerListener};

use super::lightbox::Lightbox;
use super::render::{RenderedImage, fallback_on_error, render_content};
use super::timer::TimerSlot;
use super::{as_html, element_by_id, elements, page_body, query_all, query_in, report, set_class, targets};

pub struct Modal {
    _inner: Rc<RefCell<Inner>>,
    _listeners: Vec<EventListener>,
}

struct Inner {
    state: ModalState<HtmlElement>,
    catalog: Rc<Catalog>,
    lightbox: Lightbox,
    document: Document,
    dialog: HtmlElement,
    region: Element,
    close: HtmlElement,
    page_body: HtmlElement,
    placeholder: String,
    timer: TimerSlot,
    gallery: Vec<EventListener>,
}

impl Modal {
    /// Look up the dialog regions and wire every way of opening and closing it.
    ///
    /// # Errors
    ///
    /// Fails when the dialog, its body region or its close control is missing.
    pub fn bind(
        document: &Document,
        config: &SiteConfig,
        catalog: Rc<Catalog>,
        lightbox: Lightbox,
    ) -> Result<Self, SiteError> {
        let markup = &config.markup;
        let dialog = as_html(element_by_id(document, &markup.modal_id)?)?;
        let region = element_by_id(document, &markup.modal_body_id)?;
        let close = as_html(query_in(&dialog, &markup.modal_close)?)?;
        dialog.set_attribute("role", "dialog")?;
        dialog.set_attribute("aria-modal", "true")?;

        let inner = Rc::new(RefCell::new(Inner {
            state: ModalState::new(&config.timings),
            catalog,
            lightbox,
            document: document.clone(),
            dialog: dialog.clone(),
            region,
            close: close.clone(),
            page_body: page_body(document)?,
            placeholder: config.placeholder_image.clone(),
            timer: TimerSlot::default(),
            gallery: Vec::new(),
        }));

        let mut listeners = Vec::new();

        let handle = Rc::clone(&inner);
        listeners.push(EventListener::new(&close, "click", move |_| {
            dispatch(&handle, |inner| inner.state.close());
        }));

        let handle = Rc::clone(&inner);
        let backdrop = dialog.clone();
        listeners.push(EventListener::new(&dialog, "click", move |event| {
            if targets(event, &backdrop) {
                dispatch(&handle, |inner| inner.state.close());
            }
        }));

        let handle = Rc::clone(&inner);
        listeners.push(EventListener::new_with_options(
            document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    on_key(&handle, event);
                }
            },
        ));

        let selector = markup.trigger_selector();
        let triggers = query_all(document, &selector)?;
        let direct = triggers.len();
        for trigger in triggers {
            report("mark trigger", trigger.set_attribute(BOUND_ATTR, "true"));
            let handle = Rc::clone(&inner);
            let project_attr = markup.project_attr.clone();
            let element = trigger.clone();
            listeners.push(EventListener::new_with_options(
                &trigger,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    open_from(&handle, &element, &project_attr);
                },
            ));
        }

        let handle = Rc::clone(&inner);
        let project_attr = markup.project_attr.clone();
        listeners.push(EventListener::new_with_options(
            document,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if let Some(trigger) = delegated_trigger(event, &selector) {
                    event.prevent_default();
                    open_from(&handle, &trigger, &project_attr);
                }
            },
        ));

        log::debug!("modal: bound {direct} triggers directly");
        Ok(Self { _inner: inner, _listeners: listeners })
    }
}

/// The trigger a document-level click landed in, unless its own listener
/// already handled it.
fn delegated_trigger(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_ref::<Element>()?;
    match element.closest(selector) {
        Ok(Some(trigger)) if TriggerListener::Delegated.claims(trigger.has_attribute(BOUND_ATTR)) => Some(trigger),
        Ok(_) => None,
        Err(err) => {
            log::debug!("modal: trigger lookup failed: {err:?}");
            None
        }
    }
}

fn open_from(inner: &Rc<RefCell<Inner>>, trigger: &Element, project_attr: &str) {
    let Some(project_id) = trigger.get_attribute(project_attr) else {
        log::warn!("modal: trigger without {project_attr}");
        return;
    };
    let Some(trigger) = trigger.dyn_ref::<HtmlElement>().cloned() else {
        log::warn!("modal: trigger for {project_id} is not an HTML element");
        return;
    };
    dispatch(inner, |inner| inner.state.open(&inner.catalog, &project_id, trigger));
}

fn on_key(inner: &Rc<RefCell<Inner>>, event: &KeyboardEvent) {
    match event.key().as_str() {
        "Escape" => {
            let lightbox = inner.borrow().lightbox.clone();
            if !lightbox.on_escape() {
                dispatch(inner, |inner| inner.state.on_escape());
            }
        }
        "Tab" => trap_tab(inner, event),
        _ => {}
    }
}

/// Keep Tab inside the topmost overlay: the lightbox while one is showing,
/// otherwise the active dialog.
fn trap_tab(inner: &Rc<RefCell<Inner>>, event: &KeyboardEvent) {
    let guard = inner.borrow();
    let scope = match guard.lightbox.focus_scope() {
        Some(overlay) => overlay,
        None if guard.state.is_active() => Element::from(guard.dialog.clone()),
        None => return,
    };
    let focusable = match scope.query_selector_all(FOCUSABLE_SELECTOR) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::debug!("modal: focusable lookup failed: {err:?}");
            return;
        }
    };
    let current = guard
        .document
        .active_element()
        .and_then(|active| focusable.iter().position(|element| *element == active));

    match cycle(focusable.len(), current, event.shift_key()) {
        TabMove::Browser => {}
        TabMove::Hold => event.prevent_default(),
        TabMove::Focus(index) => {
            event.prevent_default();
            if let Some(target) = focusable.get(index).and_then(|element| element.dyn_ref::<HtmlElement>()) {
                report("focus trap", target.focus());
            }
        }
    }
}

fn dispatch(inner: &Rc<RefCell<Inner>>, step: impl FnOnce(&mut Inner) -> Vec<ModalEffect<HtmlElement>>) {
    let effects = {
        let mut guard = inner.borrow_mut();
        step(&mut guard)
    };
    for effect in effects {
        apply(inner, effect);
    }
}

fn apply(inner: &Rc<RefCell<Inner>>, effect: ModalEffect<HtmlElement>) {
    let mut borrow = inner.borrow_mut();
    let guard = &mut *borrow;
    match effect {
        ModalEffect::Render { project_id, title } => {
            report("label dialog", guard.dialog.set_attribute("aria-label", &title));
            render(guard, &project_id);
        }
        ModalEffect::Show => report("show dialog", guard.dialog.style().set_property("display", "flex")),
        ModalEffect::LockScroll => report("lock scroll", guard.page_body.style().set_property("overflow", "hidden")),
        ModalEffect::Schedule { ticket, delay_ms, timer } => {
            let weak = Rc::downgrade(inner);
            guard.timer.schedule(delay_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, |inner| inner.state.on_timer(ticket, timer));
                }
            });
        }
        ModalEffect::Activate => set_class(&guard.dialog, ACTIVE_CLASS, true),
        ModalEffect::FocusClose => report("focus close", guard.close.focus()),
        ModalEffect::Deactivate => set_class(&guard.dialog, ACTIVE_CLASS, false),
        ModalEffect::Hide => report("hide dialog", guard.dialog.style().set_property("display", "none")),
        ModalEffect::UnlockScroll => report("unlock scroll", guard.page_body.style().remove_property("overflow")),
        ModalEffect::RestoreFocus(trigger) => report("restore focus", trigger.focus()),
    }
}

/// Render the record into the dialog body and rewire its gallery.
fn render(inner: &mut Inner, project_id: &str) {
    let Some(record) = inner.catalog.get(project_id) else {
        return;
    };
    let content = ModalContent::from_record(record);
    match render_content(&inner.document, &inner.region, &content, &inner.placeholder) {
        Ok(images) => {
            inner.gallery = images
                .iter()
                .flat_map(|image| gallery_listeners(image, &inner.lightbox, &inner.placeholder))
                .collect();
        }
        Err(err) => {
            inner.gallery.clear();
            log::error!("modal: rendering {project_id} failed: {err}");
        }
    }
}

/// Click, or Enter/Space while focused, enlarges the image.
fn gallery_listeners(image: &RenderedImage, lightbox: &Lightbox, placeholder: &str) -> [EventListener; 3] {
    let click = {
        let lightbox = lightbox.clone();
        let item = image.item.clone();
        EventListener::new(&image.element, "click", move |_| {
            lightbox.open(&item.path, &item.alt_text);
        })
    };
    let key = {
        let lightbox = lightbox.clone();
        let item = image.item.clone();
        EventListener::new_with_options(
            &image.element,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    lightbox.open(&item.path, &item.alt_text);
                }
            },
        )
    };
    [click, key, fallback_on_error(&image.element, placeholder)]
}
