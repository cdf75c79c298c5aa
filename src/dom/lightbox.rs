//! Lightbox binding. Each open builds a fresh overlay appended to the body;
//! closing detaches it along with its listeners.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::config::SiteConfig;
use crate::consts::{ACTIVE_CLASS, LIGHTBOX_OVERLAY_CLASS};
use crate::content::image_src;
use crate::error::SiteError;
use crate::state::lightbox::{LightboxEffect, LightboxId, LightboxState};

use super::render::{append, create, image, text};
use super::timer::TimerSlot;
use super::{as_html, page_body, report, set_class, targets};

/// Shared handle; gallery images in the dialog hold clones of it.
#[derive(Clone)]
pub struct Lightbox {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    state: LightboxState,
    document: Document,
    page_body: HtmlElement,
    placeholder: String,
    overlays: HashMap<LightboxId, Overlay>,
    timer: TimerSlot,
    /// Focused element before the first overlay opened; refocused once the
    /// last one is gone.
    return_focus: Option<HtmlElement>,
}

struct Overlay {
    root: Element,
    close: HtmlElement,
    image: HtmlImageElement,
    _listeners: Vec<EventListener>,
}

impl Lightbox {
    pub fn new(document: &Document, config: &SiteConfig) -> Result<Self, SiteError> {
        let inner = Inner {
            state: LightboxState::new(&config.timings),
            document: document.clone(),
            page_body: page_body(document)?,
            placeholder: config.placeholder_image.clone(),
            overlays: HashMap::new(),
            timer: TimerSlot::default(),
            return_focus: None,
        };
        Ok(Self { inner: Rc::new(RefCell::new(inner)) })
    }

    /// Enlarge `path`, replacing any overlay already on the page.
    pub fn open(&self, path: &str, alt_text: &str) {
        {
            let mut guard = self.inner.borrow_mut();
            if guard.return_focus.is_none() {
                guard.return_focus =
                    guard.document.active_element().and_then(|active| active.dyn_ref::<HtmlElement>().cloned());
            }
        }
        dispatch(&self.inner, |state| state.open(path, alt_text));
    }

    /// Close the showing overlay on Escape. Returns `false` when there is
    /// none, leaving the key to the dialog underneath.
    pub fn on_escape(&self) -> bool {
        let effects = self.inner.borrow_mut().state.on_escape();
        match effects {
            Some(effects) => {
                for effect in effects {
                    apply(&self.inner, effect);
                }
                true
            }
            None => false,
        }
    }

    /// Root of the showing overlay, which owns focus while it is up.
    pub fn focus_scope(&self) -> Option<Element> {
        let guard = self.inner.borrow();
        let id = guard.state.showing()?;
        guard.overlays.get(&id).map(|overlay| overlay.root.clone())
    }
}

fn dispatch(inner: &Rc<RefCell<Inner>>, step: impl FnOnce(&mut LightboxState) -> Vec<LightboxEffect>) {
    let effects = step(&mut inner.borrow_mut().state);
    for effect in effects {
        apply(inner, effect);
    }
}

fn apply(inner: &Rc<RefCell<Inner>>, effect: LightboxEffect) {
    match effect {
        LightboxEffect::Mount { id, path, alt_text } => match mount(inner, id, &path, &alt_text) {
            Ok(overlay) => {
                inner.borrow_mut().overlays.insert(id, overlay);
            }
            Err(err) => log::error!("lightbox: cannot build overlay for {path}: {err}"),
        },
        LightboxEffect::Activate { id } => {
            with_overlay(inner, id, |overlay| {
                set_class(&overlay.root, ACTIVE_CLASS, true);
                report("focus lightbox close", overlay.close.focus());
            });
        }
        LightboxEffect::Deactivate { id } => {
            with_overlay(inner, id, |overlay| set_class(&overlay.root, ACTIVE_CLASS, false));
        }
        LightboxEffect::Detach { id } => {
            let (removed, restore) = {
                let mut guard = inner.borrow_mut();
                let removed = guard.overlays.remove(&id);
                let restore = if guard.state.showing().is_none() { guard.return_focus.take() } else { None };
                (removed, restore)
            };
            if let Some(overlay) = removed {
                overlay.root.remove();
            }
            if let Some(target) = restore {
                report("restore focus", target.focus());
            }
        }
        LightboxEffect::SubstitutePlaceholder { id } => {
            let placeholder = inner.borrow().placeholder.clone();
            with_overlay(inner, id, |overlay| overlay.image.set_src(&placeholder));
        }
        LightboxEffect::Schedule { ticket, delay_ms, timer } => {
            let weak = Rc::downgrade(inner);
            inner.borrow_mut().timer.schedule(delay_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, |state| state.on_timer(ticket, timer));
                }
            });
        }
    }
}

fn with_overlay(inner: &Rc<RefCell<Inner>>, id: LightboxId, action: impl FnOnce(&Overlay)) {
    if let Some(overlay) = inner.borrow().overlays.get(&id) {
        action(overlay);
    }
}

/// Build `div.image-modal-overlay > div.image-modal-content` holding a close
/// button, the full-size image and its caption, and append it to the body.
fn mount(inner: &Rc<RefCell<Inner>>, id: LightboxId, path: &str, alt_text: &str) -> Result<Overlay, SiteError> {
    let (document, page_body, placeholder) = {
        let guard = inner.borrow();
        (guard.document.clone(), guard.page_body.clone(), guard.placeholder.clone())
    };

    let root = create(&document, "div", Some(LIGHTBOX_OVERLAY_CLASS))?;
    root.set_attribute("role", "dialog")?;
    root.set_attribute("aria-modal", "true")?;
    root.set_attribute("aria-label", alt_text)?;

    let content = create(&document, "div", Some("image-modal-content"))?;
    let close = as_html(text(&document, "button", Some("image-modal-close"), "×")?)?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close image")?;
    let full = image(&document, Some("fullsize-image"))?;
    full.set_src(image_src(path, &placeholder));
    full.set_alt(alt_text);
    let caption = text(&document, "p", Some("fullsize-caption"), alt_text)?;

    append(&content, &close)?;
    append(&content, &full)?;
    append(&content, &caption)?;
    append(&root, &content)?;
    append(&page_body, &root)?;

    let on_close = {
        let weak = Rc::downgrade(inner);
        EventListener::new(&close, "click", move |_| {
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, |state| state.close(id));
            }
        })
    };
    let on_backdrop = {
        let weak = Rc::downgrade(inner);
        let backdrop = root.clone();
        EventListener::new(&root, "click", move |event| {
            if !targets(event, &backdrop) {
                return;
            }
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, |state| state.close(id));
            }
        })
    };
    let on_error = {
        let weak = Rc::downgrade(inner);
        EventListener::new(&full, "error", move |_| {
            if let Some(inner) = weak.upgrade() {
                dispatch(&inner, |state| state.on_image_error(id));
            }
        })
    };

    Ok(Overlay { root, close, image: full, _listeners: vec![on_close, on_backdrop, on_error] })
}
