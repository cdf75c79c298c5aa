//! Section navigator binding.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::consts::{ACTIVE_CLASS, SECTION_ENTER_CLASS, SECTION_EXIT_CLASS};
use crate::error::SiteError;
use crate::state::nav::{NavEffect, NavState};

use super::timer::TimerSlot;
use super::{query_all, set_class};

/// Owns the nav control listeners and the section hand-over timer.
pub struct Navigator {
    inner: Rc<RefCell<Inner>>,
    _listeners: Vec<EventListener>,
}

struct Inner {
    state: NavState,
    sections: HashMap<String, Element>,
    /// Controls paired with the section id they target.
    controls: Vec<(String, Element)>,
    timer: TimerSlot,
}

impl Navigator {
    /// Collect sections and nav controls and wire their clicks.
    ///
    /// # Errors
    ///
    /// Fails when the page has no addressable sections.
    pub fn bind(document: &Document, config: &SiteConfig) -> Result<Self, SiteError> {
        let markup = &config.markup;

        let mut sections = HashMap::new();
        let mut order = Vec::new();
        let mut active = None;
        for element in query_all(document, &markup.section)? {
            let id = element.id();
            if id.is_empty() {
                log::warn!("nav: ignoring {} without an id", markup.section);
                continue;
            }
            if active.is_none() && element.class_list().contains(ACTIVE_CLASS) {
                active = Some(id.clone());
            }
            order.push(id.clone());
            sections.insert(id, element);
        }
        if sections.is_empty() {
            return Err(SiteError::MissingElement(markup.section.clone()));
        }

        let controls = query_all(document, &markup.nav_item)?
            .into_iter()
            .filter_map(|element| element.get_attribute(&markup.section_attr).map(|target| (target, element)))
            .collect::<Vec<_>>();
        if controls.is_empty() {
            log::warn!("nav: no {} controls carry {}", markup.nav_item, markup.section_attr);
        }

        let inner = Rc::new(RefCell::new(Inner {
            state: NavState::new(order, active, &config.timings),
            sections,
            controls,
            timer: TimerSlot::default(),
        }));

        let listeners = {
            let guard = inner.borrow();
            guard
                .controls
                .iter()
                .map(|(target, element)| {
                    let handle = Rc::clone(&inner);
                    let target = target.clone();
                    EventListener::new_with_options(
                        element,
                        "click",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            event.prevent_default();
                            dispatch(&handle, |state| state.request(&target));
                        },
                    )
                })
                .collect::<Vec<_>>()
        };

        log::debug!("nav: bound {} controls", listeners.len());
        Ok(Self { inner, _listeners: listeners })
    }

    /// Navigate as if a control targeting `section` had been clicked.
    pub fn request(&self, section: &str) {
        dispatch(&self.inner, |state| state.request(section));
    }

    /// Logo shortcut. Animates through the matching nav control when one
    /// exists, otherwise switches classes directly.
    pub fn go_home(&self, home: &str) {
        let has_control = self.inner.borrow().controls.iter().any(|(target, _)| target == home);
        if has_control {
            self.request(home);
        } else {
            dispatch(&self.inner, |state| state.force_activate(home));
        }
    }
}

fn dispatch(inner: &Rc<RefCell<Inner>>, step: impl FnOnce(&mut NavState) -> Vec<NavEffect>) {
    let effects = step(&mut inner.borrow_mut().state);
    for effect in effects {
        apply(inner, effect);
    }
}

fn apply(inner: &Rc<RefCell<Inner>>, effect: NavEffect) {
    let mut guard = inner.borrow_mut();
    match effect {
        NavEffect::HighlightControl { section } => {
            for (target, element) in &guard.controls {
                set_class(element, ACTIVE_CLASS, *target == section);
            }
        }
        NavEffect::AnimateExit { section } => {
            if let Some(element) = guard.sections.get(&section) {
                set_class(element, SECTION_EXIT_CLASS, true);
            }
        }
        NavEffect::Activate { section, animate } => {
            for element in guard.sections.values() {
                set_class(element, ACTIVE_CLASS, false);
                set_class(element, SECTION_EXIT_CLASS, false);
                set_class(element, SECTION_ENTER_CLASS, false);
            }
            if let Some(element) = guard.sections.get(&section) {
                set_class(element, ACTIVE_CLASS, true);
                set_class(element, SECTION_ENTER_CLASS, animate);
            }
        }
        NavEffect::ClearAnimation { section } => {
            if let Some(element) = guard.sections.get(&section) {
                set_class(element, SECTION_ENTER_CLASS, false);
            }
        }
        NavEffect::Schedule { ticket, delay_ms, timer } => {
            let weak = Rc::downgrade(inner);
            guard.timer.schedule(delay_ms, move || {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, |state| state.on_timer(ticket, timer));
                }
            });
        }
    }
}

/// Show `section` by class manipulation alone, for pages where the
/// navigator could not be bound.
pub fn activate_directly(document: &Document, section_selector: &str, section: &str) {
    match query_all(document, section_selector) {
        Ok(sections) => {
            for element in sections {
                let on = element.id() == section;
                set_class(&element, ACTIVE_CLASS, on);
                set_class(&element, SECTION_EXIT_CLASS, false);
                set_class(&element, SECTION_ENTER_CLASS, false);
            }
        }
        Err(err) => log::warn!("nav: cannot switch to {section}: {err}"),
    }
}
