//! Page-lifetime composition root.
//!
//! `Site::initialize` reads configuration and the catalog, then binds each
//! controller independently. A controller whose markup is missing is left
//! out with an error log; the rest of the page keeps working. The resulting
//! `Site` lives in a thread-local for as long as the page does, which keeps
//! every listener and timer it owns alive.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::Document;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::consts::{CATALOG_SCRIPT_ID, CONFIG_SCRIPT_ID};
use crate::dom::document;
use crate::dom::lightbox::Lightbox;
use crate::dom::modal::Modal;
use crate::dom::navigator::{Navigator, activate_directly};
use crate::dom::trail::Trail;
use crate::error::SiteError;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every controller bound to the page, kept for the page lifetime.
pub struct Site {
    _navigator: Option<Rc<Navigator>>,
    _modal: Option<Modal>,
    _trail: Option<Trail>,
    _logo: Option<EventListener>,
}

impl Site {
    /// Bind all controllers to the current document.
    ///
    /// # Errors
    ///
    /// Fails only when there is no document at all; individual controllers
    /// degrade on their own.
    pub fn initialize() -> Result<Self, SiteError> {
        let document = document()?;
        let config = load_config(&document);
        let catalog = Rc::new(load_catalog(&document));

        let navigator = enable("navigator", Navigator::bind(&document, &config)).map(Rc::new);
        let lightbox = enable("lightbox", Lightbox::new(&document, &config));
        let modal = lightbox.and_then(|lightbox| {
            enable("modal", Modal::bind(&document, &config, Rc::clone(&catalog), lightbox))
        });
        let trail = enable("trail", Trail::bind(&document, &config));
        let logo = bind_logo(&document, &config, navigator.clone());

        log::info!(
            "portfolio: ready ({} projects, navigator {}, modal {}, trail {})",
            catalog.len(),
            status(navigator.is_some()),
            status(modal.is_some()),
            status(trail.is_some()),
        );
        Ok(Self { _navigator: navigator, _modal: modal, _trail: trail, _logo: logo })
    }
}

/// Initialize now, or on `DOMContentLoaded` if the document is still loading.
pub fn install_when_ready() {
    let document = match document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("portfolio: {err}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| install()).forget();
    } else {
        install();
    }
}

fn install() {
    match Site::initialize() {
        Ok(site) => SITE.with(|slot| *slot.borrow_mut() = Some(site)),
        Err(err) => log::error!("portfolio: setup failed: {err}"),
    }
}

fn enable<T>(name: &str, bound: Result<T, SiteError>) -> Option<T> {
    match bound {
        Ok(controller) => Some(controller),
        Err(err) => {
            log::error!("portfolio: {name} disabled: {err}");
            None
        }
    }
}

fn status(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(raw) = embedded_json(document, CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("portfolio: ignoring #{CONFIG_SCRIPT_ID}: {err}");
        SiteConfig::default()
    })
}

fn load_catalog(document: &Document) -> Catalog {
    if let Some(raw) = embedded_json(document, CATALOG_SCRIPT_ID) {
        match Catalog::from_json(&raw) {
            Ok(catalog) => return catalog,
            Err(err) => log::warn!("portfolio: ignoring #{CATALOG_SCRIPT_ID}: {err}"),
        }
    }
    Catalog::builtin().unwrap_or_else(|err| {
        log::error!("portfolio: built-in catalog unusable: {err}");
        Catalog::default()
    })
}

fn embedded_json(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.text_content())
        .filter(|raw| !raw.trim().is_empty())
}

/// The logo goes home through the navigator when one is bound, and by plain
/// class switching when it is not.
fn bind_logo(document: &Document, config: &SiteConfig, navigator: Option<Rc<Navigator>>) -> Option<EventListener> {
    let logo = match document.query_selector(&config.markup.logo) {
        Ok(Some(logo)) => logo,
        Ok(None) => {
            log::debug!("portfolio: no {} control", config.markup.logo);
            return None;
        }
        Err(err) => {
            log::warn!("portfolio: logo lookup failed: {err:?}");
            return None;
        }
    };
    let home = config.home_section.clone();
    let sections = config.markup.section.clone();
    let owner = document.clone();
    Some(EventListener::new_with_options(
        &logo,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            match &navigator {
                Some(navigator) => navigator.go_home(&home),
                None => activate_directly(&owner, &sections, &home),
            }
        },
    ))
}
