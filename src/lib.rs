//! Client-side interactivity for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attaches to page markup authored
//! elsewhere. It drives section navigation with exit/enter animations, a
//! project details dialog rendered from an in-memory catalog, an image
//! lightbox, and a decorative cursor trail.
//!
//! Every controller is split in two: a browser-free state machine under
//! [`state`] that turns inputs into effects, and (with the `csr` feature) a
//! binding under `dom` that owns element handles, applies the effects and
//! owns the timers. The state machines are what the unit tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Project records and the immutable catalog |
//! | [`content`] | Dialog content model built from a record |
//! | [`config`] | Timings, markup selectors and trail appearance |
//! | [`state`] | Navigator, modal, lightbox, focus and trail state machines |
//! | [`consts`] | Class names and other fixed strings |
//! | [`error`] | Top-level error type |
//! | `dom` | web-sys bindings for each controller (`csr` only) |
//! | `site` | Page-lifetime composition root (`csr` only) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod content;
pub mod error;
pub mod state;

#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod site;

/// WASM entry point: installs logging and binds the controllers to the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"portfolio: logger was already installed".into());
    }
    site::install_when_ready();
}
