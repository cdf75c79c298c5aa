//! Cursor trail binding.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::{SiteConfig, TrailConfig};
use crate::error::SiteError;
use crate::state::trail::{Spark, TrailEmitter};

use super::page_body;

pub struct Trail {
    _listener: EventListener,
}

impl Trail {
    pub fn bind(document: &Document, config: &SiteConfig) -> Result<Self, SiteError> {
        let body = page_body(document)?;
        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
        let mut emitter = TrailEmitter::new(SmallRng::seed_from_u64(seed), &config.trail, &config.timings);
        let trail = config.trail.clone();
        let owner = document.clone();

        let listener = EventListener::new(document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(spark) = emitter.on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y())) else {
                return;
            };
            if let Err(err) = spawn(&owner, &body, &spark, &trail, emitter.lifetime_ms()) {
                log::debug!("trail: spark dropped: {err}");
            }
        });
        Ok(Self { _listener: listener })
    }
}

/// Append one spark and remove it once its fade has run.
fn spawn(document: &Document, body: &HtmlElement, spark: &Spark, trail: &TrailConfig, lifetime_ms: u32) -> Result<(), SiteError> {
    let element = document.create_element("div")?;
    element.set_attribute("style", &spark.css(trail, lifetime_ms))?;
    element.set_attribute("aria-hidden", "true")?;
    body.append_child(&element)?;
    Timeout::new(lifetime_ms, move || element.remove()).forget();
    Ok(())
}
