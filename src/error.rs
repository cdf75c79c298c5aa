//! Top-level error type for page setup.
//!
//! Nothing here is fatal to the page: setup failures disable the affected
//! controller and are logged, event-time failures are logged and skipped.

use crate::catalog::CatalogError;
use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("page element not found: {0}")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
